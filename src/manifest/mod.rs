// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod manifest (`modlist.json`).
//!
//! ```text
//! {
//!   "mods": [
//!     { "name": "BepInExPack", "source": "thunderstoreIo",
//!       "url": "https://thunderstore.io/c/x/p/bbepis/BepInExPack/",
//!       "assetType": "zip" },
//!     { "name": "ConfigManager", "source": "github",
//!       "url": "https://github.com/BepInEx/BepInEx.ConfigurationManager",
//!       "assetType": "dll", "assetNameStartsWith": "ConfigurationManager" }
//!   ]
//! }
//! ```
//!
//! Loading only checks that the document is JSON with an optional `mods`
//! array. Each entry is turned into a [`ModDescriptor`] separately, so one
//! malformed entry fails that mod alone.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Component, Path};
use tracing::{debug, warn};

use crate::error::ManifestError;

/// Where a mod is downloaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// Latest GitHub release; the asset is picked by name prefix.
    #[serde(rename = "github")]
    GitHub,
    /// Thunderstore package page; the download button link is scraped.
    #[serde(rename = "thunderstoreIo")]
    Thunderstore,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GitHub => write!(f, "github"),
            Self::Thunderstore => write!(f, "thunderstoreIo"),
        }
    }
}

/// Kind of file a mod ships, which decides how it is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Archive unpacked into the output tree root.
    Zip,
    /// Single plugin file moved into the plugins directory.
    Dll,
}

impl AssetType {
    /// File extension of the staged asset.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Dll => "dll",
        }
    }

    #[must_use]
    pub const fn is_archive(self) -> bool {
        matches!(self, Self::Zip)
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// One mod to bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModDescriptor {
    /// Unique name; also the staging directory and staged file stem.
    pub name: String,
    pub source: SourceKind,
    /// Repository URL for GitHub, package page URL for Thunderstore.
    pub url: String,
    pub asset_type: AssetType,
    /// Release asset name prefix (GitHub only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_name_starts_with: Option<String>,
}

impl ModDescriptor {
    /// Builds a descriptor from entry `index` of the `mods` array.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::InvalidEntry` if the entry does not have the
    /// descriptor shape or its name is not usable as a single path segment.
    pub fn from_entry(index: usize, entry: &Value) -> Result<Self, ManifestError> {
        let descriptor =
            Self::deserialize(entry).map_err(|e| ManifestError::InvalidEntry {
                index,
                message: e.to_string(),
            })?;

        if !is_path_segment(&descriptor.name) {
            return Err(ManifestError::InvalidEntry {
                index,
                message: format!(
                    "name '{}' must be a single non-empty path segment",
                    descriptor.name
                ),
            });
        }

        Ok(descriptor)
    }

    /// Staged asset file name: `<name>.<ext>`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.asset_type.extension())
    }
}

fn is_path_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(segment)), None) if segment == name
    )
}

#[derive(Debug, Default, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    mods: Option<Vec<Value>>,
}

/// Parsed manifest: the raw `mods` entries in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    entries: Vec<Value>,
}

impl Manifest {
    /// Parses manifest text.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the text is not a JSON object whose
    /// `mods` field, when present, is an array.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let file: ManifestFile = serde_json::from_str(text)?;
        Ok(Self {
            entries: file.mods.unwrap_or_default(),
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts every entry, keeping per-entry failures in place.
    #[must_use]
    pub fn descriptors(&self) -> Vec<Result<ModDescriptor, ManifestError>> {
        let descriptors: Vec<_> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| ModDescriptor::from_entry(index, entry))
            .collect();

        let mut seen = HashSet::new();
        for descriptor in descriptors.iter().flatten() {
            if !seen.insert(descriptor.name.as_str()) {
                warn!(
                    mod_name = %descriptor.name,
                    "Duplicate mod name, later entries overwrite earlier staged files"
                );
            }
        }

        descriptors
    }
}

/// Loads the manifest at `path`.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns `ManifestError::Read` if the file exists but cannot be read and
/// `ManifestError::Parse` if it is not valid JSON.
pub async fn load(path: &Path) -> Result<Option<Manifest>, ManifestError> {
    debug!(path = %path.display(), "Loading manifest");

    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Manifest not found");
            return Ok(None);
        }
        Err(source) => {
            return Err(ManifestError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let manifest = Manifest::from_json(&text).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), mods = manifest.len(), "Manifest loaded");
    Ok(Some(manifest))
}
