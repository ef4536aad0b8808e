// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/
//!   modlist.json           (manifest)
//!   tmp/<name>/<name>.zip  (staging)
//!   output/                (merged mod contents)
//!     BepInEx/plugins/     (single-file mods)
//!   output.zip             (final archive)
//! ```
//!
//! Relative paths resolve against `root`; `plugins` resolves against `output`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::manifest::ModDescriptor;

/// Workspace paths as written in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Base directory for every relative path below.
    pub root: PathBuf,
    /// Manifest listing the mods.
    pub manifest: PathBuf,
    /// Staging root holding one directory per mod.
    pub staging: PathBuf,
    /// Output tree merged from all mods.
    pub output: PathBuf,
    /// Plugin directory for single-file mods (relative to `output`).
    pub plugins: PathBuf,
    /// Final archive path.
    pub archive: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            manifest: PathBuf::from("modlist.json"),
            staging: PathBuf::from("tmp"),
            output: PathBuf::from("output"),
            plugins: PathBuf::from("BepInEx").join("plugins"),
            archive: PathBuf::from("output.zip"),
        }
    }
}

impl PathsConfig {
    /// Resolve every path into a [`Layout`].
    #[must_use]
    pub fn resolve(&self) -> Layout {
        let against = |base: &Path, path: &Path| {
            if path.is_relative() {
                base.join(path)
            } else {
                path.to_path_buf()
            }
        };

        let output = against(&self.root, &self.output);
        Layout {
            manifest: against(&self.root, &self.manifest),
            staging: against(&self.root, &self.staging),
            plugins: against(&output, &self.plugins),
            archive: against(&self.root, &self.archive),
            output,
        }
    }
}

/// Resolved filesystem locations handed to every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    manifest: PathBuf,
    staging: PathBuf,
    output: PathBuf,
    plugins: PathBuf,
    archive: PathBuf,
}

impl Layout {
    /// Default layout rooted at `root`.
    #[must_use]
    pub fn under(root: impl Into<PathBuf>) -> Self {
        PathsConfig {
            root: root.into(),
            ..PathsConfig::default()
        }
        .resolve()
    }

    #[must_use]
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    #[must_use]
    pub fn staging(&self) -> &Path {
        &self.staging
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub fn plugins(&self) -> &Path {
        &self.plugins
    }

    #[must_use]
    pub fn archive(&self) -> &Path {
        &self.archive
    }

    /// Staging directory of one mod: `<staging>/<name>`.
    #[must_use]
    pub fn staging_dir(&self, descriptor: &ModDescriptor) -> PathBuf {
        self.staging.join(&descriptor.name)
    }

    /// Staged asset of one mod: `<staging>/<name>/<name>.<ext>`.
    #[must_use]
    pub fn staged_file(&self, descriptor: &ModDescriptor) -> PathBuf {
        self.staging_dir(descriptor).join(descriptor.file_name())
    }
}
