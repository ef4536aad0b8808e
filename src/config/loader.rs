// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set() / .set_override_str()
//!        |
//!        v
//!    build() --> Settings
//! ```

use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::{ConfigError, Result};

/// Builder for loading settings from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_SECTION__KEY` environment variables.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies a `section.key=value` (or `section/key=value`) override.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` if the option has no `=` or no
    /// section, or an error if the override is rejected.
    pub fn set_override_str(self, option: &str) -> Result<Self> {
        let (key, value) = parse_override(option)?;
        self.set(&key, value)
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - The merged configuration cannot be deserialized into `Settings`.
    pub fn build(self) -> Result<Settings> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `section.key=value` into a dotted key and a value.
pub(crate) fn parse_override(option: &str) -> std::result::Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidOverride(option.to_string());

    let (key, value) = option.split_once('=').ok_or_else(invalid)?;
    let key = key.trim().replace('/', ".");
    if key.is_empty() || !key.contains('.') || key.starts_with('.') || key.ends_with('.') {
        return Err(invalid());
    }

    Ok((key, value.trim().to_string()))
}
