// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modpack-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. modpack.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. MODPACK_* env vars
//! 5. --set section.key=value
//! 6. CLI flags (--root, --manifest, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODPACK_PATHS__ROOT=/srv/pack          → paths.root
//! MODPACK_SOURCES__GITHUB_TOKEN=ghp_...  → sources.github_token
//! MODPACK_PIPELINE__PROGRESS=false       → pipeline.progress
//! ```
//!
//! The manifest itself (`modlist.json`) is not part of the settings; see
//! [`crate::manifest`].

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use paths::{Layout, PathsConfig};
use types::{GlobalConfig, PipelineConfig, SourcesConfig};

/// Complete application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Logging options.
    pub global: GlobalConfig,
    /// Workspace paths.
    pub paths: PathsConfig,
    /// Remote endpoints.
    pub sources: SourcesConfig,
    /// Pipeline toggles.
    pub pipeline: PipelineConfig,
}

impl Settings {
    /// Create a new settings builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modpack_rs::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("modpack.toml")
    ///     .with_env_prefix("MODPACK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolved filesystem layout.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.paths.resolve()
    }

    /// Format settings for display.
    ///
    /// Secrets are shown as `[hidden]`. Output is ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_sources_options(&mut options);
        self.format_pipeline_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.json_logs".into(), self.global.json_logs.to_string());
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let layout = self.layout();
        let fmt = |p: &Path| p.display().to_string();

        options.insert("paths.root".into(), fmt(&self.paths.root));
        options.insert("paths.manifest".into(), fmt(layout.manifest()));
        options.insert("paths.staging".into(), fmt(layout.staging()));
        options.insert("paths.output".into(), fmt(layout.output()));
        options.insert("paths.plugins".into(), fmt(layout.plugins()));
        options.insert("paths.archive".into(), fmt(layout.archive()));
    }

    fn format_sources_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "sources.github_url_prefix".into(),
            self.sources.github_url_prefix.clone(),
        );
        options.insert("sources.github_api".into(), self.sources.github_api.clone());
        if self.sources.github_token.is_some() {
            options.insert("sources.github_token".into(), "[hidden]".into());
        }
        options.insert(
            "sources.thunderstore_download_prefix".into(),
            self.sources.thunderstore_download_prefix.clone(),
        );
    }

    fn format_pipeline_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "pipeline.skip_failed_downloads".into(),
            self.pipeline.skip_failed_downloads.to_string(),
        );
        options.insert(
            "pipeline.progress".into(),
            self.pipeline.progress.to_string(),
        );
    }
}
