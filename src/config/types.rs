// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Settings: GlobalConfig, PathsConfig, SourcesConfig, PipelineConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Emit console records as JSON lines.
    pub json_logs: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            json_logs: false,
        }
    }
}

/// Remote endpoints used to resolve download URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcesConfig {
    /// Prefix stripped from a GitHub mod URL to obtain `owner/repo`.
    pub github_url_prefix: String,
    /// Base URL of the GitHub REST API.
    pub github_api: String,
    /// Optional token sent as a bearer token to the GitHub API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
    /// Links on a Thunderstore page must start with this to be downloaded.
    pub thunderstore_download_prefix: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            github_url_prefix: "https://github.com/".to_string(),
            github_api: "https://api.github.com".to_string(),
            github_token: None,
            thunderstore_download_prefix: "https://thunderstore.io/package/download/".to_string(),
        }
    }
}

/// Pipeline behavior toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Skip extraction/relocation for mods whose download failed.
    ///
    /// Off by default: every mod is extracted or relocated according to its
    /// asset type, and a failed download shows up as a second logged error.
    pub skip_failed_downloads: bool,
    /// Show progress bars while transferring.
    pub progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            skip_failed_downloads: false,
            progress: true,
        }
    }
}
