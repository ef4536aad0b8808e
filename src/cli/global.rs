// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --root DIR        ← paths.root override
//! --manifest FILE   ← paths.manifest override
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --json            ← JSON console records
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --config > modpack.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Directory holding the manifest, staging area, output tree and archive.
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Manifest file, relative to the root unless absolute.
    #[arg(short = 'm', long = "manifest", value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Writes console records as JSON lines.
    #[arg(long)]
    pub json: bool,

    /// Sets an option, such as 'sources/github_token=...' or 'pipeline.progress=false'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// Explicit flags come after `--set` values so they win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(ref root) = self.root {
            overrides.push(format!("paths/root={}", root.display()));
        }

        if let Some(ref manifest) = self.manifest {
            overrides.push(format!("paths/manifest={}", manifest.display()));
        }

        if let Some(level) = self.log_level {
            overrides.push(format!("global/output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global/file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global/log_file={}", path.display()));
        }

        if self.json {
            overrides.push("global/json_logs=true".to_string());
        }

        overrides
    }
}
