// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options command for modpack-rs.

use std::path::PathBuf;

use crate::config::Settings;

/// Display loaded configuration files and current option values.
pub fn run_options_command(settings: &Settings, config_files: &[(String, PathBuf)]) {
    if config_files.is_empty() {
        println!("# no configuration files loaded");
    } else {
        for (kind, path) in config_files {
            println!("# {kind}: {}", path.display());
        }
    }

    for line in settings.format_options() {
        println!("{line}");
    }
}
