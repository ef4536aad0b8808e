// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for modpack-rs.

use crate::config::Settings;
use crate::error::Result;
use crate::manifest::{self, Manifest};

/// Formats one line per manifest entry.
///
/// Invalid entries are listed by index with the reason they were rejected.
#[must_use]
pub fn format_mod_list(manifest: &Manifest) -> Vec<String> {
    manifest
        .descriptors()
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Ok(d) => format!("{} [{}, {}] {}", d.name, d.source, d.asset_type, d.url),
            Err(e) => format!("#{index} invalid: {e}"),
        })
        .collect()
}

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if the manifest exists but cannot be read or parsed.
pub async fn run_list_command(settings: &Settings) -> Result<()> {
    let layout = settings.layout();
    let Some(manifest) = manifest::load(layout.manifest()).await? else {
        println!("No manifest found at {}", layout.manifest().display());
        return Ok(());
    };

    if manifest.is_empty() {
        println!("No mods listed");
    } else {
        for line in format_mod_list(&manifest) {
            println!("{line}");
        }
    }
    Ok(())
}
