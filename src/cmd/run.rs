// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command: the full bundle pipeline.

use std::sync::Arc;

use anyhow::Context;
use tracing::warn;

use crate::config::Settings;
use crate::error::Result;
use crate::pipeline::{Pipeline, RunReport};
use crate::stage::StageContext;

/// Runs the pipeline and prints the run summary.
///
/// Failed mods are reported but do not make the command fail.
///
/// # Errors
///
/// Returns an error if the manifest exists but cannot be read or parsed.
pub async fn run_bundle_command(settings: Arc<Settings>) -> Result<RunReport> {
    let pipeline = Pipeline::new(StageContext::new(settings));
    let manifest = pipeline.context().layout().manifest().to_path_buf();

    let report = pipeline
        .run()
        .await
        .with_context(|| format!("run aborted, manifest {}", manifest.display()))?;

    for failed in report.failures() {
        if let Some(err) = failed.fetch.error().or_else(|| failed.install.error()) {
            warn!(mod_name = %failed.label, error = %err, "Mod not installed");
        }
    }

    println!("{}", report.summary());
    Ok(report)
}
