// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run orchestration.
//!
//! ```text
//! load manifest ──(parse error)──> abort run
//!      |
//!      v  (absent: no mods)
//! pass 1  fetch     every valid entry               manifest order
//! pass 2  extract   assetType = zip                 manifest order
//! pass 3  relocate  assetType = dll                 manifest order
//! once    package   output/ --> output.zip
//!
//! per-mod failure --> logged, recorded in ModReport, run continues
//! ```
//!
//! Passes 2 and 3 run for every mod of the matching asset type, whether or
//! not its fetch succeeded, unless `pipeline.skip_failed_downloads` is set.

pub mod report;

use std::fmt::Display;
use std::future::Future;

use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::error::{ManifestError, ModpackError};
use crate::logging::{Stage, mod_span};
use crate::manifest::{self, AssetType, Manifest, ModDescriptor};
use crate::stage::{StageContext, extract, fetch, package, relocate};

pub use report::{ModReport, RunReport, RunSummary, StageOutcome};

/// Sequential bundle run over one manifest.
#[derive(Debug, Clone)]
pub struct Pipeline {
    ctx: StageContext,
}

impl Pipeline {
    #[must_use]
    pub const fn new(ctx: StageContext) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub const fn context(&self) -> &StageContext {
        &self.ctx
    }

    /// Runs every stage and returns what happened to each mod.
    ///
    /// Per-mod failures and a packaging failure are recorded in the report;
    /// only a manifest that exists but cannot be read or parsed aborts the
    /// run.
    ///
    /// The staging root is created with all its parents before the fetch
    /// pass whenever the manifest has a valid entry. Per-mod staging
    /// directories below it are still created one level only, so a fetch
    /// fails with `DownloadError::StagingDir` if the root is missing after
    /// all.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Read` or `ManifestError::Parse`.
    pub async fn run(&self) -> Result<RunReport, ManifestError> {
        let layout = self.ctx.layout();
        let manifest = manifest::load(layout.manifest()).await?;
        let manifest_found = manifest.is_some();
        let descriptors = manifest
            .as_ref()
            .map(Manifest::descriptors)
            .unwrap_or_default();

        info!(mods = descriptors.len(), "Starting run");

        let mut mods: Vec<ModReport> = Vec::with_capacity(descriptors.len());
        let mut valid: Vec<Option<ModDescriptor>> = Vec::with_capacity(descriptors.len());
        for (index, entry) in descriptors.into_iter().enumerate() {
            match entry {
                Ok(descriptor) => {
                    mods.push(ModReport {
                        label: descriptor.name.clone(),
                        asset_type: Some(descriptor.asset_type),
                        fetch: StageOutcome::NotAttempted,
                        install: StageOutcome::NotAttempted,
                    });
                    valid.push(Some(descriptor));
                }
                Err(err) => {
                    error!(index, error = %err, "Skipping invalid manifest entry");
                    mods.push(ModReport {
                        label: format!("#{index}"),
                        asset_type: None,
                        fetch: StageOutcome::Failed(err.into()),
                        install: StageOutcome::NotAttempted,
                    });
                    valid.push(None);
                }
            }
        }

        if valid.iter().any(Option::is_some) {
            self.prepare_staging().await;
        }

        for (descriptor, report) in valid.iter().zip(mods.iter_mut()) {
            if let Some(descriptor) = descriptor {
                report.fetch =
                    run_stage(descriptor, Stage::Fetch, fetch::fetch(descriptor, &self.ctx)).await;
            }
        }

        for (descriptor, report) in valid.iter().zip(mods.iter_mut()) {
            if let Some(descriptor) = descriptor
                && descriptor.asset_type == AssetType::Zip
                && self.should_install(report)
            {
                report.install = run_stage(
                    descriptor,
                    Stage::Extract,
                    extract::extract(descriptor, &self.ctx),
                )
                .await;
            }
        }

        for (descriptor, report) in valid.iter().zip(mods.iter_mut()) {
            if let Some(descriptor) = descriptor
                && descriptor.asset_type == AssetType::Dll
                && self.should_install(report)
            {
                report.install = run_stage(
                    descriptor,
                    Stage::Relocate,
                    relocate::relocate(descriptor, &self.ctx),
                )
                .await;
            }
        }

        let package = package::package(&self.ctx)
            .instrument(info_span!("package"))
            .await;
        if let Err(err) = &package {
            error!(error = %err, "Packaging failed");
        }

        let report = RunReport {
            mods,
            manifest_found,
            package,
        };
        info!(summary = %report.summary(), "Run finished");
        Ok(report)
    }

    /// Creates the staging root with all parents.
    ///
    /// Failure is only logged; each fetch then reports its own staging error.
    async fn prepare_staging(&self) {
        let staging = self.ctx.layout().staging();
        if let Err(err) = tokio::fs::create_dir_all(staging).await {
            warn!(
                path = %staging.display(),
                error = %err,
                "Failed to create staging root"
            );
        }
    }

    fn should_install(&self, report: &ModReport) -> bool {
        if self.ctx.settings().pipeline.skip_failed_downloads && report.fetch.is_failed() {
            debug!(mod_name = %report.label, "Download failed, skipping install");
            return false;
        }
        true
    }
}

async fn run_stage<T, E, F>(descriptor: &ModDescriptor, stage: Stage, work: F) -> StageOutcome
where
    F: Future<Output = Result<T, E>>,
    E: Into<ModpackError> + Display,
{
    async move {
        let result = work.await;
        if let Err(err) = &result {
            error!(error = %err, "{stage} failed");
        }
        StageOutcome::from_result(result)
    }
    .instrument(mod_span(&descriptor.name, stage))
    .await
}
