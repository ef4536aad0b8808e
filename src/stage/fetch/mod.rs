// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fetch stage: resolve and download one mod asset into staging.
//!
//! ```text
//! descriptor --> source::resolve() --> URL
//!                                       |
//!            tmp/<name>/  (created, parent must exist)
//!                                       v
//!            tmp/<name>/<name>.<ext>  <-- Downloader (stream, overwrite)
//! ```

use std::path::PathBuf;

use tracing::{debug, info};

use super::StageContext;
use crate::error::DownloadError;
use crate::manifest::ModDescriptor;
use crate::net::Downloader;
use crate::source;
use crate::utility::fs::ensure_dir;

/// Downloads the asset of `descriptor` and returns the staged file path.
///
/// An existing staged file is overwritten. A failed transfer leaves no
/// partial file behind.
///
/// # Errors
///
/// Returns a `DownloadError` if resolution fails, the staging directory
/// cannot be created, or the transfer fails.
pub async fn fetch(
    descriptor: &ModDescriptor,
    ctx: &StageContext,
) -> Result<PathBuf, DownloadError> {
    let url = source::resolve(descriptor, ctx.sources()).await?;
    debug!(url = %url, "Resolved download URL");

    let dir = ctx.layout().staging_dir(descriptor);
    ensure_dir(&dir)
        .await
        .map_err(|source| DownloadError::StagingDir {
            path: dir.clone(),
            source,
        })?;

    let target = ctx.layout().staged_file(descriptor);
    let path = Downloader::new()
        .url(&url)
        .file(&target)
        .progress(ctx.progress())
        .download()
        .await?;

    info!(path = %path.display(), "Downloaded");
    Ok(path)
}

#[cfg(test)]
mod tests;
