// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Extract stage: unpack a staged archive into the output tree.
//!
//! ```text
//! tmp/<name>/<name>.zip --> output/
//!   entry "BepInEx/core/x.dll"  --> output/BepInEx/core/x.dll (overwrite)
//!   entry "../evil"             --> skipped (escapes output)
//!   unix mode of file entries   --> applied on unix
//! ```
//!
//! Archives of several mods merge into the same tree; later archives win on
//! conflicting file paths.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tokio::task;
use tracing::{debug, info, warn};

use super::StageContext;
use crate::error::ExtractionError;
use crate::manifest::ModDescriptor;
use crate::utility::fs::ensure_dir;

/// Summary of one extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractSummary {
    pub files: usize,
    pub directories: usize,
    /// Entries dropped because their name would leave the output tree.
    pub skipped: usize,
}

/// Extracts the staged archive of `descriptor` into the output directory.
///
/// # Errors
///
/// See [`extract_archive`].
pub async fn extract(
    descriptor: &ModDescriptor,
    ctx: &StageContext,
) -> Result<ExtractSummary, ExtractionError> {
    let archive = ctx.layout().staged_file(descriptor);
    extract_archive(&archive, ctx.layout().output()).await
}

/// Extracts `archive` into `output`, creating `output` if missing.
///
/// Only `output` itself is created; its parent must exist.
///
/// # Errors
///
/// Returns `ExtractionError::MissingArchive` if the archive does not exist,
/// `ExtractionError::InvalidArchive` if it is not a readable zip, and
/// `ExtractionError::Io` on filesystem failures.
pub async fn extract_archive(
    archive: &Path,
    output: &Path,
) -> Result<ExtractSummary, ExtractionError> {
    if !archive.is_file() {
        return Err(ExtractionError::MissingArchive {
            path: archive.to_path_buf(),
        });
    }

    ensure_dir(output)
        .await
        .map_err(|source| ExtractionError::Io {
            path: output.to_path_buf(),
            source,
        })?;

    debug!(
        archive = %archive.display(),
        output = %output.display(),
        "Extracting archive"
    );

    let archive_path = archive.to_path_buf();
    let output_path = output.to_path_buf();
    let summary = task::spawn_blocking(move || unzip(&archive_path, &output_path)).await??;

    info!(
        files = summary.files,
        directories = summary.directories,
        "Extracted"
    );
    Ok(summary)
}

fn unzip(archive: &Path, output: &Path) -> Result<ExtractSummary, ExtractionError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| ExtractionError::Io { path, source }
    };
    let zip_err = |source| ExtractionError::InvalidArchive {
        path: archive.to_path_buf(),
        source,
    };

    let file = File::open(archive).map_err(io_err(archive))?;
    let mut zip = zip::ZipArchive::new(BufReader::new(file)).map_err(zip_err)?;

    let mut summary = ExtractSummary::default();
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(zip_err)?;

        let Some(relative) = entry.enclosed_name() else {
            warn!(entry = %entry.name(), "Skipping archive entry outside the output tree");
            summary.skipped += 1;
            continue;
        };
        let target: PathBuf = output.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&target).map_err(io_err(&target))?;
            summary.directories += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(io_err(parent))?;
        }
        let mut out = File::create(&target).map_err(io_err(&target))?;
        std::io::copy(&mut entry, &mut out).map_err(io_err(&target))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                std::fs::set_permissions(&target, std::fs::Permissions::from_mode(mode & 0o7777))
                    .map_err(io_err(&target))?;
            }
        }
        summary.files += 1;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests;
