// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Relocate stage: move a staged plugin into the plugins directory.
//!
//! ```text
//! tmp/<name>/<name>.dll --rename--> output/BepInEx/plugins/<name>.dll
//! ```
//!
//! The plugins directory is expected to come from an earlier extracted
//! archive (the loader pack) and is never created here.

use std::path::{Path, PathBuf};

use tracing::info;

use super::StageContext;
use crate::error::RelocationError;
use crate::manifest::ModDescriptor;

/// Moves the staged file of `descriptor` to `<plugins>/<name>.<ext>`.
///
/// # Errors
///
/// See [`relocate_file`].
pub async fn relocate(
    descriptor: &ModDescriptor,
    ctx: &StageContext,
) -> Result<PathBuf, RelocationError> {
    let from = ctx.layout().staged_file(descriptor);
    let to = ctx.layout().plugins().join(descriptor.file_name());
    relocate_file(&from, &to).await
}

/// Renames `from` to `to`, replacing an existing file at `to`.
///
/// # Errors
///
/// Returns `RelocationError::MissingFile` if `from` does not exist,
/// `RelocationError::MissingDestination` if the parent of `to` is not a
/// directory, and `RelocationError::Move` if the rename fails.
pub async fn relocate_file(from: &Path, to: &Path) -> Result<PathBuf, RelocationError> {
    if !from.is_file() {
        return Err(RelocationError::MissingFile {
            path: from.to_path_buf(),
        });
    }

    if let Some(dir) = to.parent()
        && !dir.is_dir()
    {
        return Err(RelocationError::MissingDestination {
            path: dir.to_path_buf(),
        });
    }

    tokio::fs::rename(from, to)
        .await
        .map_err(|source| RelocationError::Move {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })?;

    info!(path = %to.display(), "Relocated");
    Ok(to.to_path_buf())
}
