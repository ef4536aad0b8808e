// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:  walk_tree()   ignore::Walk, sorted, no filters
//! dirs:  ensure_dir()  single-level create, parent must exist
//! ```

pub mod walk;

use std::path::Path;

/// Creates `path` if it does not exist yet.
///
/// Only the last component is created; a missing parent is an error.
///
/// # Errors
///
/// Returns the I/O error of `create_dir` unless it is `AlreadyExists`.
pub async fn ensure_dir(path: &Path) -> std::io::Result<()> {
    match tokio::fs::create_dir(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}
