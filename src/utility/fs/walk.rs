// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Kind of a walked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry below the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Absolute (or root-joined) path on disk.
    pub path: PathBuf,
    /// Path relative to the walk root.
    pub relative: PathBuf,
    pub kind: EntryKind,
}

impl TreeEntry {
    /// Relative path with `/` separators, as stored in archives.
    #[must_use]
    pub fn archive_name(&self) -> String {
        let name = self
            .relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        match self.kind {
            EntryKind::Directory => format!("{name}/"),
            EntryKind::File => name,
        }
    }
}

/// Walks `root` recursively and returns every file and directory below it,
/// sorted by path.
///
/// Nothing is filtered: hidden files and ignore files are treated like any
/// other entry, so the result mirrors the tree exactly. The root itself is
/// not included. Symbolic links are skipped with a warning and never
/// followed.
///
/// # Errors
///
/// Returns the first walk error as a message.
pub fn walk_tree(root: &Path) -> Result<Vec<TreeEntry>, String> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_path(Ord::cmp)
        .build();

    let mut entries = Vec::new();
    for result in walker {
        let entry = result.map_err(|e| e.to_string())?;
        if entry.depth() == 0 {
            continue;
        }

        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_symlink() {
            warn!(path = %entry.path().display(), "Skipping symbolic link");
            continue;
        }
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| e.to_string())?
            .to_path_buf();

        entries.push(TreeEntry {
            path: entry.path().to_path_buf(),
            relative,
            kind,
        });
    }

    Ok(entries)
}
