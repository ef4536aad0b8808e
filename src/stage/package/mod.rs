// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Package stage: zip the output tree into the final archive.
//!
//! ```text
//! output/                      output.zip
//!   BepInEx/           -->       BepInEx/
//!     plugins/Foo.dll              BepInEx/plugins/
//!   winhttp.dll                    BepInEx/plugins/Foo.dll
//!                                  winhttp.dll
//!
//! names relative to output/, '/' separated, deflate level 9
//! file permission bits stored on unix
//! ```
//!
//! The archive is fully written and synced before [`package`] returns.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tokio::task;
use tracing::{debug, info};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use super::StageContext;
use crate::error::PackagingError;
use crate::utility::fs::ensure_dir;
use crate::utility::fs::walk::{EntryKind, walk_tree};

/// Deflate level used for every archive entry.
pub const COMPRESSION_LEVEL: i64 = 9;

/// Summary of a written archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    pub archive: PathBuf,
    pub files: usize,
    pub directories: usize,
}

/// Writes the output tree of `ctx` to the configured archive path.
///
/// # Errors
///
/// See [`package_dir`].
pub async fn package(ctx: &StageContext) -> Result<PackageSummary, PackagingError> {
    package_dir(ctx.layout().output(), ctx.layout().archive()).await
}

/// Zips everything below `source` into `archive`, replacing any previous
/// archive.
///
/// `source` is created first if it does not exist, so an empty tree yields
/// an empty archive.
///
/// # Errors
///
/// Returns `PackagingError::Walk` if the tree cannot be listed,
/// `PackagingError::Io` on read or write failures and
/// `PackagingError::Zip` if the zip writer fails.
pub async fn package_dir(source: &Path, archive: &Path) -> Result<PackageSummary, PackagingError> {
    ensure_dir(source)
        .await
        .map_err(|e| PackagingError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;

    debug!(
        source = %source.display(),
        archive = %archive.display(),
        "Packaging output tree"
    );

    let source_path = source.to_path_buf();
    let archive_path = archive.to_path_buf();
    let summary = task::spawn_blocking(move || write_archive(&source_path, &archive_path)).await??;

    info!(
        archive = %summary.archive.display(),
        files = summary.files,
        directories = summary.directories,
        "Archive written"
    );
    Ok(summary)
}

fn write_archive(source: &Path, archive: &Path) -> Result<PackageSummary, PackagingError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| PackagingError::Io { path, source }
    };
    let zip_err = |source| PackagingError::Zip {
        path: archive.to_path_buf(),
        source,
    };

    let entries = walk_tree(source).map_err(|message| PackagingError::Walk {
        root: source.to_path_buf(),
        message,
    })?;

    let file = File::create(archive).map_err(io_err(archive))?;
    let mut zip = zip::ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));

    let mut files = 0;
    let mut directories = 0;
    for entry in &entries {
        let name = entry.archive_name();
        match entry.kind {
            EntryKind::Directory => {
                zip.add_directory(name, options).map_err(zip_err)?;
                directories += 1;
            }
            EntryKind::File => {
                let mut input = File::open(&entry.path).map_err(io_err(&entry.path))?;
                let file_options = with_mode(&input, options).map_err(io_err(&entry.path))?;
                zip.start_file(name, file_options).map_err(zip_err)?;
                std::io::copy(&mut input, &mut zip).map_err(io_err(&entry.path))?;
                files += 1;
            }
        }
    }

    let mut writer = zip.finish().map_err(zip_err)?;
    writer.flush().map_err(io_err(archive))?;
    writer.get_ref().sync_all().map_err(io_err(archive))?;

    Ok(PackageSummary {
        archive: archive.to_path_buf(),
        files,
        directories,
    })
}

/// Stores the permission bits of `input` with its entry.
#[cfg(unix)]
fn with_mode(input: &File, options: SimpleFileOptions) -> std::io::Result<SimpleFileOptions> {
    use std::os::unix::fs::PermissionsExt;
    let mode = input.metadata()?.permissions().mode();
    Ok(options.unix_permissions(mode & 0o777))
}

#[cfg(not(unix))]
fn with_mode(_input: &File, options: SimpleFileOptions) -> std::io::Result<SimpleFileOptions> {
    Ok(options)
}
