// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared fixtures for stage tests.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use zip::write::SimpleFileOptions;

use super::StageContext;
use crate::config::Settings;
use crate::manifest::{AssetType, ModDescriptor, SourceKind};

/// Writes a zip at `path`. Names ending in `/` become directory entries.
pub(super) fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).expect("create zip");
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options).expect("add dir");
        } else {
            zip.start_file(*name, options).expect("start file");
            zip.write_all(data).expect("write entry");
        }
    }
    zip.finish().expect("finish zip");
}

/// Writes a zip at `path` whose file entries carry the given unix mode.
#[cfg(unix)]
pub(super) fn write_zip_with_modes(path: &Path, entries: &[(&str, &[u8], u32)]) {
    let file = File::create(path).expect("create zip");
    let mut zip = zip::ZipWriter::new(file);
    for (name, data, mode) in entries {
        let options = SimpleFileOptions::default().unix_permissions(*mode);
        zip.start_file(*name, options).expect("start file");
        zip.write_all(data).expect("write entry");
    }
    zip.finish().expect("finish zip");
}

/// Unix mode stored for entry `name` in the zip at `path`.
#[cfg(unix)]
pub(super) fn zip_mode(path: &Path, name: &str) -> Option<u32> {
    let file = File::open(path).expect("open zip");
    let mut zip = zip::ZipArchive::new(file).expect("read zip");
    let entry = zip.by_name(name).expect("entry");
    entry.unix_mode()
}

/// Entry names of the zip at `path`, in archive order.
pub(super) fn zip_names(path: &Path) -> Vec<String> {
    let file = File::open(path).expect("open zip");
    let zip = zip::ZipArchive::new(file).expect("read zip");
    zip.file_names().map(str::to_string).collect::<Vec<_>>()
}

/// Contents of entry `name` in the zip at `path`.
pub(super) fn zip_entry(path: &Path, name: &str) -> Vec<u8> {
    let file = File::open(path).expect("open zip");
    let mut zip = zip::ZipArchive::new(file).expect("read zip");
    let mut entry = zip.by_name(name).expect("entry");
    let mut data = Vec::new();
    entry.read_to_end(&mut data).expect("read entry");
    data
}

/// Stage context rooted at `root` with progress output disabled.
pub(super) fn context(root: &Path) -> StageContext {
    let mut settings = Settings::default();
    settings.paths.root = root.to_path_buf();
    settings.pipeline.progress = false;
    StageContext::new(Arc::new(settings))
}

pub(super) fn descriptor(name: &str, source: SourceKind, asset_type: AssetType) -> ModDescriptor {
    ModDescriptor {
        name: name.to_string(),
        source,
        url: format!("https://example.invalid/{name}"),
        asset_type,
        asset_name_starts_with: None,
    }
}
