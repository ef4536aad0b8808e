// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use tempfile::TempDir;

use super::{ExtractSummary, extract, extract_archive};
use crate::error::ExtractionError;
use crate::manifest::{AssetType, SourceKind};
use crate::stage::test_utils::{context, descriptor, write_zip};
#[cfg(unix)]
use crate::stage::test_utils::write_zip_with_modes;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[tokio::test]
async fn test_extract_into_output_tree() {
    let root = temp_dir();
    let ctx = context(root.path());
    let foo = descriptor("Foo", SourceKind::GitHub, AssetType::Zip);

    let staged = ctx.layout().staged_file(&foo);
    fs::create_dir_all(staged.parent().unwrap()).unwrap();
    write_zip(
        &staged,
        &[
            ("BepInEx/", b""),
            ("BepInEx/core/BepInEx.dll", b"core"),
            ("winhttp.dll", b"proxy"),
        ],
    );

    let summary = extract(&foo, &ctx).await.unwrap();

    assert_eq!(
        summary,
        ExtractSummary {
            files: 2,
            directories: 1,
            skipped: 0,
        }
    );
    let output = root.path().join("output");
    assert_eq!(
        fs::read(output.join("BepInEx/core/BepInEx.dll")).unwrap(),
        b"core"
    );
    assert_eq!(fs::read(output.join("winhttp.dll")).unwrap(), b"proxy");
}

#[tokio::test]
async fn test_extract_merges_and_overwrites() {
    let root = temp_dir();
    let archive_a = root.path().join("a.zip");
    let archive_b = root.path().join("b.zip");
    let output = root.path().join("output");

    write_zip(&archive_a, &[("shared.cfg", b"first"), ("a.txt", b"a")]);
    write_zip(&archive_b, &[("shared.cfg", b"second"), ("b.txt", b"b")]);

    extract_archive(&archive_a, &output).await.unwrap();
    extract_archive(&archive_b, &output).await.unwrap();

    assert_eq!(fs::read(output.join("shared.cfg")).unwrap(), b"second");
    assert!(output.join("a.txt").is_file());
    assert!(output.join("b.txt").is_file());
}

#[tokio::test]
async fn test_extract_skips_escaping_entries() {
    let root = temp_dir();
    let archive = root.path().join("evil.zip");
    let output = root.path().join("output");

    write_zip(&archive, &[("../escaped.txt", b"x"), ("ok.txt", b"ok")]);

    let summary = extract_archive(&archive, &output).await.unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.files, 1);
    assert!(!root.path().join("escaped.txt").exists());
    assert!(output.join("ok.txt").is_file());
}

#[tokio::test]
async fn test_extract_missing_archive() {
    let root = temp_dir();
    let ctx = context(root.path());
    let foo = descriptor("Foo", SourceKind::GitHub, AssetType::Zip);

    let err = extract(&foo, &ctx).await.unwrap_err();

    assert!(matches!(err, ExtractionError::MissingArchive { .. }));
    assert!(!root.path().join("output").exists());
}

#[tokio::test]
async fn test_extract_invalid_archive() {
    let root = temp_dir();
    let archive = root.path().join("broken.zip");
    fs::write(&archive, b"not a zip").unwrap();

    let err = extract_archive(&archive, &root.path().join("output"))
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractionError::InvalidArchive { .. }));
}

#[tokio::test]
async fn test_extract_output_parent_must_exist() {
    let root = temp_dir();
    let archive = root.path().join("a.zip");
    write_zip(&archive, &[("a.txt", b"a")]);

    let err = extract_archive(&archive, &root.path().join("missing/output"))
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractionError::Io { .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn test_extract_keeps_unix_modes() {
    use std::os::unix::fs::PermissionsExt;

    let root = temp_dir();
    let archive = root.path().join("loader.zip");
    let output = root.path().join("output");

    write_zip_with_modes(
        &archive,
        &[
            ("run_bepinex.sh", b"#!/bin/sh\n", 0o755),
            ("doorstop_config.ini", b"[General]\n", 0o644),
        ],
    );

    extract_archive(&archive, &output).await.unwrap();

    let mode = |name: &str| {
        fs::metadata(output.join(name))
            .unwrap()
            .permissions()
            .mode()
            & 0o777
    };
    assert_eq!(mode("run_bepinex.sh"), 0o755);
    assert_eq!(mode("doorstop_config.ini"), 0o644);
}
