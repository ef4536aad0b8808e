// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use super::list::{format_mod_list, run_list_command};
use super::run::run_bundle_command;
use crate::config::Settings;
use crate::manifest::Manifest;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn settings(root: &TempDir) -> Settings {
    let mut settings = Settings::default();
    settings.paths.root = root.path().to_path_buf();
    settings.pipeline.progress = false;
    settings
}

#[test]
fn test_format_mod_list() {
    let manifest = Manifest::from_json(
        r#"{
            "mods": [
                { "name": "BepInExPack", "source": "thunderstoreIo", "url": "https://thunderstore.io/c/x/p/bbepis/BepInExPack/", "assetType": "zip" },
                { "name": "ConfigManager", "source": "github", "url": "https://github.com/BepInEx/BepInEx.ConfigurationManager", "assetType": "dll", "assetNameStartsWith": "ConfigurationManager" },
                { "name": "NoSource", "url": "x", "assetType": "zip" }
            ]
        }"#,
    )
    .unwrap();

    let lines = format_mod_list(&manifest);

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "BepInExPack [thunderstoreIo, zip] https://thunderstore.io/c/x/p/bbepis/BepInExPack/"
    );
    assert_eq!(
        lines[1],
        "ConfigManager [github, dll] https://github.com/BepInEx/BepInEx.ConfigurationManager"
    );
    assert!(lines[2].starts_with("#2 invalid: invalid mod entry #2: missing field `source`"));
}

#[tokio::test]
async fn test_list_without_manifest_succeeds() {
    let root = temp_dir();
    run_list_command(&settings(&root)).await.unwrap();
}

#[tokio::test]
async fn test_list_malformed_manifest_fails() {
    let root = temp_dir();
    fs::write(root.path().join("modlist.json"), "not json").unwrap();

    assert!(run_list_command(&settings(&root)).await.is_err());
}

#[tokio::test]
async fn test_run_without_manifest_writes_archive() {
    let root = temp_dir();

    let report = run_bundle_command(Arc::new(settings(&root))).await.unwrap();

    assert!(report.mods.is_empty());
    assert!(root.path().join("output.zip").is_file());
}

#[tokio::test]
async fn test_run_malformed_manifest_fails() {
    let root = temp_dir();
    fs::write(root.path().join("modlist.json"), "[1, 2").unwrap();

    let err = run_bundle_command(Arc::new(settings(&root))).await.unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse manifest"));
}
