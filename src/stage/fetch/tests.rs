// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fetch;
use crate::config::Settings;
use crate::error::DownloadError;
use crate::manifest::{AssetType, ModDescriptor, SourceKind};
use crate::stage::StageContext;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn context(root: &TempDir, server: &MockServer) -> StageContext {
    let mut settings = Settings::default();
    settings.paths.root = root.path().to_path_buf();
    settings.pipeline.progress = false;
    settings.sources.github_api = server.uri();
    settings.sources.thunderstore_download_prefix = format!("{}/package/download/", server.uri());
    fs::create_dir(root.path().join("tmp")).unwrap();
    StageContext::new(Arc::new(settings))
}

fn github_mod(name: &str, prefix: Option<&str>) -> ModDescriptor {
    ModDescriptor {
        name: name.to_string(),
        source: SourceKind::GitHub,
        url: "https://github.com/owner/repo".to_string(),
        asset_type: AssetType::Zip,
        asset_name_starts_with: prefix.map(str::to_string),
    }
}

#[tokio::test]
async fn test_fetch_github_release_asset() {
    let server = MockServer::start().await;
    let root = temp_dir();
    let ctx = context(&root, &server);

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tag_name": "v1.2.3",
            "assets": [
                { "name": "Bar-src.tar.gz", "browser_download_url": format!("{}/dl/src.tar.gz", server.uri()) },
                { "name": "Foo-1.2.3.zip", "browser_download_url": format!("{}/dl/Foo-1.2.3.zip", server.uri()) }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dl/Foo-1.2.3.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"zip-bytes".to_vec()))
        .mount(&server)
        .await;

    let staged = fetch(&github_mod("Foo", Some("Foo-")), &ctx).await.unwrap();

    assert_eq!(staged, root.path().join("tmp").join("Foo").join("Foo.zip"));
    assert_eq!(fs::read(&staged).unwrap(), b"zip-bytes");
}

#[tokio::test]
async fn test_fetch_github_takes_first_matching_asset() {
    let server = MockServer::start().await;
    let root = temp_dir();
    let ctx = context(&root, &server);

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assets": [
                { "name": "Foo-1.2.3.zip", "browser_download_url": format!("{}/dl/first.zip", server.uri()) },
                { "name": "Foo-1.2.3-debug.zip", "browser_download_url": format!("{}/dl/second.zip", server.uri()) }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dl/first.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"first".to_vec()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dl/second.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"second".to_vec()))
        .expect(0)
        .mount(&server)
        .await;

    let staged = fetch(&github_mod("Foo", Some("Foo-")), &ctx).await.unwrap();

    assert_eq!(fs::read(&staged).unwrap(), b"first");
}

#[tokio::test]
async fn test_fetch_thunderstore_overwrites_staged_file() {
    let server = MockServer::start().await;
    let root = temp_dir();
    let ctx = context(&root, &server);

    let page = format!(
        r#"<a href="{uri}/package/download/Owner/Pkg/1.0.0/" type="button" class="btn">Manual Download</a>"#,
        uri = server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/c/game/p/Owner/Pkg/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/package/download/Owner/Pkg/1.0.0/"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"plugin".to_vec()))
        .mount(&server)
        .await;

    let descriptor = ModDescriptor {
        name: "Pkg".to_string(),
        source: SourceKind::Thunderstore,
        url: format!("{}/c/game/p/Owner/Pkg/", server.uri()),
        asset_type: AssetType::Dll,
        asset_name_starts_with: None,
    };

    let dir = root.path().join("tmp").join("Pkg");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("Pkg.dll"), b"stale").unwrap();

    let staged = fetch(&descriptor, &ctx).await.unwrap();
    assert_eq!(staged, dir.join("Pkg.dll"));
    assert_eq!(fs::read(&staged).unwrap(), b"plugin");
}

#[tokio::test]
async fn test_fetch_missing_prefix_stages_nothing() {
    let server = MockServer::start().await;
    let root = temp_dir();
    let ctx = context(&root, &server);

    let err = fetch(&github_mod("Foo", None), &ctx).await.unwrap_err();

    assert!(matches!(err, DownloadError::MissingAssetPrefix { .. }));
    assert!(!root.path().join("tmp").join("Foo").exists());
}

#[tokio::test]
async fn test_fetch_http_error_leaves_no_file() {
    let server = MockServer::start().await;
    let root = temp_dir();
    let ctx = context(&root, &server);

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assets": [
                { "name": "Foo.zip", "browser_download_url": format!("{}/dl/Foo.zip", server.uri()) }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dl/Foo.zip"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = fetch(&github_mod("Foo", Some("Foo")), &ctx).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(!root.path().join("tmp").join("Foo").join("Foo.zip").exists());
}

#[tokio::test]
async fn test_fetch_requires_staging_root() {
    let server = MockServer::start().await;
    let root = temp_dir();
    let ctx = context(&root, &server);
    fs::remove_dir(root.path().join("tmp")).unwrap();

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assets": [
                { "name": "Foo.zip", "browser_download_url": format!("{}/dl/Foo.zip", server.uri()) }
            ]
        })))
        .mount(&server)
        .await;

    let err = fetch(&github_mod("Foo", Some("Foo")), &ctx).await.unwrap_err();
    assert!(matches!(err, DownloadError::StagingDir { .. }));
}
