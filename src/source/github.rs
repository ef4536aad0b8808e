// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub latest-release resolver.

use futures_util::future::BoxFuture;
use serde::Deserialize;
use tracing::debug;

use super::Resolver;
use crate::config::types::SourcesConfig;
use crate::error::DownloadError;
use crate::manifest::ModDescriptor;
use crate::net::Downloader;

/// Subset of the GitHub release object used here.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// Derives `owner/repo` from a repository URL.
///
/// A URL without `url_prefix` is taken as `owner/repo` already.
#[must_use]
pub fn repository_from_url(url: &str, url_prefix: &str) -> Option<String> {
    let repository = url
        .strip_prefix(url_prefix)
        .unwrap_or(url)
        .trim_end_matches('/');
    let repository = repository.strip_suffix(".git").unwrap_or(repository);

    let mut parts = repository.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
            Some(repository.to_string())
        }
        _ => None,
    }
}

/// Latest-release endpoint of `repository`.
#[must_use]
pub fn release_url(api_base: &str, repository: &str) -> String {
    format!(
        "{}/repos/{repository}/releases/latest",
        api_base.trim_end_matches('/')
    )
}

/// First asset whose name starts with `prefix`.
#[must_use]
pub fn select_asset<'a>(release: &'a Release, prefix: &str) -> Option<&'a ReleaseAsset> {
    release
        .assets
        .iter()
        .find(|asset| asset.name.starts_with(prefix))
}

/// Resolver for `source = "github"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHubReleases;

impl GitHubReleases {
    async fn fetch_release(
        url: &str,
        sources: &SourcesConfig,
    ) -> Result<Release, DownloadError> {
        let mut request = Downloader::new()
            .url(url)
            .header("Accept", "application/vnd.github+json")
            .silent();
        if let Some(token) = &sources.github_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let body = request.download_string().await?;
        serde_json::from_str(&body).map_err(|source| DownloadError::InvalidRelease {
            url: url.to_string(),
            source,
        })
    }

    async fn resolve_url(
        descriptor: &ModDescriptor,
        sources: &SourcesConfig,
    ) -> Result<String, DownloadError> {
        let prefix = descriptor.asset_name_starts_with.as_deref().ok_or_else(|| {
            DownloadError::MissingAssetPrefix {
                name: descriptor.name.clone(),
            }
        })?;

        let repository = repository_from_url(&descriptor.url, &sources.github_url_prefix)
            .ok_or_else(|| DownloadError::InvalidRepository {
                url: descriptor.url.clone(),
            })?;

        let url = release_url(&sources.github_api, &repository);
        let release = Self::fetch_release(&url, sources).await?;

        let asset =
            select_asset(&release, prefix).ok_or_else(|| DownloadError::AssetNotFound {
                repository: repository.clone(),
                prefix: prefix.to_string(),
            })?;

        debug!(
            repository = %repository,
            tag = release.tag_name.as_deref().unwrap_or("?"),
            asset = %asset.name,
            "Selected release asset"
        );
        Ok(asset.browser_download_url.clone())
    }
}

impl Resolver for GitHubReleases {
    fn name(&self) -> &'static str {
        "github"
    }

    fn resolve<'a>(
        &'a self,
        descriptor: &'a ModDescriptor,
        sources: &'a SourcesConfig,
    ) -> BoxFuture<'a, Result<String, DownloadError>> {
        Box::pin(Self::resolve_url(descriptor, sources))
    }
}
