// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Thunderstore package page resolver.
//!
//! The page is not parsed as HTML; anchors are found by pattern, the same
//! way the page's "Manual Download" button is laid out:
//!
//! ```text
//! <a href="https://thunderstore.io/package/download/Owner/Pkg/1.0.0/" type="button" ...>
//! ```

use futures_util::future::BoxFuture;
use regex::Regex;

use super::Resolver;
use crate::config::types::SourcesConfig;
use crate::error::DownloadError;
use crate::manifest::ModDescriptor;
use crate::net::Downloader;

/// Finds the first button anchor whose `href` starts with `download_prefix`.
///
/// # Errors
///
/// Returns `DownloadError::NoButtons` if the page has no `type="button"`
/// anchors and `DownloadError::NoDownloadLink` if none of them links below
/// `download_prefix`.
pub fn find_download_link(
    html: &str,
    page_url: &str,
    download_prefix: &str,
) -> Result<String, DownloadError> {
    let button = Regex::new(r#"<a.*?type="button".*?>"#)?;
    let href = Regex::new(r#"href="(.*?)""#)?;

    let mut buttons = button.find_iter(html).peekable();
    if buttons.peek().is_none() {
        return Err(DownloadError::NoButtons {
            url: page_url.to_string(),
        });
    }

    buttons
        .filter_map(|anchor| href.captures(anchor.as_str()))
        .filter_map(|captures| captures.get(1))
        .map(|link| link.as_str())
        .find(|link| link.starts_with(download_prefix))
        .map(str::to_string)
        .ok_or_else(|| DownloadError::NoDownloadLink {
            url: page_url.to_string(),
        })
}

/// Resolver for `source = "thunderstoreIo"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThunderstorePage;

impl Resolver for ThunderstorePage {
    fn name(&self) -> &'static str {
        "thunderstore"
    }

    fn resolve<'a>(
        &'a self,
        descriptor: &'a ModDescriptor,
        sources: &'a SourcesConfig,
    ) -> BoxFuture<'a, Result<String, DownloadError>> {
        Box::pin(async move {
            let html = Downloader::new()
                .url(&descriptor.url)
                .silent()
                .download_string()
                .await?;
            find_download_link(
                &html,
                &descriptor.url,
                &sources.thunderstore_download_prefix,
            )
        })
    }
}
