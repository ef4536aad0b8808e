// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Download URL resolution.
//!
//! ```text
//! ModDescriptor.source
//!   github          --> GitHubReleases   GET {api}/repos/{repo}/releases/latest
//!                                        first asset with name prefix
//!   thunderstoreIo  --> ThunderstorePage GET page, scrape type="button" anchors
//!                                        first href under download prefix
//!        |
//!        v
//!   direct download URL --> stage::fetch
//! ```

pub mod github;
pub mod thunderstore;

use futures_util::future::BoxFuture;

use crate::config::types::SourcesConfig;
use crate::error::DownloadError;
use crate::manifest::{ModDescriptor, SourceKind};

pub use github::GitHubReleases;
pub use thunderstore::ThunderstorePage;

/// Strategy turning a descriptor into a direct download URL.
pub trait Resolver: Send + Sync {
    /// Short name for log output.
    fn name(&self) -> &'static str;

    /// Resolves the asset URL of `descriptor`.
    fn resolve<'a>(
        &'a self,
        descriptor: &'a ModDescriptor,
        sources: &'a SourcesConfig,
    ) -> BoxFuture<'a, Result<String, DownloadError>>;
}

impl SourceKind {
    /// Resolver handling this source.
    #[must_use]
    pub fn resolver(self) -> &'static dyn Resolver {
        match self {
            Self::GitHub => &GitHubReleases,
            Self::Thunderstore => &ThunderstorePage,
        }
    }
}

/// Resolves the download URL of `descriptor` with the resolver of its source.
///
/// # Errors
///
/// Returns a `DownloadError` if the source cannot be queried or lists no
/// matching asset.
pub async fn resolve(
    descriptor: &ModDescriptor,
    sources: &SourcesConfig,
) -> Result<String, DownloadError> {
    let resolver = descriptor.source.resolver();
    tracing::debug!(resolver = resolver.name(), url = %descriptor.url, "Resolving download URL");
    resolver.resolve(descriptor, sources).await
}
