// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP transport.
//!
//! ```text
//! Downloader::new()
//!   .url() .file() .header()
//!   .progress() .silent()
//!        |
//!        +--------------+
//!        v              v
//!   download()     download_string()
//!   stream -> file     body -> String
//!        |
//!        v
//!   Progress display
//!     Bar     [=====>     ] 5MB/10MB   (spinner if size unknown)
//!     Silent  (none)
//!
//! Global client: OnceLock, connection pool, user agent
//! Failure: partial file removed, nothing left staged
//! ```
//!
//! The downloader never creates directories; callers own the layout.

use crate::error::DownloadError;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::path::PathBuf;
use std::sync::OnceLock;
use tokio::io::AsyncWriteExt;

/// RAII guard that removes a partially written file on Drop unless kept.
struct PartialFileGuard {
    path: PathBuf,
    keep: bool,
}

impl PartialFileGuard {
    const fn new(path: PathBuf) -> Self {
        Self { path, keep: false }
    }

    const fn keep(&mut self) {
        self.keep = true;
    }
}

impl Drop for PartialFileGuard {
    fn drop(&mut self) {
        if !self.keep {
            // Error path only; deletion is quick enough to do synchronously.
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Global HTTP client - initialized once, reused across all requests.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(user_agent())
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// User agent sent with every request (GitHub rejects requests without one).
#[must_use]
pub fn user_agent() -> String {
    format!("modpack-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} @ {binary_bytes_per_sec} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] {bytes} @ {binary_bytes_per_sec}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// Progress display style for downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressDisplay {
    /// Progress bar when the size is known, spinner otherwise.
    #[default]
    Bar,
    /// No visual progress.
    Silent,
}

/// Async HTTP downloader with builder pattern.
///
/// # Example
/// ```ignore
/// use modpack_rs::net::Downloader;
///
/// Downloader::new()
///     .url("https://example.com/file.zip")
///     .file("/tmp/file.zip")
///     .download()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
    url: Option<String>,
    output_file: Option<PathBuf>,
    headers: Vec<(String, String)>,
    progress_display: ProgressDisplay,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader {
    /// Create a new downloader using the shared client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: global_client().clone(),
            url: None,
            output_file: None,
            headers: Vec::new(),
            progress_display: ProgressDisplay::default(),
        }
    }

    /// Set the URL to request.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the output file path.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Add a custom header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub const fn progress(mut self, style: ProgressDisplay) -> Self {
        self.progress_display = style;
        self
    }

    /// Disable progress display.
    #[must_use]
    pub const fn silent(mut self) -> Self {
        self.progress_display = ProgressDisplay::Silent;
        self
    }

    fn create_progress_bar(&self, total_size: u64) -> Option<ProgressBar> {
        match self.progress_display {
            ProgressDisplay::Silent => None,
            ProgressDisplay::Bar if total_size > 0 => {
                let pb = ProgressBar::new(total_size);
                pb.set_style(bar_style());
                Some(pb)
            }
            ProgressDisplay::Bar => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(spinner_style());
                Some(pb)
            }
        }
    }

    fn url_required(&self) -> Result<&str, DownloadError> {
        self.url
            .as_deref()
            .ok_or(DownloadError::NotConfigured { what: "url" })
    }

    /// Sends the GET request and checks the status.
    async fn send(&self) -> Result<reqwest::Response, DownloadError> {
        let url = self.url_required()?;

        let mut request = self.client.get(url);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(DownloadError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// Streams the response body to the configured file.
    ///
    /// The parent directory must already exist. On any failure after the
    /// file was created, the partial file is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No URL or output file is configured.
    /// - The request fails or returns a non-success status code.
    /// - The output file cannot be created or written to.
    /// - The body stream breaks off.
    pub async fn download(&self) -> Result<PathBuf, DownloadError> {
        let output = self
            .output_file
            .clone()
            .ok_or(DownloadError::NotConfigured {
                what: "output file",
            })?;

        let response = self.send().await?;

        let total_size = response.content_length().unwrap_or(0);
        let progress_bar = self.create_progress_bar(total_size);

        let mut file = tokio::fs::File::create(&output)
            .await
            .map_err(|source| DownloadError::Write {
                path: output.clone(),
                source,
            })?;

        let mut guard = PartialFileGuard::new(output.clone());

        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)
                .await
                .map_err(|source| DownloadError::Write {
                    path: output.clone(),
                    source,
                })?;

            if let Some(pb) = &progress_bar {
                pb.inc(chunk.len() as u64);
            }
        }

        file.flush().await.map_err(|source| DownloadError::Write {
            path: output.clone(),
            source,
        })?;

        guard.keep();

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        Ok(output)
    }

    /// Returns the response body as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, returns a non-success status code,
    /// or the body is not valid text.
    pub async fn download_string(&self) -> Result<String, DownloadError> {
        let response = self.send().await?;
        Ok(response.text().await?)
    }
}
