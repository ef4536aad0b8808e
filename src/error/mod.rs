// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              ModpackError (~24 bytes)
//!                     |
//!   +--------+--------+--------+--------+--------+
//!   |        |        |        |        |        |
//!   v        v        v        v        v        v
//! Manifest Download Extract Relocate Package  Config   Io
//!   Box      Box      Box     Box      Box     Box    Box
//!
//! Run-level:  Manifest (parse, fatal), Package, Config
//! Per-mod:    Manifest (entry), Download, Extract, Relocate
//! ```
//!
//! Stages return their own error type; the orchestrator wraps them in
//! [`ModpackError`] when recording a failed outcome.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModpackError`].
pub type ModpackResult<T> = std::result::Result<T, ModpackError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ModpackError {
    /// Manifest could not be read, parsed, or contains an invalid entry.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// Resolving or transferring a mod asset failed.
    #[error("download error: {0}")]
    Download(#[from] Box<DownloadError>),

    /// Unpacking a staged archive failed.
    #[error("extraction error: {0}")]
    Extraction(#[from] Box<ExtractionError>),

    /// Moving a staged single file failed.
    #[error("relocation error: {0}")]
    Relocation(#[from] Box<RelocationError>),

    /// Creating the final archive failed.
    #[error("packaging error: {0}")]
    Packaging(#[from] Box<PackagingError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModpackError {
                fn from(err: $error) -> Self {
                    ModpackError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ManifestError => Manifest,
    DownloadError => Download,
    ExtractionError => Extraction,
    RelocationError => Relocation,
    PackagingError => Packaging,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Manifest Errors ---

/// Manifest loading errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest exists but could not be read.
    #[error("failed to read manifest '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or has the wrong top-level shape.
    #[error("failed to parse manifest '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A single entry of the `mods` list is not a usable descriptor.
    #[error("invalid mod entry #{index}: {message}")]
    InvalidEntry { index: usize, message: String },
}

// --- Download Errors ---

/// Errors raised while resolving or transferring a mod asset.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// A GitHub mod has no `assetNameStartsWith` to select an asset with.
    #[error("mod '{name}' has no asset name prefix to select a release asset")]
    MissingAssetPrefix { name: String },

    /// The mod URL does not name a repository.
    #[error("cannot derive a repository from '{url}'")]
    InvalidRepository { url: String },

    /// The release listing could not be decoded.
    #[error("invalid release listing from {url}: {source}")]
    InvalidRelease {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// No release asset name starts with the configured prefix.
    #[error("no asset of {repository} starts with '{prefix}'")]
    AssetNotFound { repository: String, prefix: String },

    /// The package page has no `type="button"` anchors.
    #[error("no button links found on {url}")]
    NoButtons { url: String },

    /// None of the button anchors point at the package download endpoint.
    #[error("no download link found on {url}")]
    NoDownloadLink { url: String },

    /// A link pattern failed to compile.
    #[error("invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The downloader was used without a URL or output file.
    #[error("downloader has no {what} configured")]
    NotConfigured { what: &'static str },

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpStatus { status: u16, url: String },

    /// Error from reqwest library.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The per-mod staging directory could not be created.
    #[error("failed to create staging directory '{}': {source}", .path.display())]
    StagingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The response body could not be written to disk.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// --- Extraction Errors ---

/// Errors raised while unpacking a staged archive.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The staged archive does not exist.
    #[error("staged archive not found: {}", .path.display())]
    MissingArchive { path: PathBuf },

    /// The staged file is not a readable zip archive.
    #[error("invalid archive '{}': {source}", .path.display())]
    InvalidArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// I/O failure while creating directories or writing entries.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The blocking extraction task was cancelled or panicked.
    #[error("extraction task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

// --- Relocation Errors ---

/// Errors raised while moving a staged single file.
#[derive(Debug, Error)]
pub enum RelocationError {
    /// The staged file does not exist.
    #[error("staged file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    /// The plugins directory does not exist.
    #[error("destination directory not found: {}", .path.display())]
    MissingDestination { path: PathBuf },

    /// The rename itself failed.
    #[error("failed to move '{}' to '{}': {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- Packaging Errors ---

/// Errors raised while writing the final archive.
#[derive(Debug, Error)]
pub enum PackagingError {
    /// Walking the output tree failed.
    #[error("failed to walk '{}': {message}", .root.display())]
    Walk { root: PathBuf, message: String },

    /// I/O failure on a specific path.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The zip writer rejected an entry or failed to finalize.
    #[error("failed to write archive '{}': {source}", .path.display())]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The blocking packaging task was cancelled or panicked.
    #[error("packaging task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `--set` override is not of the form `section.key=value`.
    #[error("invalid override '{0}', expected section.key=value")]
    InvalidOverride(String),
}
