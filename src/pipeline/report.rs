// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-run outcome records.

use std::fmt;

use crate::error::{ModpackError, PackagingError};
use crate::manifest::AssetType;
use crate::stage::package::PackageSummary;

/// Outcome of one stage for one mod.
#[derive(Debug, Default)]
pub enum StageOutcome {
    /// The stage did not run for this mod.
    #[default]
    NotAttempted,
    Succeeded,
    Failed(ModpackError),
}

impl StageOutcome {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    #[must_use]
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Error of a failed stage.
    #[must_use]
    pub const fn error(&self) -> Option<&ModpackError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub(crate) fn from_result<T, E: Into<ModpackError>>(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Succeeded,
            Err(err) => Self::Failed(err.into()),
        }
    }
}

impl fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAttempted => f.write_str("-"),
            Self::Succeeded => f.write_str("ok"),
            Self::Failed(_) => f.write_str("failed"),
        }
    }
}

/// Outcome of every stage for one manifest entry.
#[derive(Debug)]
pub struct ModReport {
    /// Mod name, or `#<index>` for an entry that is not a valid descriptor.
    pub label: String,
    /// `None` for invalid entries.
    pub asset_type: Option<AssetType>,
    pub fetch: StageOutcome,
    /// Extraction for archives, relocation for single files.
    pub install: StageOutcome,
}

impl ModReport {
    /// True if any stage of this mod failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.fetch.is_failed() || self.install.is_failed()
    }

    /// True if the mod reached the output tree.
    #[must_use]
    pub const fn is_installed(&self) -> bool {
        self.fetch.is_succeeded() && self.install.is_succeeded()
    }
}

/// Outcome of a whole run.
#[derive(Debug)]
pub struct RunReport {
    /// One entry per manifest entry, in manifest order.
    pub mods: Vec<ModReport>,
    /// `false` when no manifest file was found.
    pub manifest_found: bool,
    pub package: Result<PackageSummary, PackagingError>,
}

/// Counts derived from a [`RunReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub installed: usize,
    pub failed: usize,
    pub packaged: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} mods installed, {} failed, archive {}",
            self.installed,
            self.total,
            self.failed,
            if self.packaged { "written" } else { "failed" }
        )
    }
}

impl RunReport {
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            total: self.mods.len(),
            installed: self.mods.iter().filter(|m| m.is_installed()).count(),
            failed: self.mods.iter().filter(|m| m.is_failed()).count(),
            packaged: self.package.is_ok(),
        }
    }

    /// Reports of mods with at least one failed stage.
    pub fn failures(&self) -> impl Iterator<Item = &ModReport> {
        self.mods.iter().filter(|m| m.is_failed())
    }
}
