// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pipeline stages.
//!
//! ```text
//! per mod:   fetch ──> tmp/<name>/<name>.<ext>
//!              |
//!     zip -----+----- dll
//!      v              v
//!   extract        relocate
//!   output/        output/BepInEx/plugins/<name>.dll
//!
//! once:      package ──> output.zip
//! ```
//!
//! Each stage returns its own error type and never panics on bad input;
//! the orchestrator decides what a failure means for the run.

pub mod extract;
pub mod fetch;
pub mod package;
pub mod relocate;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use crate::config::Settings;
use crate::config::paths::Layout;
use crate::config::types::SourcesConfig;
use crate::net::ProgressDisplay;

/// Context shared by all stages of a run.
#[derive(Debug, Clone)]
pub struct StageContext {
    settings: Arc<Settings>,
    layout: Layout,
}

impl StageContext {
    /// Creates a context using the layout resolved from `settings`.
    #[must_use]
    pub fn new(settings: Arc<Settings>) -> Self {
        let layout = settings.layout();
        Self { settings, layout }
    }

    /// Replaces the resolved layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn sources(&self) -> &SourcesConfig {
        &self.settings.sources
    }

    /// Progress display for transfers.
    #[must_use]
    pub fn progress(&self) -> ProgressDisplay {
        if self.settings.pipeline.progress {
            ProgressDisplay::Bar
        } else {
            ProgressDisplay::Silent
        }
    }
}
