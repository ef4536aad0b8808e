// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   run (default), list, options
//! ```

pub mod list;
pub mod options;
pub mod run;

#[cfg(test)]
mod tests;
