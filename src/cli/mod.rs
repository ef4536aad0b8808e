// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modpack-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modpack [global options] [command]
//! run       (default) fetch, install and package every mod
//! list      show manifest entries
//! options   show resolved settings
//! version
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Mod bundle builder.
///
/// Downloads the mods listed in a manifest, merges them into one tree and
/// packs that tree into a single archive.
#[derive(Debug, Parser)]
#[command(
    name = "modpack",
    author,
    version,
    about = "Mod bundle builder",
    long_about = "modpack-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Downloads every mod listed in modlist.json from GitHub releases\n\
                  or Thunderstore, merges them into output/ and writes output.zip.\n\n\
                  Invoking `modpack` without a command performs a full run.",
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from `modpack.toml` in the current directory\n\
                  if present, then from every --config file in order, then from\n\
                  MODPACK_<SECTION>__<KEY> environment variables, then from --set\n\
                  values. Use `modpack options` to print the result."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetches, installs and packages every mod (default).
    Run,

    /// Lists the mods of the manifest.
    List,

    /// Lists all options and their values.
    Options,

    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
