// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            run / list / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML + env, Layout paths |
//!              '-------------+-------------'
//!                            v
//!                        pipeline
//!             manifest --> per-mod passes --> package
//!                            |
//!          +--------+--------+--------+--------+
//!          v        v        v        v        v
//!        fetch   extract  relocate  package  source
//!          |                                github/
//!          v                              thunderstore
//!         net  (reqwest, progress)
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod net;
pub mod pipeline;
pub mod source;
pub mod stage;
pub mod utility;
