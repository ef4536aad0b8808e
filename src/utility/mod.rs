// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   ensure_dir()  create one directory level if missing
//!   walk:  walk_tree(), TreeEntry::archive_name()
//! ```

pub mod fs;
