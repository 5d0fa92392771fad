// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async filesystem helpers for staging.
//!
//! ```text
//! walk:  read_dir_sorted()      one directory level, byte-wise name order
//!        EntryKind              Dir | LinkedDir | File
//! copy:  copy_file_mirrored()   tokio::fs::copy + low 9 permission bits
//!        mirror_permissions()   chmod dst to (mode(src) & 0o777)
//!        remove_tree()          rm -r if present
//!        remove_file_if_exists()
//! ```

pub mod copy;
pub mod walk;
