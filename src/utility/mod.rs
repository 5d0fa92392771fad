// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:  read_dir_sorted(), DirEntryInfo, EntryKind
//!   copy:  copy_file_mirrored(), mirror_permissions(), remove_tree()
//! ```

pub mod fs;
