// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Info command implementation for modpack.

use crate::cli::package::InfoArgs;
use crate::error::Result;
use crate::metadata::{DESCRIPTOR_FILE, ModuleInfo};

/// Loads a module descriptor and prints it normalized, or as JSON.
///
/// # Errors
///
/// Returns an error if the descriptor cannot be read or is invalid.
pub fn run_info_command(args: &InfoArgs) -> Result<()> {
    let info = ModuleInfo::load(args.module_dir.join(DESCRIPTOR_FILE))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{info}");
    }
    Ok(())
}
