// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning for external archivers.
//!
//! ```text
//! ProcessBuilder::which_in("zip", "/bin:/usr/bin", cwd)
//!   .args() .cwd() .env() .stderr_flags()
//!   .run()
//!       --> tokio::process::Command (env_clear + Env)
//!           stream stdout/stderr lines into tracing
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
mod io;
mod runner;
#[cfg(test)]
mod tests;
