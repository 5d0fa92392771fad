// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build progress sink.
//!
//! ```text
//! PackageBuilder<L: BuildLog>
//!   log(message, level)
//!     0  Building package foo-1.0
//!     1  > Copying package files to the build dir ...
//!     2    > Skipped excluded file: ./notes.txt
//!
//! NullLog     discard (default)
//! ScreenLog   indented lines to any io::Write (stdout by default)
//! FnMut       closures, e.g. collecting into a Vec in tests
//! ```

use std::io::Write;

/// Receives hierarchical build progress messages.
///
/// Level 0 is a top-level message; each higher level is one step of nesting.
pub trait BuildLog {
    fn log(&mut self, message: &str, level: usize);
}

impl<F> BuildLog for F
where
    F: FnMut(&str, usize),
{
    fn log(&mut self, message: &str, level: usize) {
        self(message, level);
    }
}

/// Sink that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl BuildLog for NullLog {
    fn log(&mut self, _message: &str, _level: usize) {}
}

/// Sink that writes indented progress lines.
#[derive(Debug)]
pub struct ScreenLog<W: Write> {
    out: W,
}

impl ScreenLog<std::io::Stdout> {
    /// Screen logger writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ScreenLog<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the logger, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Formats a message the way it appears on screen (without newline).
    #[must_use]
    pub fn format_line(message: &str, level: usize) -> String {
        if level == 0 {
            message.to_string()
        } else {
            format!("{}> {message}", " ".repeat(2 * (level - 1)))
        }
    }
}

impl<W: Write> BuildLog for ScreenLog<W> {
    fn log(&mut self, message: &str, level: usize) {
        // Progress output is best effort; a closed stdout must not fail a build.
        let _ = writeln!(self.out, "{}", Self::format_line(message, level));
    }
}
