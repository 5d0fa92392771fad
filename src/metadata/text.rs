// modpack: Module Packaging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plain-text helpers for rendering module descriptions into documents.

use std::collections::BTreeSet;

/// Removes HTML-like markup (`<...>`) from `text`.
///
/// A `<` followed by whitespace or at the end of input is kept as a literal.
/// Quoted attribute values may contain `>`. An unterminated tag swallows the
/// rest of the input.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '<' || chars.peek().is_none_or(|next| next.is_whitespace()) {
            output.push(c);
            continue;
        }

        let mut quote: Option<char> = None;
        for inner in chars.by_ref() {
            match (quote, inner) {
                (None, '>') => break,
                (None, '"' | '\'') => quote = Some(inner),
                (Some(open), _) if open == inner => quote = None,
                _ => {}
            }
        }
    }

    output
}

/// Wraps `text` at `width` columns by turning spaces into newlines.
///
/// Words longer than `width` are never split, and existing newlines restart
/// the column count. Columns are counted in bytes.
#[must_use]
pub fn wordwrap(text: &str, width: usize) -> String {
    let bytes = text.as_bytes();
    let mut breaks = BTreeSet::new();
    let mut line_start = 0;
    let mut last_space = 0;

    for (current, &byte) in bytes.iter().enumerate() {
        if byte == b'\n' {
            line_start = current + 1;
            last_space = current + 1;
        } else if byte == b' ' {
            if current - line_start >= width {
                breaks.insert(current);
                line_start = current + 1;
            }
            last_space = current;
        } else if current - line_start >= width && line_start != last_space {
            breaks.insert(last_space);
            line_start = last_space + 1;
        }
    }

    text.char_indices()
        .map(|(index, c)| if breaks.contains(&index) { '\n' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{strip_tags, wordwrap};

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>Bold</b> text"), "Bold text");
        assert_eq!(strip_tags("a < b and c<d"), "a < b and c");
        assert_eq!(strip_tags(r#"<a href="x>y">link</a>"#), "link");
        assert_eq!(strip_tags("trailing <"), "trailing <");
        assert_eq!(strip_tags("no markup"), "no markup");
    }

    #[test]
    fn test_wordwrap_breaks_on_spaces() {
        assert_eq!(wordwrap("The quick brown fox", 10), "The quick\nbrown fox");
    }

    #[test]
    fn test_wordwrap_keeps_long_words() {
        assert_eq!(
            wordwrap("A verylongwordthatdoesnotfit here", 10),
            "A\nverylongwordthatdoesnotfit\nhere"
        );
    }

    #[test]
    fn test_wordwrap_respects_newlines() {
        assert_eq!(wordwrap("short\nline here", 9), "short\nline here");
    }

    #[test]
    fn test_wordwrap_72_columns() {
        let words = ["lorem"; 20].join(" ");
        let wrapped = wordwrap(&words, 72);
        insta::assert_snapshot!(wrapped, @r"
        lorem lorem lorem lorem lorem lorem lorem lorem lorem lorem lorem lorem
        lorem lorem lorem lorem lorem lorem lorem lorem
        ");
        assert!(wrapped.lines().all(|line| line.len() <= 72));
    }
}
