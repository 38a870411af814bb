//! Word and line conversion from CamelCase to upper snake case
//!
//! The conversion rule operates on one whitespace-delimited token at a time:
//! an underscore boundary is inserted immediately before every ASCII
//! uppercase letter except at position 0, and the whole result is then
//! uppercased. Non-letter characters pass through untouched and never
//! receive a boundary of their own.
//!
//! String-based functions here are the core of the crate; file-based
//! processing in [`crate::snakeshift::process`] is a thin wrapper over them.
//!
//! # Examples
//!
//! ```rust,ignore
//! use snakeshift::convert_word;
//!
//! assert_eq!(convert_word("CamelCase"), "CAMEL_CASE");
//! assert_eq!(convert_word("simple"), "SIMPLE");
//! assert_eq!(convert_word("ABC123"), "A_B_C123");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches each ASCII uppercase letter. Boundary insertion walks the match
/// positions instead of using lookarounds, which the regex crate does not
/// support.
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]").unwrap());

/// Convert a single token to its upper snake case form.
///
/// A `_` is inserted before every ASCII uppercase letter after the first
/// character, then the entire string is uppercased. Every uppercase letter
/// gets its own boundary; runs like `"ABC"` become `"A_B_C"` rather than
/// collapsing. Total over strings: the empty token maps to the empty string.
pub fn convert_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    let mut last = 0;
    for m in UPPERCASE.find_iter(word) {
        // Position 0 never gets a boundary, whatever its case.
        if m.start() > 0 {
            out.push_str(&word[last..m.start()]);
            out.push('_');
            last = m.start();
        }
    }
    out.push_str(&word[last..]);
    out.to_uppercase()
}

/// Convert one line of text: split on whitespace runs (discarding empty
/// fragments), convert each token, and re-join with single spaces.
///
/// A blank or whitespace-only line converts to the empty string. The output
/// always has exactly as many tokens as the input line.
pub fn convert_line(line: &str) -> String {
    line.split_whitespace()
        .map(convert_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a whole source text, line by line.
///
/// Each input line produces one output line terminated by `\n`, including
/// the last line whether or not the input ended with a newline.
pub fn convert_source(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    for line in source.lines() {
        out.push_str(&convert_line(line));
        out.push('\n');
    }
    out
}
