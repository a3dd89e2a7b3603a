//! Conversions between one-item-per-line text and comma-separated text
//!
//! Joining sanitizes each line and glues the items with `", "`. Splitting is a
//! heuristic tokenizer, not a CSV parser: quoted spans cannot contain escaped
//! quotes and never span lines. Those limits are kept on purpose so that the
//! output for a given input stays stable.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::{sanitize, split_lines, strip_trailing_comma};
use crate::transform::Transform;

/// A line that is already a single bare item, optionally followed by one comma
static BARE_ITEM_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[^'",\n]+,?$"#).expect("bare item pattern is valid"));

/// A token candidate anchored at the start of the haystack
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:"[^"]*"|'[^']*'|[^"',\s]+)"#).expect("token pattern is valid")
});

/// What must follow a token for it to count: optional whitespace, then a comma or
/// the end of the input
static TOKEN_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:,|$)").expect("terminator pattern is valid"));

/// Non-empty lines with any trailing comma removed, then sanitized
///
/// Only the exact empty string is skipped. A whitespace-only line survives and
/// sanitizes to an empty item.
pub(crate) fn joinable_items(input: &str) -> impl Iterator<Item = &str> {
    split_lines(input)
        .filter(|line| !line.is_empty())
        .map(strip_trailing_comma)
        .map(sanitize)
}

/// Joins lines into a single `a, b, c` line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToCommaSeparated;

impl Transform for ToCommaSeparated {
    fn transform(&self, input: &str) -> String {
        joinable_items(input).collect::<Vec<_>>().join(", ")
    }
}

/// Joins lines into a single `'a', 'b', 'c'` line
///
/// Embedded single quotes are not escaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToQuotedCommaSeparated;

impl Transform for ToQuotedCommaSeparated {
    fn transform(&self, input: &str) -> String {
        joinable_items(input)
            .map(|item| format!("'{item}'"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Splits comma-separated text into one item per line
///
/// Input whose every line is already a bare item (with at most one trailing comma)
/// is returned verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommaSeparatedToLines;

impl Transform for CommaSeparatedToLines {
    fn transform(&self, input: &str) -> String {
        if is_line_separated(input) {
            return input.to_string();
        }

        extract_tokens(input)
            .into_iter()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// True when every line is a single bare item
pub fn is_line_separated(input: &str) -> bool {
    split_lines(input).all(|line| BARE_ITEM_LINE.is_match(line))
}

/// Scan `input` left to right for tokens followed by a comma or the end of input
///
/// A rejected candidate does not consume its characters: the scan moves on by a
/// single character, so the tail of a rejected run can still be tried. Quoted
/// tokens keep their quotes.
pub fn extract_tokens(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];

        if let Some(m) = TOKEN.find(rest) {
            if TOKEN_TERMINATOR.is_match(&rest[m.end()..]) {
                tokens.push(m.as_str());
                pos += m.end();
                continue;
            }
        }

        // Advance one character, staying on a UTF-8 boundary
        pos += rest.chars().next().map_or(1, char::len_utf8);
    }

    tokens
}
