//! Line-level helpers shared by every transformation
//!
//! These functions never fail. Malformed input degrades to an empty string or is
//! passed through untouched.

/// Returns true for the characters the sanitizer strips from both ends of a line
fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Sanitize a single line
///
/// Strips any run of leading and trailing single or double quotes, then trims
/// surrounding whitespace. Quotes are removed first, so `" 'abc' "` keeps its
/// inner quotes while `'abc'` becomes `abc`.
pub fn sanitize(line: &str) -> &str {
    line.trim_matches(is_quote).trim()
}

/// Split text into lines on `\n` or `\r\n`
///
/// Unlike [`str::lines`], a trailing separator produces a final empty line, so
/// `"a\n"` yields `["a", ""]`. Only the `\r` directly before a `\n` is removed.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Remove a trailing comma and any whitespace after it
///
/// Lines that do not end in a comma (ignoring trailing whitespace) are returned
/// unchanged, including their trailing whitespace.
pub fn strip_trailing_comma(line: &str) -> &str {
    line.trim_end().strip_suffix(',').unwrap_or(line)
}
