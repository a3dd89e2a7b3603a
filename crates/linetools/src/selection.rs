//! Choosing the replacement range and splicing the transformed text back in
//!
//! The core transformations only see a string. This module decides which string:
//! the whole document, or the lines of a 1-based inclusive range. The line
//! terminator that ends the range is kept out of the transformation and restored
//! afterwards so the surrounding document keeps its shape. Core output is always
//! joined with `\n`; a selection written with `\r\n` gets its replacement
//! converted back to `\r\n`.

use std::fmt;
use std::str::FromStr;

use linetools_core::Transform;

use crate::error::Error;

/// A 1-based, inclusive range of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl FromStr for LineRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidRange(s.to_string());
        let parse = |part: &str| part.trim().parse::<usize>().map_err(|_| invalid());

        let (start, end) = match s.split_once(':') {
            Some((start, end)) => (parse(start)?, parse(end)?),
            None => {
                let line = parse(s)?;
                (line, line)
            }
        };

        if start == 0 || end < start {
            return Err(invalid());
        }

        Ok(Self { start, end })
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// What part of the document a command operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Whole,
    Lines(LineRange),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Whole => write!(f, "whole"),
            Selection::Lines(range) => write!(f, "{range}"),
        }
    }
}

/// The result of applying a transformation to a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The text that replaced the selection
    pub replacement: String,
    /// The full document after the replacement
    pub document: String,
}

/// Split a trailing `\n` or `\r\n` off `text`
fn split_terminator(text: &str) -> (&str, &str) {
    if let Some(body) = text.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = text.strip_suffix('\n') {
        (body, "\n")
    } else {
        (text, "")
    }
}

/// Apply `transform` to the selected part of `document`
pub fn apply<T>(document: &str, selection: Selection, transform: &T) -> Result<Edit, Error>
where
    T: Transform + ?Sized,
{
    let (prefix, selected, suffix) = match selection {
        Selection::Whole => ("", document, ""),
        Selection::Lines(range) => {
            let lines: Vec<&str> = document.split_inclusive('\n').collect();

            if range.start == 0 || range.end < range.start {
                return Err(Error::InvalidRange(range.to_string()));
            }

            if range.end > lines.len() {
                return Err(Error::RangeOutOfBounds {
                    start: range.start,
                    end: range.end,
                    total: lines.len(),
                });
            }

            // Byte offsets of the selected lines inside `document`
            let start: usize = lines[..range.start - 1].iter().map(|l| l.len()).sum();
            let end: usize = start
                + lines[range.start - 1..range.end]
                    .iter()
                    .map(|l| l.len())
                    .sum::<usize>();

            (&document[..start], &document[start..end], &document[end..])
        }
    };

    let (body, terminator) = split_terminator(selected);
    let mut replacement = transform.transform(body);

    if selected.contains("\r\n") {
        replacement = replacement.replace("\r\n", "\n").replace('\n', "\r\n");
    }
    let document = format!("{prefix}{replacement}{terminator}{suffix}");

    Ok(Edit {
        replacement,
        document,
    })
}
