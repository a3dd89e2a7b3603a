//! Remove-Duplicates: drop repeated lines, keeping the first occurrence

use std::collections::HashSet;


use crate::text::split_lines;
use crate::transform::Transform;

/// Removes repeated lines while preserving first-occurrence order
///
/// Lines are compared exactly as written. Surrounding whitespace is significant and
/// blank lines are ordinary lines, so only the second and later blanks are removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveDuplicates;

impl Transform for RemoveDuplicates {
    fn transform(&self, input: &str) -> String {
        let mut seen = HashSet::new();

        split_lines(input)
            .filter(|line| seen.insert(*line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
