//! Order-and-Clean: sort sanitized lines and drop blanks

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::text::{sanitize, split_lines};
use crate::transform::Transform;

/// Sort direction for [`OrderAndClean`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" | "ASCENDING" => Ok(Direction::Ascending),
            "DESC" | "DESCENDING" => Ok(Direction::Descending),
            _ => Err(ConfigError::UnsupportedDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ASC"),
            Direction::Descending => write!(f, "DESC"),
        }
    }
}

/// Sanitizes every non-blank line and sorts the result by code point
///
/// Lines that are blank, or that become empty once their quotes are stripped, are
/// dropped so the output never contains an empty line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderAndClean {
    pub direction: Direction,
}

impl OrderAndClean {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Transform for OrderAndClean {
    fn transform(&self, input: &str) -> String {
        let mut items: Vec<&str> = split_lines(input)
            .filter(|line| !line.trim().is_empty())
            .map(sanitize)
            .filter(|item| !item.is_empty())
            .collect();

        // `str` ordering is byte-wise, which for UTF-8 is code point order
        items.sort_unstable();

        if self.direction == Direction::Descending {
            items.reverse();
        }

        items.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asc(input: &str) -> String {
        OrderAndClean::new(Direction::Ascending).transform(input)
    }

    fn desc(input: &str) -> String {
        OrderAndClean::new(Direction::Descending).transform(input)
    }

    // ============================================================================
    // transform tests
    // ============================================================================

    #[test]
    fn test_order_ascending_drops_blank_lines() {
        assert_eq!(asc("banana\napple\n\norange"), "apple\nbanana\norange");
    }

    #[test]
    fn test_order_descending() {
        assert_eq!(desc("banana\napple\n\norange"), "orange\nbanana\napple");
    }

    #[test]
    fn test_order_default_is_ascending() {
        assert_eq!(OrderAndClean::default().direction, Direction::Ascending);
    }

    #[test]
    fn test_order_sanitizes_items() {
        assert_eq!(asc("'cherry'\n\"apple\"\n  banana  "), "apple\nbanana\ncherry");
    }

    #[test]
    fn test_order_whitespace_only_lines_dropped() {
        assert_eq!(asc("b\n   \n\t\na"), "a\nb");
    }

    #[test]
    fn test_order_quote_only_lines_dropped() {
        assert_eq!(asc("b\n''\n\"\"\na"), "a\nb");
    }

    #[test]
    fn test_order_all_blank_yields_empty() {
        assert_eq!(asc(""), "");
        assert_eq!(asc("\n\n  \n"), "");
    }

    #[test]
    fn test_order_is_ordinal_not_locale() {
        // Uppercase sorts before lowercase by code point
        assert_eq!(asc("b\nB\na\nA"), "A\nB\na\nb");
        assert_eq!(asc("é\nz\ne"), "e\nz\né");
    }

    #[test]
    fn test_order_crlf_input() {
        assert_eq!(asc("banana\r\napple\r\n"), "apple\nbanana");
    }

    #[test]
    fn test_order_keeps_duplicates() {
        assert_eq!(asc("b\na\nb"), "a\nb\nb");
    }

    #[test]
    fn test_order_descending_is_reverse_of_ascending() {
        let input = "kiwi\n'fig'\n  date\napple\n\ncherry";
        let mut ascending: Vec<String> = asc(input).split('\n').map(String::from).collect();
        ascending.reverse();
        assert_eq!(desc(input), ascending.join("\n"));
    }

    #[test]
    fn test_order_output_has_no_empty_lines_and_is_sorted() {
        let output = asc("z\n\n 'y' \n\"\"\n  x,\n\r\nw");
        let lines: Vec<&str> = output.split('\n').collect();
        assert!(lines.iter().all(|l| !l.is_empty()));
        assert!(lines.windows(2).all(|w| w[0] <= w[1]));
    }

    // ============================================================================
    // Direction tests
    // ============================================================================

    #[test]
    fn test_direction_from_str() {
        assert_eq!("ASC".parse::<Direction>().unwrap(), Direction::Ascending);
        assert_eq!("desc".parse::<Direction>().unwrap(), Direction::Descending);
        assert_eq!(
            "descending".parse::<Direction>().unwrap(),
            Direction::Descending
        );
    }

    #[test]
    fn test_direction_from_str_invalid() {
        let result = "sideways".parse::<Direction>();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::UnsupportedDirection("sideways".to_string())
        );
    }

    #[test]
    fn test_direction_display_round_trips() {
        for direction in [Direction::Ascending, Direction::Descending] {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }
    }
}
