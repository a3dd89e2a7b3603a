//! SQL `LIKE` clause generation
//!
//! Each line becomes one `<column> LIKE '%item%'` clause. Clauses are joined by
//! the configured conjunction followed by a newline, so the result can be pasted
//! straight into a `WHERE`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::delimited::joinable_items;
use crate::error::ConfigError;
use crate::transform::Transform;

/// SQL engine family, which decides how the column identifier is quoted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Backtick-quoted identifiers
    #[default]
    #[serde(rename = "mysql")]
    MySql,
    /// Square-bracket identifiers
    #[serde(rename = "sqlserver")]
    SqlServer,
    /// ANSI double-quoted identifiers
    Other,
}

impl Dialect {
    /// Quote a column identifier for this dialect
    pub fn quote_identifier(&self, column: &str) -> String {
        match self {
            Dialect::MySql => format!("`{column}`"),
            Dialect::SqlServer => format!("[{column}]"),
            Dialect::Other => format!("\"{column}\""),
        }
    }
}

impl FromStr for Dialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "sqlserver" => Ok(Dialect::SqlServer),
            "other" => Ok(Dialect::Other),
            _ => Err(ConfigError::UnsupportedDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::MySql => write!(f, "mysql"),
            Dialect::SqlServer => write!(f, "sqlserver"),
            Dialect::Other => write!(f, "other"),
        }
    }
}

/// Logical keyword placed between successive clauses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conjunction {
    And,
    #[default]
    Or,
}

impl Conjunction {
    pub fn keyword(&self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }
}

impl FromStr for Conjunction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(Conjunction::And),
            "OR" => Ok(Conjunction::Or),
            _ => Err(ConfigError::UnsupportedConjunction(s.to_string())),
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Escape a value for use inside a single-quoted SQL literal
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Builds `LIKE` clauses for a single column
///
/// Only [`SqlLike::new`] and [`SqlLike::from_names`] construct one, so the column
/// is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlLike {
    column: String,
    dialect: Dialect,
    conjunction: Conjunction,
}

impl SqlLike {
    /// Create a generator for `column`
    ///
    /// Fails with [`ConfigError::EmptyColumn`] when `column` is empty.
    pub fn new(
        column: impl Into<String>,
        dialect: Dialect,
        conjunction: Conjunction,
    ) -> Result<Self, ConfigError> {
        let column = column.into();

        if column.is_empty() {
            return Err(ConfigError::EmptyColumn);
        }

        Ok(Self {
            column,
            dialect,
            conjunction,
        })
    }

    /// Create a generator from unparsed dialect and conjunction names
    ///
    /// This is the entry point for hosts that collect free text from the user. An
    /// unknown dialect or conjunction is reported as a [`ConfigError`].
    pub fn from_names(column: &str, dialect: &str, conjunction: &str) -> Result<Self, ConfigError> {
        Self::new(column, dialect.parse()?, conjunction.parse()?)
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }
}

impl Transform for SqlLike {
    fn transform(&self, input: &str) -> String {
        let column = self.dialect.quote_identifier(&self.column);
        let separator = format!(" {}\n", self.conjunction);

        joinable_items(input)
            .map(|item| format!("{column} LIKE '%{}%'", escape_literal(item)))
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit(dialect: Dialect, conjunction: Conjunction) -> SqlLike {
        SqlLike::new("fruit", dialect, conjunction).unwrap()
    }

    // ============================================================================
    // transform tests
    // ============================================================================

    #[test]
    fn test_sql_like_mysql_or() {
        let output = fruit(Dialect::MySql, Conjunction::Or).transform("banana\napple\norange");
        assert_eq!(
            output,
            "`fruit` LIKE '%banana%' OR\n`fruit` LIKE '%apple%' OR\n`fruit` LIKE '%orange%'"
        );
    }

    #[test]
    fn test_sql_like_sqlserver_and() {
        let output = fruit(Dialect::SqlServer, Conjunction::And).transform("banana\napple");
        assert_eq!(output, "[fruit] LIKE '%banana%' AND\n[fruit] LIKE '%apple%'");
    }

    #[test]
    fn test_sql_like_other_dialect() {
        let output = fruit(Dialect::Other, Conjunction::Or).transform("banana");
        assert_eq!(output, "\"fruit\" LIKE '%banana%'");
    }

    #[test]
    fn test_sql_like_escapes_single_quotes() {
        let output = fruit(Dialect::MySql, Conjunction::Or).transform("o'brien");
        assert_eq!(output, "`fruit` LIKE '%o''brien%'");
    }

    #[test]
    fn test_sql_like_sanitizes_and_strips_commas() {
        let output = fruit(Dialect::MySql, Conjunction::Or).transform("'banana',\n  apple ,");
        assert_eq!(output, "`fruit` LIKE '%banana%' OR\n`fruit` LIKE '%apple%'");
    }

    #[test]
    fn test_sql_like_skips_empty_lines() {
        let output = fruit(Dialect::MySql, Conjunction::And).transform("a\n\nb\n");
        assert_eq!(output, "`fruit` LIKE '%a%' AND\n`fruit` LIKE '%b%'");
    }

    #[test]
    fn test_sql_like_whitespace_only_line_is_empty_pattern() {
        let output = fruit(Dialect::MySql, Conjunction::Or).transform("a\n   \nb");
        assert_eq!(
            output,
            "`fruit` LIKE '%a%' OR\n`fruit` LIKE '%%' OR\n`fruit` LIKE '%b%'"
        );
    }

    #[test]
    fn test_sql_like_empty_input() {
        assert_eq!(fruit(Dialect::MySql, Conjunction::Or).transform(""), "");
    }

    #[test]
    fn test_sql_like_single_item_has_no_conjunction() {
        let output = fruit(Dialect::MySql, Conjunction::Or).transform("banana");
        assert!(!output.contains(" OR"));
    }

    #[test]
    fn test_sql_like_clause_and_conjunction_counts() {
        let input = "a\nb\n\nc\nd\ne";
        let output = fruit(Dialect::SqlServer, Conjunction::And).transform(input);
        let kept = input.split('\n').filter(|l| !l.is_empty()).count();

        assert_eq!(output.matches(" LIKE ").count(), kept);
        assert_eq!(output.matches(" AND\n").count(), kept - 1);
        assert!(!output.ends_with("AND"));
    }

    // ============================================================================
    // Construction tests
    // ============================================================================

    #[test]
    fn test_sql_like_empty_column_rejected() {
        let result = SqlLike::new("", Dialect::MySql, Conjunction::Or);
        assert_eq!(result.unwrap_err(), ConfigError::EmptyColumn);
    }

    #[test]
    fn test_sql_like_from_names() {
        let sql = SqlLike::from_names("fruit", "sqlserver", "and").unwrap();
        assert_eq!(sql.column(), "fruit");
        assert_eq!(sql.dialect(), Dialect::SqlServer);
        assert_eq!(sql.conjunction(), Conjunction::And);
    }

    #[test]
    fn test_sql_like_from_names_unknown_dialect() {
        let result = SqlLike::from_names("fruit", "postgres", "OR");
        assert_eq!(
            result.unwrap_err(),
            ConfigError::UnsupportedDialect("postgres".to_string())
        );
    }

    #[test]
    fn test_sql_like_from_names_unknown_conjunction() {
        let result = SqlLike::from_names("fruit", "mysql", "XOR");
        assert_eq!(
            result.unwrap_err(),
            ConfigError::UnsupportedConjunction("XOR".to_string())
        );
    }

    #[test]
    fn test_dialect_error_message() {
        let err = "oracle".parse::<Dialect>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported SQL dialect: oracle. Valid dialects: mysql, sqlserver, other"
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Dialect::default(), Dialect::MySql);
        assert_eq!(Conjunction::default(), Conjunction::Or);
    }

    #[test]
    fn test_dialect_serde_names() {
        assert_eq!(serde_json::to_string(&Dialect::MySql).unwrap(), "\"mysql\"");
        assert_eq!(
            serde_json::to_string(&Dialect::SqlServer).unwrap(),
            "\"sqlserver\""
        );
        assert_eq!(serde_json::to_string(&Conjunction::And).unwrap(), "\"AND\"");
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(Dialect::MySql.quote_identifier("a"), "`a`");
        assert_eq!(Dialect::SqlServer.quote_identifier("a"), "[a]");
        assert_eq!(Dialect::Other.quote_identifier("a"), "\"a\"");
    }

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal("it's 'here'"), "it''s ''here''");
        assert_eq!(escape_literal("plain"), "plain");
    }
}
