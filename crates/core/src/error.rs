//! Configuration errors
//!
//! Transformations never fail on their input text. The only failures are
//! configuration values that cannot be resolved when a transformation is built.

/// Error type for transformation configuration
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported SQL dialect: {0}. Valid dialects: mysql, sqlserver, other")]
    UnsupportedDialect(String),

    #[error("Unsupported conjunction: {0}. Valid conjunctions: AND, OR")]
    UnsupportedConjunction(String),

    #[error("Unsupported sort direction: {0}. Valid directions: ASC, DESC")]
    UnsupportedDirection(String),

    #[error("Column name must not be empty")]
    EmptyColumn,
}
