#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid line range '{0}'. Expected START:END or LINE (1-based)")]
    InvalidRange(String),

    #[error("Line range {start}:{end} is outside the document ({total} lines)")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        total: usize,
    },

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),
}
