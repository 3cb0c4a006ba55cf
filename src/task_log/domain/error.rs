//! Error types for task log domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing task log domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskLogDomainError {
    /// A cursor query parameter was absent from the request.
    #[error("missing cursor parameter: {0}")]
    MissingCursorParameter(&'static str),

    /// The page number was not a positive integer.
    #[error("invalid page number '{0}', expected a positive integer")]
    InvalidPageNumber(String),

    /// The watermark was not an epoch-seconds integer within timestamp range.
    #[error("invalid completed_date '{0}', expected Unix epoch seconds")]
    InvalidWatermark(String),

    /// The owner identifier was zero or negative.
    #[error("invalid owner identifier {0}, expected a positive integer")]
    InvalidOwnerId(i64),

    /// The task content is empty after trimming.
    #[error("task content must not be empty")]
    EmptyContent,
}
