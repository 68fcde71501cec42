//! Core error types.

use thiserror::Error;

use crate::comment::CommentError;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed commit comment.
    #[error("comment error: {0}")]
    Comment(#[from] CommentError),

    /// Source error.
    #[error("source error: {0}")]
    Source(#[from] relnotes_source::SourceError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
