//! Source error types.

use thiserror::Error;

/// Source-related errors.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Export file not found.
    #[error("export file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Invalid export payload.
    #[error("invalid export payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;
