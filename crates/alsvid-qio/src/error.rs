//! Error types for the problem model crate.

use thiserror::Error;

/// Errors that can occur while building, storing, or generating problems.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QioError {
    /// No stored problem with the given name.
    #[error("Problem not found: {0}")]
    ProblemNotFound(String),

    /// Upload to the backing store failed.
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic store error.
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for problem operations.
pub type QioResult<T> = Result<T, QioError>;
