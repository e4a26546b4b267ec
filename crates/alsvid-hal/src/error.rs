//! Error types for the solver-service abstraction.

use thiserror::Error;

/// Errors that can occur in solver-service operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Job submission failed.
    #[error("Job submission failed: {0}")]
    SubmissionFailed(String),

    /// Job not found.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// No result payload available for the job.
    #[error("No results for job: {0}")]
    NoResults(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Timeout waiting for job.
    #[error("Timeout waiting for job {0}")]
    Timeout(String),

    /// Generic service error.
    #[error("Service error: {0}")]
    Service(String),
}

/// Result type for solver-service operations.
pub type HalResult<T> = Result<T, HalError>;
