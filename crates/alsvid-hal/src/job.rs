//! Job lifecycle types.
//!
//! The job state machine on the solver service:
//!
//! ```text
//!   submit_job() ──→ Waiting ──→ Executing ──→ Succeeded
//!                       │            │
//!                       │            ├──→ Failed
//!                       │            │
//!                       └────────────┴──→ Cancelled
//! ```
//!
//! **Invariants:**
//! - Newly submitted jobs are `Waiting`.
//! - Transitions are monotonic — a job never moves backward.
//! - Terminal states (`Succeeded`, `Failed`, `Cancelled`) are permanent.
//! - `error_data` is only present when status is `Failed`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    /// Create a new job ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Status of a job, as reported by the solver service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    /// Job is waiting in the service queue.
    Waiting,
    /// Job is currently executing on the target.
    Executing,
    /// Job finished and produced results.
    Succeeded,
    /// Job finished without results.
    Failed,
    /// Job was cancelled.
    Cancelled,
}

impl JobStatus {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Succeeded | JobStatus::Failed | JobStatus::Cancelled
        )
    }

    /// Check if the job is still pending (waiting or executing).
    pub fn is_pending(&self) -> bool {
        matches!(self, JobStatus::Waiting | JobStatus::Executing)
    }

    /// Check if the job finished successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, JobStatus::Succeeded)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Waiting => write!(f, "Waiting"),
            JobStatus::Executing => write!(f, "Executing"),
            JobStatus::Succeeded => write!(f, "Succeeded"),
            JobStatus::Failed => write!(f, "Failed"),
            JobStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// The job record the solver service keeps for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetails {
    /// The job identifier.
    pub id: JobId,
    /// Execution target the job was submitted to.
    pub target: String,
    /// Current status.
    pub status: JobStatus,
    /// Time the job was created on the service.
    pub creation_time: DateTime<Utc>,
    /// Time execution began.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_execution_time: Option<DateTime<Utc>>,
    /// Time execution finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_execution_time: Option<DateTime<Utc>>,
    /// Time the job was cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_time: Option<DateTime<Utc>>,
    /// URI of the uploaded input data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_uri: Option<String>,
    /// URI of the produced output data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_uri: Option<String>,
    /// String-encoded error payload, present when the job failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_data: Option<String>,
    /// Effective parameter set echoed back by the service.
    pub input_params: serde_json::Value,
}

impl JobDetails {
    /// Create a fresh `Waiting` record, stamped now.
    pub fn new(id: impl Into<JobId>, target: impl Into<String>, input_params: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            status: JobStatus::Waiting,
            creation_time: Utc::now(),
            begin_execution_time: None,
            end_execution_time: None,
            cancellation_time: None,
            input_data_uri: None,
            output_data_uri: None,
            error_data: None,
            input_params,
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the creation time.
    pub fn with_creation_time(mut self, t: DateTime<Utc>) -> Self {
        self.creation_time = t;
        self
    }

    /// Set the execution begin time.
    pub fn with_begin_execution_time(mut self, t: DateTime<Utc>) -> Self {
        self.begin_execution_time = Some(t);
        self
    }

    /// Set the execution end time.
    pub fn with_end_execution_time(mut self, t: DateTime<Utc>) -> Self {
        self.end_execution_time = Some(t);
        self
    }

    /// Set the cancellation time.
    pub fn with_cancellation_time(mut self, t: DateTime<Utc>) -> Self {
        self.cancellation_time = Some(t);
        self
    }

    /// Set the input data URI.
    pub fn with_input_data_uri(mut self, uri: impl Into<String>) -> Self {
        self.input_data_uri = Some(uri.into());
        self
    }

    /// Set the output data URI.
    pub fn with_output_data_uri(mut self, uri: impl Into<String>) -> Self {
        self.output_data_uri = Some(uri.into());
        self
    }

    /// Set the string-encoded error payload.
    pub fn with_error_data(mut self, raw: impl Into<String>) -> Self {
        self.error_data = Some(raw.into());
        self
    }

    /// Whether the job has reached a terminal status.
    pub fn has_completed(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_terminal() {
        assert!(!JobStatus::Waiting.is_terminal());
        assert!(!JobStatus::Executing.is_terminal());
        assert!(JobStatus::Succeeded.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_job_status_wire_strings() {
        for (status, wire) in [
            (JobStatus::Waiting, "\"Waiting\""),
            (JobStatus::Executing, "\"Executing\""),
            (JobStatus::Succeeded, "\"Succeeded\""),
            (JobStatus::Failed, "\"Failed\""),
            (JobStatus::Cancelled, "\"Cancelled\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            assert_eq!(format!("\"{status}\""), wire);
        }
    }

    #[test]
    fn test_job_details_creation() {
        let details = JobDetails::new("job-0", "1qbit.tabu", serde_json::json!({"seed": "3"}))
            .with_input_data_uri("mem://qio-problems/p1");

        assert_eq!(details.id.0, "job-0");
        assert_eq!(details.status, JobStatus::Waiting);
        assert!(!details.has_completed());
        assert_eq!(details.input_data_uri.as_deref(), Some("mem://qio-problems/p1"));
        assert!(details.begin_execution_time.is_none());
    }
}
