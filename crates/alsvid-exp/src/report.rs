//! Per-job reports with derived timing figures.

use alsvid_hal::{ErrorData, JobDetails, JobId, JobStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One flattened row of an experiment: job details, derived timings, and
/// the solver/problem/experiment context the job was submitted under.
///
/// Which fields are populated depends on the job status. A `Waiting` job
/// has identity fields only; an `Executing` job gains `queue_time`; the
/// terminal statuses gain the full timing set where the underlying
/// timestamps exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobReport {
    pub id: JobId,
    pub target: String,
    pub status: JobStatus,
    pub creation_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_execution_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_execution_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_time: Option<DateTime<Utc>>,
    /// Seconds from creation to completion or cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<f64>,
    /// Seconds from creation to begin of execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_time: Option<f64>,
    /// Seconds from begin of execution to completion or cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
    /// Best cost found, for succeeded jobs with readable results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Parameters the service applied, echoed from the result payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_data: Option<ErrorData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<ProblemContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver: Option<SolverContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment: Option<ExperimentContext>,
}

/// Problem the job was submitted for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemContext {
    pub name: String,
    pub input_data_uri: String,
}

/// Solver the job was submitted through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverContext {
    pub class_name: String,
    pub input_params: serde_json::Value,
}

/// Position of the job inside the experiment fan-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentContext {
    pub experiment_id: String,
    pub date: DateTime<Utc>,
    pub num_iterations: u32,
    pub iteration: usize,
    pub solver_list_length: usize,
    pub solver_list_index: usize,
    pub problem_list_length: usize,
    pub problem_list_index: usize,
}

impl JobReport {
    /// Builds a report from raw job details, deriving the timing figures
    /// the job's status supports.
    ///
    /// Timestamps are surfaced and differences computed only where the
    /// status makes them meaningful. A cancelled job never reports an end
    /// of execution even if the service recorded one, and a failed job
    /// reports timings only when both execution timestamps are present.
    pub fn from_details(details: &JobDetails) -> Self {
        let mut report = JobReport {
            id: details.id.clone(),
            target: details.target.clone(),
            status: details.status,
            creation_time: details.creation_time,
            begin_execution_time: None,
            end_execution_time: None,
            cancellation_time: None,
            total_time: None,
            queue_time: None,
            execution_time: None,
            cost: None,
            parameters: None,
            error_data: None,
            input_data_uri: details
                .input_data_uri
                .as_deref()
                .map(|uri| uri.split('?').next().unwrap_or(uri).to_string()),
            output_data_uri: details.output_data_uri.clone(),
            problem: None,
            solver: None,
            experiment: None,
        };

        let created = details.creation_time;
        let begin = details.begin_execution_time;
        let end = details.end_execution_time;
        let cancelled = details.cancellation_time;

        match details.status {
            JobStatus::Waiting => {}
            JobStatus::Executing => {
                report.begin_execution_time = begin;
                report.queue_time = begin.map(|b| seconds_between(created, b));
            }
            JobStatus::Succeeded => {
                report.begin_execution_time = begin;
                report.end_execution_time = end;
                report.queue_time = begin.map(|b| seconds_between(created, b));
                if let (Some(b), Some(e)) = (begin, end) {
                    report.execution_time = Some(seconds_between(b, e));
                }
                report.total_time = end.map(|e| seconds_between(created, e));
            }
            JobStatus::Failed => {
                report.begin_execution_time = begin;
                report.end_execution_time = end;
                if let (Some(b), Some(e)) = (begin, end) {
                    report.queue_time = Some(seconds_between(created, b));
                    report.execution_time = Some(seconds_between(b, e));
                    report.total_time = Some(seconds_between(created, e));
                }
            }
            JobStatus::Cancelled => {
                report.begin_execution_time = begin;
                report.cancellation_time = cancelled;
                report.total_time = cancelled.map(|c| seconds_between(created, c));
                if let (Some(b), Some(c)) = (begin, cancelled) {
                    report.queue_time = Some(seconds_between(created, b));
                    report.execution_time = Some(seconds_between(b, c));
                }
            }
        }

        report
    }
}

/// Signed difference between two timestamps in seconds.
fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let delta = end - start;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1e6,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    fn details(status: JobStatus) -> JobDetails {
        JobDetails::new("job-0", "1qbit.tabu", serde_json::json!({}))
            .with_status(status)
            .with_creation_time(at(0))
    }

    #[test]
    fn test_waiting_has_no_timings() {
        let report = JobReport::from_details(&details(JobStatus::Waiting));
        assert!(report.begin_execution_time.is_none());
        assert!(report.queue_time.is_none());
        assert!(report.execution_time.is_none());
        assert!(report.total_time.is_none());
    }

    #[test]
    fn test_executing_derives_queue_time_only() {
        let details = details(JobStatus::Executing).with_begin_execution_time(at(30));
        let report = JobReport::from_details(&details);
        assert_eq!(report.queue_time, Some(30.0));
        assert!(report.execution_time.is_none());
        assert!(report.total_time.is_none());
    }

    #[test]
    fn test_succeeded_derives_all_timings() {
        let details = details(JobStatus::Succeeded)
            .with_begin_execution_time(at(30))
            .with_end_execution_time(at(90));
        let report = JobReport::from_details(&details);
        assert_eq!(report.queue_time, Some(30.0));
        assert_eq!(report.execution_time, Some(60.0));
        assert_eq!(report.total_time, Some(90.0));
    }

    #[test]
    fn test_failed_without_begin_has_no_timings() {
        let details = details(JobStatus::Failed).with_end_execution_time(at(45));
        let report = JobReport::from_details(&details);
        assert!(report.queue_time.is_none());
        assert!(report.execution_time.is_none());
        assert!(report.total_time.is_none());
        assert_eq!(report.end_execution_time, Some(at(45)));
    }

    #[test]
    fn test_failed_with_both_timestamps_derives_all() {
        let details = details(JobStatus::Failed)
            .with_begin_execution_time(at(10))
            .with_end_execution_time(at(45));
        let report = JobReport::from_details(&details);
        assert_eq!(report.queue_time, Some(10.0));
        assert_eq!(report.execution_time, Some(35.0));
        assert_eq!(report.total_time, Some(45.0));
    }

    #[test]
    fn test_cancelled_never_reports_end_time() {
        let details = details(JobStatus::Cancelled)
            .with_begin_execution_time(at(20))
            .with_end_execution_time(at(40))
            .with_cancellation_time(at(50));
        let report = JobReport::from_details(&details);
        assert!(report.end_execution_time.is_none());
        assert_eq!(report.cancellation_time, Some(at(50)));
        assert_eq!(report.queue_time, Some(20.0));
        assert_eq!(report.execution_time, Some(30.0));
        assert_eq!(report.total_time, Some(50.0));
    }

    #[test]
    fn test_cancelled_before_execution() {
        let details = details(JobStatus::Cancelled).with_cancellation_time(at(15));
        let report = JobReport::from_details(&details);
        assert_eq!(report.total_time, Some(15.0));
        assert!(report.queue_time.is_none());
        assert!(report.execution_time.is_none());
    }

    #[test]
    fn test_subsecond_precision() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let end = DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap();
        assert_eq!(seconds_between(start, end), 0.25);
    }

    #[test]
    fn test_input_uri_is_stripped_of_query() {
        let details = details(JobStatus::Waiting)
            .with_input_data_uri("mem://qio-problems/p1?sig=abc")
            .with_output_data_uri("mem://results/job-0?sig=def");
        let report = JobReport::from_details(&details);
        assert_eq!(report.input_data_uri.as_deref(), Some("mem://qio-problems/p1"));
        assert_eq!(
            report.output_data_uri.as_deref(),
            Some("mem://results/job-0?sig=def")
        );
    }
}
