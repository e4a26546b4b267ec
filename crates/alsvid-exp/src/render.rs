//! CSV summaries of a submitted batch.

use std::sync::Arc;

use alsvid_hal::{ErrorData, HalError, JobId, JobStatus, Workspace};

use crate::error::ExpResult;
use crate::ledger::SubmissionLedger;
use crate::report::JobReport;

/// Column header of the summary table.
pub const CSV_HEADER: &str =
    "creation_time, id, target, status, total_time, queue_time, execution_time, cost, error_message";

/// Renders a submitted batch as a CSV summary table.
pub struct SummaryRenderer {
    workspace: Arc<dyn Workspace>,
}

impl SummaryRenderer {
    /// Create a renderer over the given workspace.
    pub fn new(workspace: Arc<dyn Workspace>) -> Self {
        Self { workspace }
    }

    /// One row per job in submission order, `null` for figures a job's
    /// status does not provide.
    ///
    /// Rendering never fails as a whole. A row is dropped when its job
    /// record cannot be fetched, when a succeeded job has no readable
    /// cost, or when a failed job has no parseable error message; each
    /// drop is logged.
    pub async fn render_csv(&self, ledger: &SubmissionLedger) -> String {
        let mut out = String::from(CSV_HEADER);
        for id in &ledger.job_ids {
            match self.render_row(id).await {
                Ok(row) => {
                    out.push('\n');
                    out.push_str(&row);
                }
                Err(e) => {
                    tracing::error!("Failed to summarize the job, job_id: {}: {}", id, e);
                }
            }
        }
        out
    }

    async fn render_row(&self, id: &JobId) -> ExpResult<String> {
        let details = self.workspace.get_job(id).await?;
        let report = JobReport::from_details(&details);

        let cost = match details.status {
            JobStatus::Succeeded => {
                let results = self.workspace.job_results(id).await?;
                let cost = results
                    .first_cost()
                    .ok_or_else(|| HalError::NoResults(id.0.clone()))?;
                Some(cost)
            }
            _ => None,
        };

        let error_message = match details.status {
            JobStatus::Failed => {
                let raw = details.error_data.as_deref().unwrap_or("");
                let parsed = ErrorData::parse(raw)?;
                let message = parsed.message.ok_or_else(|| {
                    HalError::Service(format!("no message in error payload for job {id}"))
                })?;
                Some(format!("\"{}\"", message.replace('\n', "").trim()))
            }
            _ => None,
        };

        Ok(format!(
            "{}, {}, {}, {}, {}, {}, {}, {}, {}",
            details.creation_time.to_rfc3339(),
            details.id,
            details.target,
            details.status,
            fmt_opt(report.total_time),
            fmt_opt(report.queue_time),
            fmt_opt(report.execution_time),
            fmt_opt(cost),
            error_message.as_deref().unwrap_or("null"),
        ))
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::from("null"),
    }
}
