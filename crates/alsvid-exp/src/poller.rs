//! Completion checks over a submitted batch.

use std::sync::Arc;

use alsvid_hal::Workspace;

use crate::ledger::SubmissionLedger;

/// Checks and awaits completion of every job in a ledger.
pub struct StatusPoller {
    workspace: Arc<dyn Workspace>,
}

impl StatusPoller {
    /// Create a poller over the given workspace.
    pub fn new(workspace: Arc<dyn Workspace>) -> Self {
        Self { workspace }
    }

    /// Whether every job in the ledger has reached a terminal status.
    ///
    /// A job whose record cannot be fetched is logged and treated as
    /// completed; it no longer holds the batch open.
    pub async fn has_completed(&self, ledger: &SubmissionLedger) -> bool {
        for id in &ledger.job_ids {
            match self.workspace.get_job(id).await {
                Ok(details) => {
                    if !details.has_completed() {
                        return false;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to get the job details, job_id: {}: {}", id, e);
                }
            }
        }
        true
    }

    /// Block until every job in the ledger is terminal.
    ///
    /// Jobs are awaited in submission order. A job that cannot be awaited
    /// is logged and skipped.
    pub async fn wait_until_completed(&self, ledger: &SubmissionLedger) {
        for id in &ledger.job_ids {
            if let Err(e) = self.workspace.wait_until_completed(id).await {
                tracing::warn!("Failed to await the job, job_id: {}: {}", id, e);
            }
        }
    }
}
