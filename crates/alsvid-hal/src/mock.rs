//! In-memory solver service for tests and demos.

use alsvid_qio::ProblemHandle;
use async_trait::async_trait;
use chrono::Utc;
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::error::{HalError, HalResult};
use crate::job::{JobDetails, JobId, JobStatus};
use crate::results::JobResults;
use crate::workspace::Workspace;

/// Scriptable in-memory [`Workspace`].
///
/// Submitted jobs are created `Waiting` with sequential ids (`job-0`,
/// `job-1`, ...). `wait_until_completed` finishes a pending job as
/// `Succeeded` on the spot, unless a terminal status was scripted
/// beforehand. Failures can be injected per submission (by 0-based
/// submission index) and per lookup (by job id).
pub struct MockWorkspace {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    jobs: FxHashMap<String, JobDetails>,
    results: FxHashMap<String, Value>,
    submitted: usize,
    fail_submissions: FxHashSet<usize>,
    fail_lookups: FxHashSet<String>,
}

impl MockWorkspace {
    /// Create an empty mock service.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
        }
    }

    /// Make the submission with this 0-based index fail.
    pub async fn fail_submission(&self, index: usize) {
        self.state.lock().await.fail_submissions.insert(index);
    }

    /// Make every lookup of this job id fail.
    pub async fn fail_lookup(&self, id: impl Into<JobId>) {
        self.state.lock().await.fail_lookups.insert(id.into().0);
    }

    /// Preload a fully specified job record.
    pub async fn insert_job(&self, details: JobDetails) {
        self.state
            .lock()
            .await
            .jobs
            .insert(details.id.0.clone(), details);
    }

    /// Overwrite the status of an existing job.
    pub async fn set_status(&self, id: &JobId, status: JobStatus) -> HalResult<()> {
        let mut state = self.state.lock().await;
        let details = state
            .jobs
            .get_mut(&id.0)
            .ok_or_else(|| HalError::JobNotFound(id.0.clone()))?;
        details.status = status;
        Ok(())
    }

    /// Script the result payload returned for a job.
    pub async fn set_results(&self, id: &JobId, results: Value) {
        self.state.lock().await.results.insert(id.0.clone(), results);
    }

    /// Finish one pending job as `Succeeded`.
    pub async fn complete(&self, id: &JobId) -> HalResult<()> {
        let mut state = self.state.lock().await;
        let MockState { jobs, results, .. } = &mut *state;
        let details = jobs
            .get_mut(&id.0)
            .ok_or_else(|| HalError::JobNotFound(id.0.clone()))?;
        finish(details, results);
        Ok(())
    }

    /// Finish every pending job as `Succeeded`.
    pub async fn complete_all(&self) {
        let mut state = self.state.lock().await;
        let MockState { jobs, results, .. } = &mut *state;
        for details in jobs.values_mut() {
            finish(details, results);
        }
    }

    /// Snapshot of a job record, if it exists.
    pub async fn job(&self, id: &JobId) -> Option<JobDetails> {
        self.state.lock().await.jobs.get(&id.0).cloned()
    }

    /// Number of submission attempts seen, including injected failures.
    pub async fn submissions(&self) -> usize {
        self.state.lock().await.submitted
    }
}

impl Default for MockWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Move a pending record to `Succeeded` and give it a default result
/// payload echoing the submitted parameters.
fn finish(details: &mut JobDetails, results: &mut FxHashMap<String, Value>) {
    if details.status.is_terminal() {
        return;
    }
    let now = Utc::now();
    details.status = JobStatus::Succeeded;
    if details.begin_execution_time.is_none() {
        details.begin_execution_time = Some(now);
    }
    details.end_execution_time = Some(now);
    if details.output_data_uri.is_none() {
        details.output_data_uri = Some(format!("mock://results/{}", details.id));
    }
    results.entry(details.id.0.clone()).or_insert_with(|| {
        json!({
            "input_params": details.input_params,
            "solutions": [{"configuration": {}, "cost": 0.0}],
        })
    });
}

#[async_trait]
impl Workspace for MockWorkspace {
    async fn submit_job(
        &self,
        target: &str,
        params: &Value,
        problem: &ProblemHandle,
    ) -> HalResult<JobDetails> {
        let mut state = self.state.lock().await;
        let index = state.submitted;
        state.submitted += 1;
        if state.fail_submissions.contains(&index) {
            return Err(HalError::SubmissionFailed(format!(
                "injected failure at submission {index}"
            )));
        }
        let id = JobId::new(format!("job-{index}"));
        let details = JobDetails::new(id.clone(), target, params.clone())
            .with_input_data_uri(&problem.uploaded_uri);
        state.jobs.insert(id.0, details.clone());
        Ok(details)
    }

    async fn get_job(&self, id: &JobId) -> HalResult<JobDetails> {
        let state = self.state.lock().await;
        if state.fail_lookups.contains(&id.0) {
            return Err(HalError::JobNotFound(id.0.clone()));
        }
        state
            .jobs
            .get(&id.0)
            .cloned()
            .ok_or_else(|| HalError::JobNotFound(id.0.clone()))
    }

    async fn job_results(&self, id: &JobId) -> HalResult<JobResults> {
        let state = self.state.lock().await;
        if state.fail_lookups.contains(&id.0) {
            return Err(HalError::JobNotFound(id.0.clone()));
        }
        if !state.jobs.contains_key(&id.0) {
            return Err(HalError::JobNotFound(id.0.clone()));
        }
        state
            .results
            .get(&id.0)
            .cloned()
            .map(JobResults::new)
            .ok_or_else(|| HalError::NoResults(id.0.clone()))
    }

    async fn wait_until_completed(&self, id: &JobId) -> HalResult<JobDetails> {
        let mut state = self.state.lock().await;
        if state.fail_lookups.contains(&id.0) {
            return Err(HalError::JobNotFound(id.0.clone()));
        }
        let MockState { jobs, results, .. } = &mut *state;
        let details = jobs
            .get_mut(&id.0)
            .ok_or_else(|| HalError::JobNotFound(id.0.clone()))?;
        finish(details, results);
        Ok(details.clone())
    }
}
