//! The remote solver-service interface.

use std::time::Duration;

use alsvid_qio::ProblemHandle;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};
use crate::job::{JobDetails, JobId};
use crate::results::JobResults;

/// A connection to the solver service.
///
/// Implementations cover job submission, record lookup, and result
/// retrieval for one workspace. All submission and polling in the engine
/// goes through this trait; tests and demos plug in
/// [`MockWorkspace`](crate::mock::MockWorkspace).
#[async_trait]
pub trait Workspace: Send + Sync {
    /// Submit a stored problem to `target` with the given parameter map,
    /// returning the created job record.
    async fn submit_job(
        &self,
        target: &str,
        params: &serde_json::Value,
        problem: &ProblemHandle,
    ) -> HalResult<JobDetails>;

    /// Current record for a job.
    async fn get_job(&self, id: &JobId) -> HalResult<JobDetails>;

    /// Result payload of a `Succeeded` job.
    async fn job_results(&self, id: &JobId) -> HalResult<JobResults>;

    /// Block until the job reaches a terminal status, returning the final
    /// record.
    ///
    /// The default implementation polls [`get_job`](Workspace::get_job).
    async fn wait_until_completed(&self, id: &JobId) -> HalResult<JobDetails> {
        use tokio::time::sleep;

        let poll_interval = Duration::from_millis(500);
        let max_polls = 600; // 5 minutes max

        for _ in 0..max_polls {
            let details = self.get_job(id).await?;
            if details.status.is_terminal() {
                return Ok(details);
            }
            sleep(poll_interval).await;
        }

        Err(HalError::Timeout(id.0.clone()))
    }
}

/// Connection settings for the solver service.
///
/// There is no process-wide default workspace: build a config explicitly
/// (or read one from the environment) and hand it to whatever adapter
/// opens the connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Subscription the workspace lives in.
    pub subscription_id: String,
    /// Resource group of the workspace.
    pub resource_group: String,
    /// Workspace name.
    pub workspace_name: String,
    /// Deployment region.
    pub location: String,
}

impl WorkspaceConfig {
    /// Create a config from its parts.
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        workspace_name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            workspace_name: workspace_name.into(),
            location: location.into(),
        }
    }

    /// Read the connection settings from the environment.
    ///
    /// Expects `ALSVID_SUBSCRIPTION_ID`, `ALSVID_RESOURCE_GROUP`,
    /// `ALSVID_WORKSPACE_NAME`, and `ALSVID_WORKSPACE_LOCATION`.
    pub fn from_env() -> HalResult<Self> {
        Ok(Self {
            subscription_id: required_env("ALSVID_SUBSCRIPTION_ID")?,
            resource_group: required_env("ALSVID_RESOURCE_GROUP")?,
            workspace_name: required_env("ALSVID_WORKSPACE_NAME")?,
            location: required_env("ALSVID_WORKSPACE_LOCATION")?,
        })
    }
}

fn required_env(key: &str) -> HalResult<String> {
    std::env::var(key).map_err(|_| HalError::Configuration(format!("{key} is not set")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::JobStatus;
    use serde_json::json;

    /// Minimal workspace whose jobs are already terminal, for exercising
    /// the provided wait loop.
    struct DoneWorkspace;

    #[async_trait]
    impl Workspace for DoneWorkspace {
        async fn submit_job(
            &self,
            target: &str,
            params: &serde_json::Value,
            _problem: &ProblemHandle,
        ) -> HalResult<JobDetails> {
            Ok(JobDetails::new("job-0", target, params.clone()))
        }

        async fn get_job(&self, id: &JobId) -> HalResult<JobDetails> {
            Ok(JobDetails::new(id.clone(), "1qbit.tabu", json!({})).with_status(JobStatus::Succeeded))
        }

        async fn job_results(&self, id: &JobId) -> HalResult<JobResults> {
            Err(HalError::NoResults(id.0.clone()))
        }
    }

    #[tokio::test]
    async fn test_default_wait_returns_terminal_record() {
        let workspace = DoneWorkspace;
        let details = workspace
            .wait_until_completed(&JobId::from("job-7"))
            .await
            .unwrap();
        assert_eq!(details.status, JobStatus::Succeeded);
        assert_eq!(details.id.0, "job-7");
    }

    #[test]
    fn test_workspace_config_parts() {
        let config = WorkspaceConfig::new("sub", "rg", "ws", "westus");
        assert_eq!(config.workspace_name, "ws");
        assert_eq!(config.location, "westus");
    }

    #[test]
    fn test_workspace_config_from_env() {
        // SAFETY: This test is the only reader and writer of these variables
        unsafe {
            std::env::set_var("ALSVID_SUBSCRIPTION_ID", "sub");
            std::env::set_var("ALSVID_RESOURCE_GROUP", "rg");
            std::env::set_var("ALSVID_WORKSPACE_NAME", "ws");
            std::env::set_var("ALSVID_WORKSPACE_LOCATION", "westus");
        }
        let config = WorkspaceConfig::from_env().unwrap();
        assert_eq!(config, WorkspaceConfig::new("sub", "rg", "ws", "westus"));

        // SAFETY: The removed variable drives the error path below
        unsafe {
            std::env::remove_var("ALSVID_WORKSPACE_LOCATION");
        }
        let err = WorkspaceConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("ALSVID_WORKSPACE_LOCATION"));

        // SAFETY: Cleaning up test variables
        unsafe {
            std::env::remove_var("ALSVID_SUBSCRIPTION_ID");
            std::env::remove_var("ALSVID_RESOURCE_GROUP");
            std::env::remove_var("ALSVID_WORKSPACE_NAME");
        }
    }
}
