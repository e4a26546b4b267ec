//! Solver handles and the 1QBit solver family constructors.

use std::sync::Arc;

use alsvid_qio::ProblemHandle;
use async_trait::async_trait;

use crate::error::HalResult;
use crate::job::JobDetails;
use crate::workspace::Workspace;

/// One configured solver: an execution target plus the parameter map to
/// run it with.
#[async_trait]
pub trait Solver: Send + Sync {
    /// Solver identity used in ledgers and reports.
    fn name(&self) -> &str;

    /// Remote execution target.
    fn target(&self) -> &str;

    /// Parameter map sent with every submission.
    fn input_params(&self) -> &serde_json::Value;

    /// Submit one stored problem, returning the created job record.
    async fn submit(&self, problem: &ProblemHandle) -> HalResult<JobDetails>;
}

/// [`Solver`] backed by a [`Workspace`] connection.
pub struct QioSolver {
    name: String,
    target: String,
    params: serde_json::Value,
    workspace: Arc<dyn Workspace>,
}

impl QioSolver {
    /// Create a solver handle over the given workspace.
    pub fn new(
        name: impl Into<String>,
        target: impl Into<String>,
        params: serde_json::Value,
        workspace: Arc<dyn Workspace>,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            params,
            workspace,
        }
    }
}

#[async_trait]
impl Solver for QioSolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn input_params(&self) -> &serde_json::Value {
        &self.params
    }

    async fn submit(&self, problem: &ProblemHandle) -> HalResult<JobDetails> {
        tracing::debug!("Submitting problem {} to {}", problem.name, self.target);
        self.workspace
            .submit_job(&self.target, &self.params, problem)
            .await
    }
}

/// Constructors for the 1QBit solver families.
pub struct SolverFactory;

impl SolverFactory {
    /// Tabu search solver over the `1qbit.tabu` target.
    pub fn tabu_search(
        params: serde_json::Value,
        workspace: Arc<dyn Workspace>,
    ) -> Arc<dyn Solver> {
        Arc::new(QioSolver::new("TabuSearch", "1qbit.tabu", params, workspace))
    }

    /// PTICM solver over the `1qbit.pticm` target.
    pub fn pticm(params: serde_json::Value, workspace: Arc<dyn Workspace>) -> Arc<dyn Solver> {
        Arc::new(QioSolver::new("PticmSolver", "1qbit.pticm", params, workspace))
    }

    /// Path relinking solver over the `1qbit.pathrelinking` target.
    pub fn path_relinking(
        params: serde_json::Value,
        workspace: Arc<dyn Workspace>,
    ) -> Arc<dyn Solver> {
        Arc::new(QioSolver::new(
            "PathRelinkingSolver",
            "1qbit.pathrelinking",
            params,
            workspace,
        ))
    }

    /// One tabu search solver per parameter set.
    pub fn tabu_search_solvers(
        param_sets: Vec<serde_json::Value>,
        workspace: &Arc<dyn Workspace>,
    ) -> Vec<Arc<dyn Solver>> {
        param_sets
            .into_iter()
            .map(|params| Self::tabu_search(params, Arc::clone(workspace)))
            .collect()
    }

    /// One PTICM solver per parameter set.
    pub fn pticm_solvers(
        param_sets: Vec<serde_json::Value>,
        workspace: &Arc<dyn Workspace>,
    ) -> Vec<Arc<dyn Solver>> {
        param_sets
            .into_iter()
            .map(|params| Self::pticm(params, Arc::clone(workspace)))
            .collect()
    }

    /// One path relinking solver per parameter set.
    pub fn path_relinking_solvers(
        param_sets: Vec<serde_json::Value>,
        workspace: &Arc<dyn Workspace>,
    ) -> Vec<Arc<dyn Solver>> {
        param_sets
            .into_iter()
            .map(|params| Self::path_relinking(params, Arc::clone(workspace)))
            .collect()
    }
}
