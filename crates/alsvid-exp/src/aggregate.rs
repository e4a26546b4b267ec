//! Flattening a submitted batch into ordered per-job reports.

use std::sync::Arc;

use alsvid_hal::{ErrorData, JobId, JobStatus, Workspace};

use crate::error::{ExpError, ExpResult};
use crate::ledger::SubmissionLedger;
use crate::report::{ExperimentContext, JobReport, ProblemContext, SolverContext};

/// Builds the flat report list for a submitted batch.
pub struct ResultAggregator {
    workspace: Arc<dyn Workspace>,
}

impl ResultAggregator {
    /// Create an aggregator over the given workspace.
    pub fn new(workspace: Arc<dyn Workspace>) -> Self {
        Self { workspace }
    }

    /// One report per job, in ledger order: solvers, then problems, then
    /// iterations.
    ///
    /// A job whose record cannot be fetched, or whose failure payload
    /// cannot be parsed, is logged and dropped from the list. A succeeded
    /// job whose results cannot be fetched stays in the list with `cost`
    /// and `parameters` unset.
    pub async fn flatten(&self, ledger: &SubmissionLedger) -> ExpResult<Vec<JobReport>> {
        if ledger.solvers.is_empty() || ledger.solvers.iter().any(|g| g.problems.is_empty()) {
            tracing::error!("Empty problem list");
            return Err(ExpError::EmptyProblemList);
        }

        let mut reports = Vec::with_capacity(ledger.total_jobs());
        for (solver_index, group) in ledger.solvers.iter().enumerate() {
            let solver_context = SolverContext {
                class_name: group.solver.clone(),
                input_params: group.input_params.clone(),
            };
            for (problem_index, problem) in group.problems.iter().enumerate() {
                let problem_context = ProblemContext {
                    name: problem.problem_name.clone(),
                    input_data_uri: problem.input_data_uri.clone(),
                };
                for (iteration, id) in problem.job_ids.iter().enumerate() {
                    let mut report = match self.build_report(id).await {
                        Ok(report) => report,
                        Err(e) => {
                            tracing::error!(
                                "Failed to get the job details, job_id: {}: {}",
                                id,
                                e
                            );
                            continue;
                        }
                    };
                    report.solver = Some(solver_context.clone());
                    report.problem = Some(problem_context.clone());
                    report.experiment = Some(ExperimentContext {
                        experiment_id: ledger.experiment_id.clone(),
                        date: ledger.date,
                        num_iterations: problem.num_iterations,
                        iteration,
                        solver_list_length: ledger.solvers.len(),
                        solver_list_index: solver_index,
                        problem_list_length: group.problems.len(),
                        problem_list_index: problem_index,
                    });
                    reports.push(report);
                }
            }
        }
        Ok(reports)
    }

    async fn build_report(&self, id: &JobId) -> ExpResult<JobReport> {
        let details = self.workspace.get_job(id).await?;
        let mut report = JobReport::from_details(&details);

        match details.status {
            JobStatus::Succeeded => match self.workspace.job_results(id).await {
                Ok(results) => {
                    report.parameters = results.applied_params().cloned();
                    report.cost = results.first_cost();
                }
                Err(e) => {
                    tracing::error!("Failed to get the job results, job_id: {}: {}", id, e);
                }
            },
            JobStatus::Failed => {
                let raw = details.error_data.as_deref().unwrap_or("");
                report.error_data = Some(ErrorData::parse(raw)?);
            }
            _ => {}
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{ProblemGroup, SolverGroup};
    use alsvid_hal::{JobDetails, MockWorkspace};
    use chrono::Utc;
    use serde_json::json;

    fn one_group_ledger(job_ids: Vec<JobId>) -> SubmissionLedger {
        SubmissionLedger {
            experiment_id: "exp-1".into(),
            date: Utc::now(),
            num_iterations: job_ids.len() as u32,
            solvers: vec![SolverGroup {
                solver: "TabuSearch".into(),
                input_params: json!({"seed": "3"}),
                problems: vec![ProblemGroup {
                    problem_name: "p1".into(),
                    input_data_uri: "mem://qio-problems/p1".into(),
                    num_iterations: job_ids.len() as u32,
                    job_ids: job_ids.clone(),
                }],
            }],
            job_ids,
        }
    }

    #[tokio::test]
    async fn test_structurally_empty_ledger_is_an_error() {
        let aggregator = ResultAggregator::new(Arc::new(MockWorkspace::new()));

        let mut ledger = one_group_ledger(Vec::new());
        ledger.solvers.clear();
        let err = aggregator.flatten(&ledger).await.unwrap_err();
        assert_eq!(err.to_string(), "Empty problem list");

        let mut ledger = one_group_ledger(Vec::new());
        ledger.solvers[0].problems.clear();
        let err = aggregator.flatten(&ledger).await.unwrap_err();
        assert_eq!(err.to_string(), "Empty problem list");
    }

    #[tokio::test]
    async fn test_no_jobs_flattens_to_no_reports() {
        let aggregator = ResultAggregator::new(Arc::new(MockWorkspace::new()));
        let reports = aggregator.flatten(&one_group_ledger(Vec::new())).await.unwrap();
        assert!(reports.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_failure_payload_drops_the_job() {
        let mock = Arc::new(MockWorkspace::new());
        mock.insert_job(
            JobDetails::new("job-a", "1qbit.tabu", json!({}))
                .with_status(JobStatus::Failed)
                .with_error_data("{'code': 'InvalidJob', 'message': 'bad value'}"),
        )
        .await;
        mock.insert_job(
            JobDetails::new("job-b", "1qbit.tabu", json!({}))
                .with_status(JobStatus::Failed)
                .with_error_data("{'message': 'it didn't work'}"),
        )
        .await;

        let aggregator = ResultAggregator::new(mock);
        let ledger = one_group_ledger(vec![JobId::from("job-a"), JobId::from("job-b")]);
        let reports = aggregator.flatten(&ledger).await.unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id.0, "job-a");
        let error = reports[0].error_data.as_ref().unwrap();
        assert_eq!(error.code.as_deref(), Some("InvalidJob"));
        assert_eq!(error.message.as_deref(), Some("bad value"));
    }

    #[tokio::test]
    async fn test_missing_results_degrade_instead_of_dropping() {
        let mock = Arc::new(MockWorkspace::new());
        mock.insert_job(
            JobDetails::new("job-a", "1qbit.tabu", json!({})).with_status(JobStatus::Succeeded),
        )
        .await;

        let aggregator = ResultAggregator::new(mock);
        let reports = aggregator
            .flatten(&one_group_ledger(vec![JobId::from("job-a")]))
            .await
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert!(reports[0].cost.is_none());
        assert!(reports[0].parameters.is_none());
    }
}
