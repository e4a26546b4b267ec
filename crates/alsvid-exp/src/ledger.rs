//! Submission-time record of one experiment batch.

use alsvid_hal::JobId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of everything one experiment submitted: which jobs were
/// created, for which solver and problem, in which order.
///
/// The ledger is self-sufficient. Polling, aggregation, and rendering all
/// work from a ledger plus workspace access; nothing refers back to the
/// [`Experiment`](crate::experiment::Experiment) that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionLedger {
    /// Experiment identity.
    pub experiment_id: String,
    /// When the batch was created.
    pub date: DateTime<Utc>,
    /// Requested repetitions per solver-problem pair.
    pub num_iterations: u32,
    /// Per-solver submission groups, in solver order.
    pub solvers: Vec<SolverGroup>,
    /// Every created job id across the batch, in submission order.
    pub job_ids: Vec<JobId>,
}

impl SubmissionLedger {
    /// Total number of jobs recorded in the batch.
    pub fn total_jobs(&self) -> usize {
        self.job_ids.len()
    }
}

/// Submissions recorded for one solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverGroup {
    /// Solver identity as reported.
    pub solver: String,
    /// Effective parameter set echoed by the service for the last job
    /// this group successfully submitted.
    pub input_params: serde_json::Value,
    /// Per-problem groups, in problem order. A group is recorded even
    /// when every submission for its problem failed.
    pub problems: Vec<ProblemGroup>,
}

/// Submissions recorded for one solver-problem pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemGroup {
    /// Problem name.
    pub problem_name: String,
    /// URI of the uploaded input data.
    pub input_data_uri: String,
    /// Requested repetitions.
    pub num_iterations: u32,
    /// Created job ids, in submission order. Shorter than
    /// `num_iterations` when submissions failed; never padded.
    pub job_ids: Vec<JobId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ledger_serialization_shape() {
        let ledger = SubmissionLedger {
            experiment_id: "exp-1".into(),
            date: Utc::now(),
            num_iterations: 2,
            solvers: vec![SolverGroup {
                solver: "TabuSearch".into(),
                input_params: json!({"seed": "3"}),
                problems: vec![ProblemGroup {
                    problem_name: "random_qubo_10".into(),
                    input_data_uri: "mem://qio-problems/random_qubo_10".into(),
                    num_iterations: 2,
                    job_ids: vec![JobId::from("job-0"), JobId::from("job-1")],
                }],
            }],
            job_ids: vec![JobId::from("job-0"), JobId::from("job-1")],
        };

        assert_eq!(ledger.total_jobs(), 2);

        let value = serde_json::to_value(&ledger).unwrap();
        assert_eq!(value["solvers"][0]["solver"], "TabuSearch");
        assert_eq!(value["solvers"][0]["problems"][0]["num_iterations"], 2);
        assert_eq!(value["job_ids"], json!(["job-0", "job-1"]));
    }
}
