//! Experiment definition and batch submission.

use std::sync::Arc;

use alsvid_hal::{JobDetails, Solver};
use alsvid_qio::ProblemHandle;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{ExpError, ExpResult};
use crate::ledger::{ProblemGroup, SolverGroup, SubmissionLedger};

/// A batch of solver runs: every solver applied to every problem,
/// repeated `num_iterations` times.
///
/// Construct with [`Experiment::new`], adjust with the `with_*` methods,
/// then call [`submit`](Experiment::submit) to fan the batch out and
/// obtain a [`SubmissionLedger`].
pub struct Experiment {
    experiment_id: String,
    date: DateTime<Utc>,
    num_iterations: u32,
    solvers: Vec<Arc<dyn Solver>>,
    problems: Vec<ProblemHandle>,
}

impl Experiment {
    /// Create an experiment over the given solvers and problems, with a
    /// random identity and a single iteration.
    pub fn new(solvers: Vec<Arc<dyn Solver>>, problems: Vec<ProblemHandle>) -> Self {
        Self {
            experiment_id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            num_iterations: 1,
            solvers,
            problems,
        }
    }

    /// Replace the generated experiment id.
    pub fn with_experiment_id(mut self, id: impl Into<String>) -> Self {
        self.experiment_id = id.into();
        self
    }

    /// Set the number of repetitions per solver-problem pair. Values
    /// below 1 are raised to 1.
    pub fn with_num_iterations(mut self, n: u32) -> Self {
        self.num_iterations = n.max(1);
        self
    }

    /// Experiment identity.
    pub fn experiment_id(&self) -> &str {
        &self.experiment_id
    }

    /// Creation timestamp.
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Repetitions per solver-problem pair.
    pub fn num_iterations(&self) -> u32 {
        self.num_iterations
    }

    /// Submit the full batch and record what was created.
    ///
    /// Iterates solvers in order, problems in order within each solver,
    /// and iterations in order within each pair. A failed submission is
    /// logged and skipped; the surviving jobs stand on their own. If a
    /// solver fails every single submission the batch is abandoned with
    /// [`ExpError::SolverExhausted`] and no ledger is returned.
    pub async fn submit(&self) -> ExpResult<SubmissionLedger> {
        if self.solvers.is_empty() || self.problems.is_empty() {
            return Err(ExpError::EmptyExperiment);
        }

        tracing::info!(
            "Submitting experiment {}: {} solvers x {} problems x {} iterations",
            self.experiment_id,
            self.solvers.len(),
            self.problems.len(),
            self.num_iterations
        );

        let mut solver_groups = Vec::with_capacity(self.solvers.len());
        let mut all_job_ids = Vec::new();

        for solver in &self.solvers {
            let mut last_submitted: Option<JobDetails> = None;
            let mut problem_groups = Vec::with_capacity(self.problems.len());

            for problem in &self.problems {
                let mut group = ProblemGroup {
                    problem_name: problem.name.clone(),
                    input_data_uri: problem.uploaded_uri.clone(),
                    num_iterations: self.num_iterations,
                    job_ids: Vec::with_capacity(self.num_iterations as usize),
                };

                for iteration in 0..self.num_iterations {
                    match solver.submit(problem).await {
                        Ok(details) => {
                            group.job_ids.push(details.id.clone());
                            all_job_ids.push(details.id.clone());
                            last_submitted = Some(details);
                        }
                        Err(e) => {
                            tracing::error!(
                                "Failed to submit {} to {} at iteration {}: {}",
                                problem.name,
                                solver.name(),
                                iteration,
                                e
                            );
                        }
                    }
                }

                // Recorded even when every iteration failed.
                problem_groups.push(group);
            }

            let Some(last) = last_submitted else {
                return Err(ExpError::SolverExhausted {
                    solver: solver.name().to_string(),
                });
            };

            solver_groups.push(SolverGroup {
                solver: solver.name().to_string(),
                input_params: last.input_params,
                problems: problem_groups,
            });
        }

        Ok(SubmissionLedger {
            experiment_id: self.experiment_id.clone(),
            date: self.date,
            num_iterations: self.num_iterations,
            solvers: solver_groups,
            job_ids: all_job_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let experiment = Experiment::new(Vec::new(), Vec::new());
        assert_eq!(experiment.num_iterations(), 1);
        assert!(!experiment.experiment_id().is_empty());
    }

    #[test]
    fn test_num_iterations_is_clamped_to_one() {
        let experiment = Experiment::new(Vec::new(), Vec::new()).with_num_iterations(0);
        assert_eq!(experiment.num_iterations(), 1);
    }

    #[tokio::test]
    async fn test_empty_experiment_is_rejected() {
        let experiment = Experiment::new(Vec::new(), Vec::new());
        assert!(matches!(
            experiment.submit().await,
            Err(ExpError::EmptyExperiment)
        ));
    }
}
