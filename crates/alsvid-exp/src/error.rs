//! Error handling for the experiment engine.

use thiserror::Error;

/// Result type for experiment operations.
pub type ExpResult<T> = Result<T, ExpError>;

/// Errors that can occur during experiment operations.
#[derive(Error, Debug)]
pub enum ExpError {
    /// Experiment was built with no solvers or no problems.
    #[error("Experiment has no solvers or no problems")]
    EmptyExperiment,

    /// Every submission for one solver failed.
    #[error("All submissions failed for solver {solver}")]
    SolverExhausted {
        /// Name of the solver whose submissions were exhausted.
        solver: String,
    },

    /// Aggregation was asked to flatten a ledger with no recorded
    /// solver groups, or a solver group with no problem groups.
    #[error("Empty problem list")]
    EmptyProblemList,

    /// Solver-service failure.
    #[error("Service error: {0}")]
    Hal(#[from] alsvid_hal::HalError),
}
