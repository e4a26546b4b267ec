//! Alsvid Experiment Engine: batch runs of annealing solvers.
//!
//! This crate turns a set of solvers, a set of stored problems, and a
//! repetition count into a submitted batch of remote jobs, then follows
//! that batch through to flattened per-job reports and a CSV summary.
//!
//! # Overview
//!
//! An experiment run has four phases, each owned by one type:
//!
//! - **Submission**: [`Experiment::submit`] fans out solver x problem x
//!   iteration and records every created job in a [`SubmissionLedger`]
//! - **Polling**: [`StatusPoller`] checks and awaits batch completion
//! - **Aggregation**: [`ResultAggregator`] flattens the ledger into
//!   ordered [`JobReport`]s with derived timings, costs, and contexts
//! - **Rendering**: [`SummaryRenderer`] prints the batch as a CSV table
//!
//! # Architecture
//!
//! ```text
//! [Solvers] + [Problems] + iterations
//!         |
//!         v
//!    Experiment::submit ----> SubmissionLedger
//!                                  |
//!               +------------------+------------------+
//!               v                  v                  v
//!         StatusPoller      ResultAggregator   SummaryRenderer
//!         (completion)      (Vec<JobReport>)    (CSV string)
//! ```
//!
//! Everything downstream of submission works from the ledger plus a
//! [`Workspace`](alsvid_hal::Workspace) connection; the `Experiment`
//! itself is no longer needed once the ledger exists.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use alsvid_exp::{Experiment, ResultAggregator, StatusPoller, SummaryRenderer};
//! use alsvid_hal::{MockWorkspace, SolverFactory, Workspace};
//!
//! let workspace: Arc<dyn Workspace> = Arc::new(MockWorkspace::new());
//! let solvers = vec![SolverFactory::tabu_search(params, Arc::clone(&workspace))];
//!
//! let experiment = Experiment::new(solvers, problems).with_num_iterations(3);
//! let ledger = experiment.submit().await?;
//!
//! StatusPoller::new(Arc::clone(&workspace)).wait_until_completed(&ledger).await;
//! let reports = ResultAggregator::new(Arc::clone(&workspace)).flatten(&ledger).await?;
//! println!("{}", SummaryRenderer::new(workspace).render_csv(&ledger).await);
//! ```

pub mod aggregate;
pub mod error;
pub mod experiment;
pub mod ledger;
pub mod poller;
pub mod render;
pub mod report;

pub use aggregate::ResultAggregator;
pub use error::{ExpError, ExpResult};
pub use experiment::Experiment;
pub use ledger::{ProblemGroup, SolverGroup, SubmissionLedger};
pub use poller::StatusPoller;
pub use render::{CSV_HEADER, SummaryRenderer};
pub use report::{ExperimentContext, JobReport, ProblemContext, SolverContext};
