//! Alsvid Solver-Service Abstraction Layer
//!
//! This crate provides a unified interface for submitting optimization
//! problems to annealing solver services, letting the experiment engine
//! work against real providers and in-memory test doubles alike.
//!
//! # Overview
//!
//! The abstraction is split across a few small seams:
//!
//! - A [`Workspace`] trait for job submission, record lookup, and result
//!   retrieval against one solver-service workspace
//! - A [`Solver`] trait binding an execution target to the parameter map it
//!   runs with, plus [`SolverFactory`] constructors for the 1QBit families
//! - [`JobDetails`] and [`JobStatus`] mirroring the service's job records
//!   (`Waiting`, `Executing`, `Succeeded`, `Failed`, `Cancelled`)
//! - [`JobResults`] and [`ErrorData`] for probing provider-shaped result
//!   and error payloads
//! - [`MockWorkspace`], a scriptable in-memory service for tests and demos
//!
//! # Example: Submitting a Problem
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use alsvid_hal::{MockWorkspace, SolverFactory, Workspace};
//! use alsvid_qio::ProblemHandle;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let workspace: Arc<dyn Workspace> = Arc::new(MockWorkspace::new());
//!     let solver = SolverFactory::tabu_search(
//!         json!({"seed": "3", "timeout": "10"}),
//!         Arc::clone(&workspace),
//!     );
//!
//!     let problem = ProblemHandle::new("p1", "mem://qio-problems/p1");
//!     let job = solver.submit(&problem).await?;
//!     println!("Job submitted: {}", job.id);
//!
//!     let done = workspace.wait_until_completed(&job.id).await?;
//!     println!("Finished as {}", done.status);
//!     Ok(())
//! }
//! ```
//!
//! # Implementing a Custom Workspace
//!
//! ```ignore
//! use alsvid_hal::{HalResult, JobDetails, JobId, JobResults, Workspace};
//! use alsvid_qio::ProblemHandle;
//! use async_trait::async_trait;
//!
//! struct MyWorkspace;
//!
//! #[async_trait]
//! impl Workspace for MyWorkspace {
//!     async fn submit_job(
//!         &self,
//!         target: &str,
//!         params: &serde_json::Value,
//!         problem: &ProblemHandle,
//!     ) -> HalResult<JobDetails> {
//!         // Create the job on the service
//!         # todo!()
//!     }
//!
//!     async fn get_job(&self, id: &JobId) -> HalResult<JobDetails> {
//!         // Look up the job record
//!         # todo!()
//!     }
//!
//!     async fn job_results(&self, id: &JobId) -> HalResult<JobResults> {
//!         // Download the result payload
//!         # todo!()
//!     }
//! }
//! ```

pub mod error;
pub mod job;
pub mod mock;
pub mod results;
pub mod solver;
pub mod workspace;

pub use error::{HalError, HalResult};
pub use job::{JobDetails, JobId, JobStatus};
pub use mock::MockWorkspace;
pub use results::{ErrorData, JobResults};
pub use solver::{QioSolver, Solver, SolverFactory};
pub use workspace::{Workspace, WorkspaceConfig};
