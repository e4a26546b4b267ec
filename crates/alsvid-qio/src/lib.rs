//! QUBO/Ising problem model for the Alsvid experiment engine.
//!
//! This crate defines the cost functions submitted to annealing targets and
//! the storage seam problems are uploaded through:
//!
//! - [`Problem`] and [`Term`] describe a polynomial cost function and render
//!   the input-data document the solver service consumes
//! - [`ProblemStore`] abstracts over wherever uploaded problems live, with
//!   [`MemoryStore`] as the in-process implementation used by tests and demos
//! - [`ProblemLibrary`] generates and reuses random benchmark QUBOs
//!
//! # Example
//!
//! ```ignore
//! use alsvid_qio::{MemoryStore, Problem, ProblemLibrary, ProblemType, Term};
//!
//! let mut problem = Problem::new("sample", ProblemType::Ising);
//! problem.add_terms(vec![
//!     Term::new(-9.0, vec![0]),
//!     Term::new(-3.0, vec![1, 0]),
//!     Term::new(5.0, vec![2, 0]),
//! ]);
//!
//! let library = ProblemLibrary::new(MemoryStore::new());
//! let handle = library.generate_random_qubo_if_not_exists(50, None).await?;
//! println!("stored at {}", handle.uploaded_uri);
//! ```

pub mod error;
pub mod library;
pub mod problem;
pub mod store;

pub use error::{QioError, QioResult};
pub use library::{ProblemLibrary, random_qubo};
pub use problem::{COST_FUNCTION_VERSION, Problem, ProblemType, Term};
pub use store::{MemoryStore, ProblemHandle, ProblemStore};
