//! Random benchmark problem generation over a [`ProblemStore`].

use rand::Rng;
use uuid::Uuid;

use crate::error::QioResult;
use crate::problem::{Problem, ProblemType};
use crate::store::{ProblemHandle, ProblemStore};

/// Generates benchmark problems and stores them for submission.
pub struct ProblemLibrary<S> {
    store: S,
}

impl<S: ProblemStore> ProblemLibrary<S> {
    /// Create a library over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate and upload a fresh random QUBO of the given size.
    ///
    /// Without an explicit name the problem is stored under a
    /// uuid-prefixed name, so repeated calls never collide.
    pub async fn generate_random_qubo(
        &self,
        size: usize,
        name: Option<&str>,
    ) -> QioResult<ProblemHandle> {
        let name = match name {
            Some(n) => n.to_string(),
            None => format!("{}_random_qubo_{}", Uuid::new_v4(), size),
        };
        tracing::debug!("Generating random QUBO {} of size {}", name, size);
        let problem = random_qubo(&name, size);
        self.store.upload(&problem).await
    }

    /// Upload a random QUBO of the given size unless one with the same
    /// name is already stored, in which case its handle is reused.
    ///
    /// The default name is `random_qubo_<size>`.
    pub async fn generate_random_qubo_if_not_exists(
        &self,
        size: usize,
        name: Option<&str>,
    ) -> QioResult<ProblemHandle> {
        let name = match name {
            Some(n) => n.to_string(),
            None => format!("random_qubo_{size}"),
        };
        if self.store.exists(&name).await? {
            tracing::debug!("Reusing stored problem {}", name);
            return self.store.handle(&name).await;
        }
        let problem = random_qubo(&name, size);
        self.store.upload(&problem).await
    }
}

/// Random `size` x `size` QUBO in upper-triangular form.
///
/// Coefficients are drawn from `uniform(-1000, 0)` with a random sign flip.
/// A constant term comes first, then one term per `i <= j` pair with ids
/// `[i]` on the diagonal and `[i, j]` above it. Size zero yields a problem
/// with no terms.
pub fn random_qubo(name: &str, size: usize) -> Problem {
    let mut rng = rand::thread_rng();
    let mut problem = Problem::new(name, ProblemType::Ising);

    if size > 0 {
        problem.add_term(signed_coefficient(&mut rng), Vec::new());
        for i in 0..size {
            for j in i..size {
                let ids = if i == j { vec![i] } else { vec![i, j] };
                problem.add_term(signed_coefficient(&mut rng), ids);
            }
        }
    }

    problem
}

fn signed_coefficient<R: Rng>(rng: &mut R) -> f64 {
    let c: f64 = rng.gen_range(-1000.0..0.0);
    if rng.gen_bool(0.5) { c } else { -c }
}
