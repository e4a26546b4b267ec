//! Integration tests for the demo fixtures.
//!
//! These tests verify that the demo problems and solvers drive the
//! experiment engine end to end over the mock workspace.

use std::sync::Arc;

use alsvid_demos::{demo_problems, demo_solvers, pticm_params, tabu_params};
use alsvid_exp::{Experiment, StatusPoller, SummaryRenderer};
use alsvid_hal::{MockWorkspace, Workspace};
use alsvid_qio::{MemoryStore, ProblemLibrary, ProblemStore};

/// Every demo solver family targets a distinct 1QBit backend.
#[test]
fn test_demo_solver_targets() {
    let workspace: Arc<dyn Workspace> = Arc::new(MockWorkspace::new());
    let solvers = demo_solvers(&workspace);

    let targets: Vec<&str> = solvers.iter().map(|s| s.target()).collect();
    assert_eq!(
        targets,
        vec!["1qbit.tabu", "1qbit.pticm", "1qbit.pathrelinking"]
    );
}

/// Demo parameter sets carry the keys the corresponding solvers accept.
#[test]
fn test_demo_parameter_shapes() {
    let tabu = tabu_params();
    assert!(tabu.get("tabu_tenure").is_some());
    assert!(tabu.get("timeout").is_some());

    let pticm = pticm_params();
    assert!(pticm.get("num_replicas").is_some());
    assert_eq!(pticm["goal"], "OPTIMIZE");
}

/// Generated problems land in the store under their default names.
#[tokio::test]
async fn test_demo_problems_upload_into_the_store() {
    let library = ProblemLibrary::new(MemoryStore::new());
    let problems = demo_problems(&library, &[2, 3]).await.unwrap();

    assert_eq!(problems.len(), 2);
    assert_eq!(problems[0].name, "random_qubo_2");
    assert!(library.store().exists("random_qubo_3").await.unwrap());
}

/// The demo fixtures run the full pipeline without a remote service.
#[tokio::test]
async fn test_demo_batch_runs_end_to_end() {
    let library = ProblemLibrary::new(MemoryStore::new());
    let problems = demo_problems(&library, &[2]).await.unwrap();

    let mock = Arc::new(MockWorkspace::new());
    let workspace: Arc<dyn Workspace> = mock.clone();

    let experiment = Experiment::new(demo_solvers(&workspace), problems);
    let ledger = experiment.submit().await.unwrap();
    assert_eq!(ledger.total_jobs(), 3);

    StatusPoller::new(Arc::clone(&workspace))
        .wait_until_completed(&ledger)
        .await;

    let csv = SummaryRenderer::new(workspace).render_csv(&ledger).await;
    // header plus one row per job
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains("Succeeded"));
}
