//! Simple Experiment Demo
//!
//! Runs the whole experiment pipeline against the in-memory mock
//! workspace: generates random QUBO problems, submits them to the three
//! 1QBit solver families, waits for completion, and prints the CSV
//! summary plus the flattened JSON reports.

use std::sync::Arc;

use anyhow::Result;

use alsvid_demos::{
    demo_problems, demo_solvers, print_header, print_info, print_result, print_section,
    print_success,
};
use alsvid_exp::{Experiment, ResultAggregator, StatusPoller, SummaryRenderer};
use alsvid_hal::{MockWorkspace, Workspace};
use alsvid_qio::{MemoryStore, ProblemLibrary};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = std::env::var("ALSVID_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    print_header("Simple Experiment Demo");

    print_section("Problems");
    let library = ProblemLibrary::new(MemoryStore::new());
    let problems = demo_problems(&library, &[4, 8, 16]).await?;
    for problem in &problems {
        print_result(&problem.name, &problem.uploaded_uri);
    }

    print_section("Solvers");
    let workspace: Arc<dyn Workspace> = Arc::new(MockWorkspace::new());
    let solvers = demo_solvers(&workspace);
    for solver in &solvers {
        print_result(solver.name(), solver.target());
    }

    print_section("Submission");
    let experiment = Experiment::new(solvers, problems).with_num_iterations(2);
    let ledger = experiment.submit().await?;
    print_result("Experiment", &ledger.experiment_id);
    print_result("Jobs submitted", ledger.total_jobs());

    print_section("Completion");
    let poller = StatusPoller::new(Arc::clone(&workspace));
    poller.wait_until_completed(&ledger).await;
    print_success("All jobs reached a terminal status");

    print_section("CSV Summary");
    let csv = SummaryRenderer::new(Arc::clone(&workspace))
        .render_csv(&ledger)
        .await;
    println!("{csv}");

    print_section("Job Reports");
    let reports = ResultAggregator::new(Arc::clone(&workspace))
        .flatten(&ledger)
        .await?;
    println!("{}", serde_json::to_string_pretty(&reports)?);

    println!();
    print_success(&format!("{} report(s) aggregated", reports.len()));
    print_info(
        "The mock workspace stands in for the remote annealing service; \
         plug in another Workspace implementation to run against live targets.",
    );
    Ok(())
}
