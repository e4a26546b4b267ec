//! Alsvid Demo Suite
//!
//! Demonstrations of the Alsvid experiment engine running QUBO/Ising
//! batches end to end: random benchmark problems, the three 1QBit solver
//! families, submission, polling, and summaries.
//!
//! The demos run against [`MockWorkspace`](alsvid_hal::MockWorkspace), so
//! no remote service or credentials are needed. Swap in another
//! [`Workspace`](alsvid_hal::Workspace) implementation to drive the same
//! flow against a live service.

use std::sync::Arc;

use alsvid_hal::{Solver, SolverFactory, Workspace};
use alsvid_qio::{MemoryStore, ProblemHandle, ProblemLibrary, QioResult};
use console::style;
use serde_json::json;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Generate and upload one random QUBO per requested size.
pub async fn demo_problems(
    library: &ProblemLibrary<MemoryStore>,
    sizes: &[usize],
) -> QioResult<Vec<ProblemHandle>> {
    let mut handles = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let handle = library
            .generate_random_qubo_if_not_exists(size, None)
            .await?;
        handles.push(handle);
    }
    Ok(handles)
}

/// The three 1QBit solver families with the demo parameter sets.
pub fn demo_solvers(workspace: &Arc<dyn Workspace>) -> Vec<Arc<dyn Solver>> {
    vec![
        SolverFactory::tabu_search(tabu_params(), Arc::clone(workspace)),
        SolverFactory::pticm(pticm_params(), Arc::clone(workspace)),
        SolverFactory::path_relinking(path_relinking_params(), Arc::clone(workspace)),
    ]
}

/// Tabu search parameters. A short timeout keeps demo runs quick.
pub fn tabu_params() -> serde_json::Value {
    json!({
        "improvement_cutoff": "0",
        "improvement_tolerance": "1e-09",
        "seed": "0",
        "tabu_tenure": "0",
        "tabu_tenure_rand_max": "0",
        "timeout": "5",
    })
}

/// PTICM parameters.
pub fn pticm_params() -> serde_json::Value {
    json!({
        "auto_set_temperatures": true,
        "elite_threshold": 0.3,
        "frac_icm_thermal_layers": 0.5,
        "frac_sweeps_fixing": 0.15,
        "frac_sweeps_idle": 1.0,
        "frac_sweeps_stagnation": 1.0,
        "goal": "OPTIMIZE",
        "max_samples_per_layer": 10,
        "max_total_sweeps": 1000,
        "num_elite_temps": 4,
        "num_replicas": 2,
        "num_sweeps_per_run": 100,
        "scaling_type": "MEDIAN",
        "seed": 42,
        "var_fixing_type": "NO_FIXING",
    })
}

/// Path relinking parameters.
pub fn path_relinking_params() -> serde_json::Value {
    json!({
        "distance_scale": "0.33",
        "greedy_path_relinking": "false",
        "ref_set_count": "10",
        "seed": "0",
        "timeout": "5",
    })
}
