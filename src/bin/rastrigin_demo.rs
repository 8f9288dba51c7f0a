use std::{fs, path::PathBuf};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use swarm_solver::prelude::*;

/// Maximizes the negated Rastrigin function and writes the configuration and
/// results to an output directory (first CLI argument, default
/// `pso_results/rastrigin_demo`).
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let config = SwarmConfig {
        dimensions: 2,
        num_particles: 100,
        max_iterations: 500,
        w: 0.7,
        c1: 1.5,
        c2: 1.5,
        neighborhood_size: 3,
        position_bounds: (-5.12, 5.12),
        velocity_bounds: (-0.5, 0.5),
        noise_std_dev: 0.05,
        dt: 1.0,
    };

    let mut pso = LocalBestPso::new(config, RastriginMaximization, 2024)?;
    let (best_position, best_score) = pso.optimize();
    let best_position = best_position.context("no iterations were run")?;

    let output_dir: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "pso_results/rastrigin_demo".into())
        .into();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    pso.save_parameters(output_dir.join("parameters.json"))?;
    let results = format!(
        "--- Optimization Results ---\nBest Position: {:?}\nBest Score: {}\n",
        best_position.as_slice(),
        best_score
    );
    fs::write(output_dir.join("results.txt"), results)?;

    println!("Overall best position: {:?}", best_position.as_slice());
    println!("Overall best score: {best_score}");
    println!("Results saved to: {}", output_dir.display());
    Ok(())
}
