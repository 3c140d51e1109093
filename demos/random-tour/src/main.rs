//! Random tour demo for linkern
//!
//! Scatters seeded random points in a square, builds the Euclidean matrix and
//! runs the configured solver with console output.
//!
//! Run with: cargo run -p random-tour -- [node_count] [seed]
//! A `solver.toml` in the working directory overrides the defaults.

use linkern::{run_solver, DistanceMatrix, SolverConfig};
use owo_colors::OwoColorize;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DEFAULT_NODE_COUNT: usize = 200;
const DEFAULT_SEED: u64 = 42;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let node_count = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_NODE_COUNT,
    };
    let seed = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_SEED,
    };

    let config = SolverConfig::load("solver.toml").unwrap_or_default();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..node_count)
        .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();
    let matrix = DistanceMatrix::euclidean(&points)?;

    let solution = run_solver(&config, &matrix)?;

    println!(
        "{} {} nodes, length {:.3} -> {:.3} ({:.1}% shorter)",
        "▸".bright_green(),
        node_count.bright_yellow(),
        solution.initial_length,
        solution.length.bright_cyan(),
        100.0 * solution.improvement() / solution.initial_length.max(f64::MIN_POSITIVE),
    );
    println!(
        "{} {} after {} sweeps",
        "▸".bright_green(),
        solution.status.bright_white().bold(),
        solution.sweeps,
    );

    Ok(())
}
