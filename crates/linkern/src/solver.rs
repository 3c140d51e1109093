//! Solver entry points that hide the matrix and builder wiring.

use linkern_config::SolverConfig;
use linkern_core::{DistanceMatrix, Result, Tour};
use linkern_solver::{Optimizer, Solution, SolverBuilder};
use tracing::debug;

/// Reorders `points` into a short closed tour under `distance`.
///
/// The distance is evaluated once per unordered pair and mirrored, so an
/// asymmetric function is read through its upper triangle. The search starts
/// from the input order. Fewer than 3 points come back unchanged.
///
/// # Errors
///
/// Fails when `distance` returns a negative or non-finite value.
///
/// # Examples
///
/// ```
/// let points = [(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)];
/// let tour = linkern::solve_points(&points, |a: &(f64, f64), b: &(f64, f64)| {
///     ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
/// })
/// .unwrap();
///
/// assert_eq!(tour.len(), 4);
/// assert_eq!(tour[0], (0.0, 0.0));
/// ```
pub fn solve_points<T, F>(points: &[T], distance: F) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> f64,
{
    if points.len() < 3 {
        return Ok(points.to_vec());
    }

    let matrix = DistanceMatrix::from_points(points, distance)?;
    let solution = Optimizer::new(&matrix).optimize(Tour::identity(points.len()))?;
    debug!(
        event = "points_solved",
        node_count = points.len(),
        length = solution.length,
    );

    Ok(solution
        .tour
        .nodes()
        .iter()
        .map(|&node| points[node].clone())
        .collect())
}

/// Runs the configured construction and optimization over `matrix`.
///
/// With the `console` feature the console subscriber is installed first.
pub fn run_solver(config: &SolverConfig, matrix: &DistanceMatrix) -> Result<Solution> {
    #[cfg(feature = "console")]
    linkern_console::init();

    SolverBuilder::new(config.clone()).solve(matrix)
}
