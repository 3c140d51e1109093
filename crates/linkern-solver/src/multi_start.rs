//! Independent optimizations from several nearest-neighbor starts.
//!
//! Every run owns its own tour and only reads the shared oracle, so runs are
//! spread over a rayon pool without coordination.

use linkern_config::{SearchConfig, ThreadCount};
use linkern_core::{DistanceOracle, LinKernError, Result};
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::info;

use crate::construction::nearest_neighbor_tour;
use crate::optimizer::{Optimizer, Solution};
use crate::termination::ConfiguredTermination;

/// Summary of one run inside a multi-start.
#[derive(Debug, Clone, PartialEq)]
pub struct StartSummary {
    /// Node the nearest-neighbor construction began at.
    pub start_node: usize,
    pub initial_length: f64,
    pub length: f64,
}

/// Outcome of a multi-start: the shortest run plus every run's summary.
#[derive(Debug, Clone)]
pub struct MultiStartSolution {
    pub best: Solution,
    /// Index into `runs` of the winner.
    pub best_index: usize,
    pub runs: Vec<StartSummary>,
}

/// Runs several optimizations in parallel and keeps the shortest.
///
/// Start nodes are distinct and drawn from a seeded generator when a seed is
/// set. Ties in final length go to the earliest run.
///
/// # Examples
///
/// ```
/// use linkern_core::DistanceMatrix;
/// use linkern_solver::MultiStartSolver;
///
/// let points: Vec<(f64, f64)> = (0..12)
///     .map(|i| {
///         let angle = i as f64 * std::f64::consts::TAU / 12.0;
///         (angle.cos(), angle.sin())
///     })
///     .collect();
/// let m = DistanceMatrix::euclidean(&points).unwrap();
///
/// let result = MultiStartSolver::new(&m).with_starts(3).with_seed(1).solve().unwrap();
/// assert_eq!(result.runs.len(), 3);
/// assert!(result.best.tour.is_valid_permutation(12));
/// ```
#[derive(Debug)]
pub struct MultiStartSolver<'a, O: DistanceOracle + ?Sized> {
    oracle: &'a O,
    starts: usize,
    thread_count: ThreadCount,
    seed: Option<u64>,
    search: SearchConfig,
    termination: ConfiguredTermination,
}

impl<'a, O: DistanceOracle + ?Sized> MultiStartSolver<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self {
            oracle,
            starts: 1,
            thread_count: ThreadCount::default(),
            seed: None,
            search: SearchConfig::default(),
            termination: ConfiguredTermination::default(),
        }
    }

    /// Number of runs; capped at the node count.
    pub fn with_starts(mut self, starts: usize) -> Self {
        self.starts = starts;
        self
    }

    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Termination applied to every run; clones share any external flag.
    pub fn with_termination(mut self, termination: ConfiguredTermination) -> Self {
        self.termination = termination;
        self
    }

    /// Executes all runs.
    ///
    /// # Errors
    ///
    /// Fails if the oracle covers fewer than 3 nodes, no start is requested,
    /// or the worker pool cannot be created.
    pub fn solve(&self) -> Result<MultiStartSolution> {
        let n = self.oracle.node_count();
        if n < 3 {
            return Err(LinKernError::TooFewNodes { count: n });
        }
        if self.starts == 0 {
            return Err(LinKernError::InvalidState(
                "multi-start needs at least one start".to_string(),
            ));
        }

        let starts = self.starts.min(n);
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let start_nodes = index::sample(&mut rng, n, starts).into_vec();
        let threads = self.thread_count.resolve(starts);

        info!(
            event = "multi_start_start",
            starts = starts,
            threads = threads,
            node_count = n,
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| LinKernError::InvalidState(format!("thread pool: {e}")))?;

        let solutions: Vec<Solution> = pool.install(|| {
            start_nodes
                .par_iter()
                .map(|&start| self.run_from(start))
                .collect::<Result<Vec<_>>>()
        })?;

        let runs: Vec<StartSummary> = start_nodes
            .iter()
            .zip(&solutions)
            .map(|(&start_node, solution)| StartSummary {
                start_node,
                initial_length: solution.initial_length,
                length: solution.length,
            })
            .collect();

        let mut best_index = 0;
        for (i, solution) in solutions.iter().enumerate().skip(1) {
            if solution.length < solutions[best_index].length {
                best_index = i;
            }
        }
        let best = solutions
            .into_iter()
            .nth(best_index)
            .ok_or_else(|| LinKernError::InvalidState("no multi-start runs".to_string()))?;

        info!(
            event = "multi_start_end",
            best_length = best.length,
            best_start = runs[best_index].start_node,
            starts = starts,
        );

        Ok(MultiStartSolution {
            best,
            best_index,
            runs,
        })
    }

    fn run_from(&self, start: usize) -> Result<Solution> {
        let tour = nearest_neighbor_tour(self.oracle, start)?;
        Optimizer::new(self.oracle)
            .with_max_depth(self.search.max_depth)
            .with_predecessor_retry(self.search.try_predecessor)
            .with_termination(self.termination.clone())
            .optimize(tour)
    }
}
