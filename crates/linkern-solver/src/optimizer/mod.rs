//! The sweep loop that drives Lin-Kernighan steps to a local optimum.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use linkern_core::{DistanceOracle, LinKernError, Result, Tour};
use tracing::{debug, info, trace, warn};

use crate::heuristic::LinKernighanStep;
use crate::scope::SolverScope;
use crate::statistics::StatisticsCollector;
use crate::termination::{NeverTerminate, Termination};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// A full sweep found nothing shorter.
    Converged,
    /// The termination fired first; the tour is the last one committed.
    Terminated,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Converged => write!(f, "converged"),
            SolveStatus::Terminated => write!(f, "terminated"),
        }
    }
}

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct Solution {
    pub tour: Tour,
    pub length: f64,
    pub initial_length: f64,
    /// Completed sweeps.
    pub sweeps: u64,
    /// Adopted improvements.
    pub improvements: u64,
    pub status: SolveStatus,
    pub duration: Duration,
}

impl Solution {
    /// True if the run stopped at a local optimum.
    pub fn is_converged(&self) -> bool {
        self.status == SolveStatus::Converged
    }

    /// `initial_length - length`, never negative.
    pub fn improvement(&self) -> f64 {
        self.initial_length - self.length
    }
}

/// Lin-Kernighan local search over a full tour.
///
/// Each sweep tries every start position in increasing order. A candidate is
/// adopted only if it is a valid permutation and strictly shorter than the
/// current tour, so length never increases. The run converges when a sweep
/// leaves the length unchanged.
///
/// # Examples
///
/// ```
/// use linkern_core::{DistanceMatrix, Tour};
/// use linkern_solver::{Optimizer, SolveStatus};
///
/// let square = DistanceMatrix::euclidean(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let solution = Optimizer::new(&square).optimize(Tour::new(vec![0, 2, 1, 3])).unwrap();
///
/// assert_eq!(solution.status, SolveStatus::Converged);
/// assert!((solution.length - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct Optimizer<'a, O: DistanceOracle + ?Sized, T = NeverTerminate> {
    oracle: &'a O,
    step: LinKernighanStep<'a, O>,
    termination: T,
    statistics: Option<Arc<StatisticsCollector>>,
}

impl<'a, O: DistanceOracle + ?Sized> Optimizer<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self {
            oracle,
            step: LinKernighanStep::new(oracle),
            termination: NeverTerminate,
            statistics: None,
        }
    }
}

impl<'a, O: DistanceOracle + ?Sized, T: Termination> Optimizer<'a, O, T> {
    /// Replaces the termination.
    pub fn with_termination<T2: Termination>(self, termination: T2) -> Optimizer<'a, O, T2> {
        Optimizer {
            oracle: self.oracle,
            step: self.step,
            termination,
            statistics: self.statistics,
        }
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.step = self.step.with_max_depth(max_depth);
        self
    }

    pub fn with_predecessor_retry(mut self, enabled: bool) -> Self {
        self.step = self.step.with_predecessor_retry(enabled);
        self
    }

    pub fn with_statistics(mut self, collector: Arc<StatisticsCollector>) -> Self {
        self.statistics = Some(collector);
        self
    }

    pub fn termination(&self) -> &T {
        &self.termination
    }

    /// Optimizes `tour` until convergence or termination.
    ///
    /// # Errors
    ///
    /// Fails if the oracle covers fewer than 3 nodes or `tour` is not a
    /// permutation of the oracle's nodes.
    pub fn optimize(&self, tour: Tour) -> Result<Solution> {
        let n = self.oracle.node_count();
        if n < 3 {
            return Err(LinKernError::TooFewNodes { count: n });
        }
        let tour = Tour::validated(tour.into_nodes(), n)?;

        let started = Instant::now();
        let initial_length = tour.length(self.oracle);
        info!(
            event = "solve_start",
            node_count = n,
            initial_length = initial_length,
        );

        let mut scope = SolverScope::new(tour, initial_length);
        if let Some(stats) = &self.statistics {
            scope = scope.with_statistics(Arc::clone(stats));
        }
        scope.start_solving();

        let status = loop {
            if self.termination.is_terminated(&scope) {
                break SolveStatus::Terminated;
            }
            let before = scope.current_length();

            if !self.sweep(&mut scope, n) {
                break SolveStatus::Terminated;
            }

            let sweep = scope.increment_sweep_count();
            debug!(
                event = "sweep_end",
                sweep = sweep,
                length = scope.current_length(),
                improvements = scope.improvement_count(),
            );

            if scope.current_length() >= before {
                break SolveStatus::Converged;
            }
        };

        let duration = started.elapsed();
        let length = scope.current_length();
        let sweeps = scope.sweep_count();
        let improvements = scope.improvement_count();
        info!(
            event = "solve_end",
            length = length,
            sweeps = sweeps,
            improvements = improvements,
            duration_ms = duration.as_millis() as u64,
            status = %status,
        );

        Ok(Solution {
            tour: scope.into_tour(),
            length,
            initial_length,
            sweeps,
            improvements,
            status,
            duration,
        })
    }

    /// One pass over every start position. Returns false if interrupted.
    fn sweep(&self, scope: &mut SolverScope, n: usize) -> bool {
        for t1 in 0..n {
            if self.termination.is_terminated(scope) {
                return false;
            }
            scope.record_attempt();

            let Some(found) = self.step.improve(scope.tour(), t1) else {
                continue;
            };

            if !found.tour.is_valid_permutation(n) {
                scope.record_rejection();
                warn!(
                    event = "candidate_rejected",
                    t1 = t1,
                    reason = "not a permutation",
                );
                continue;
            }
            let length = found.tour.length(self.oracle);
            if length >= scope.current_length() {
                scope.record_rejection();
                debug!(
                    event = "candidate_rejected",
                    t1 = t1,
                    reason = "not shorter",
                    length = length,
                );
                continue;
            }

            trace!(
                event = "improvement",
                t1 = t1,
                direction = %found.direction,
                gain = found.gain,
                depth = found.depth,
                length = length,
            );
            scope.adopt(found.tour, length);
        }
        true
    }
}

#[cfg(test)]
mod tests;
