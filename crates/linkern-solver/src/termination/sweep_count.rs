//! Sweep count termination.

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once a number of full sweeps have completed.
///
/// # Example
///
/// ```
/// use linkern_solver::termination::SweepCountTermination;
///
/// // At most 10 passes over all start positions
/// let term = SweepCountTermination::new(10);
/// ```
#[derive(Debug, Clone)]
pub struct SweepCountTermination {
    limit: u64,
}

impl SweepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for SweepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        solver_scope.sweep_count() >= self.limit
    }
}
