//! Termination conditions for an optimization run.
//!
//! The optimizer polls its termination before every sweep and before every
//! start position, so a stop request takes effect within one attempt.

mod composite;
mod configured;
mod external;
mod sweep_count;
mod time;

use std::fmt::Debug;

use crate::scope::SolverScope;

pub use composite::{AndTermination, OrTermination};
pub use configured::ConfiguredTermination;
pub use external::ExternalTermination;
pub use sweep_count::SweepCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop optimizing.
pub trait Termination: Send + Debug {
    /// Returns true if optimizing should stop.
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool;
}

/// Never stops; the run ends only on convergence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverTerminate;

impl Termination for NeverTerminate {
    fn is_terminated(&self, _solver_scope: &SolverScope) -> bool {
        false
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        (**self).is_terminated(solver_scope)
    }
}
