//! linkern solver engine
//!
//! This crate provides the Lin-Kernighan local search and everything that
//! drives it:
//! - Move search (`heuristic`): one variable-depth exchange from a start position
//! - The sweep loop (`optimizer`) that runs the search to a local optimum
//! - Termination conditions and solver scope
//! - Statistics collection
//! - Initial tour construction and parallel multi-start
//! - Configuration wiring (`builder`)

pub mod builder;
pub mod construction;
pub mod heuristic;
pub mod multi_start;
pub mod optimizer;
pub mod scope;
pub mod statistics;
pub mod termination;

pub use builder::SolverBuilder;
pub use construction::{nearest_neighbor_tour, Construction};
pub use heuristic::{Direction, ImprovingMove, LinKernighanStep};
pub use multi_start::{MultiStartSolution, MultiStartSolver, StartSummary};
pub use optimizer::{Optimizer, SolveStatus, Solution};
pub use scope::SolverScope;
pub use statistics::{LengthImprovement, SolverStatistics, StatisticsCollector};
pub use termination::{
    AndTermination, ConfiguredTermination, ExternalTermination, NeverTerminate, OrTermination,
    SweepCountTermination, Termination, TimeTermination,
};
