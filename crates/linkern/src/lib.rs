//! linkern - Lin-Kernighan tour optimization in Rust
//!
//! Hand the optimizer a distance matrix and a tour, get back a tour that no
//! single Lin-Kernighan exchange can shorten.
//!
//! # Example
//!
//! ```rust
//! use linkern::prelude::*;
//!
//! let m = DistanceMatrix::euclidean(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
//! let solution = Optimizer::new(&m).optimize(Tour::new(vec![0, 2, 1, 3])).unwrap();
//! assert_eq!(solution.length, 4.0);
//! ```

// Value types
pub use linkern_core::{DistanceMatrix, DistanceOracle, Edge, LinKernError, Result, Tour};

// Configuration
pub use linkern_config::{
    ConfigError, ConstructionType, MultiStartConfig, SearchConfig, SolverConfig,
    TerminationConfig, ThreadCount,
};

// Search and optimization
pub use linkern_solver::{
    nearest_neighbor_tour, Construction, Direction, ImprovingMove, LinKernighanStep,
    MultiStartSolution, MultiStartSolver, Optimizer, SolveStatus, Solution, SolverBuilder,
    SolverStatistics, StatisticsCollector,
};

/// Termination conditions.
pub mod termination {
    pub use linkern_solver::termination::*;
}

/// Console output, available with the `console` feature.
#[cfg(feature = "console")]
pub use linkern_console as console;

mod solver;
pub use solver::{run_solver, solve_points};

pub mod prelude {
    pub use super::{DistanceMatrix, DistanceOracle, Edge, Tour};
    pub use super::{Optimizer, SolveStatus, Solution, SolverBuilder, SolverConfig};
    pub use super::{run_solver, solve_points};
}
