//! Shared test fixtures for linkern crates.
//!
//! - [`instances`] - small hand-checked point sets and seeded random instances
//! - [`oracle`] - a distance oracle wrapper that checks symmetry on every probe
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! linkern-test = { workspace = true }
//! ```
//!
//! ```
//! use linkern_test::{crossing_pentagon, CROSSING_PENTAGON_TOUR};
//!
//! let m = crossing_pentagon();
//! assert_eq!(CROSSING_PENTAGON_TOUR.len(), 5);
//! ```

pub mod instances;
pub mod oracle;

pub use instances::{
    crossing_pentagon, pentagon_points, random_euclidean, random_points, random_tour,
    square_points, triangle, unit_square, CROSSING_PENTAGON_TOUR, PENTAGON_HULL_LENGTH,
};
pub use oracle::SymmetryCheckingOracle;
