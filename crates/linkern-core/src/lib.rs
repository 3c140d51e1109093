//! linkern core - value types for tour optimization
//!
//! This crate provides the leaf abstractions used by the optimizer:
//! - [`Edge`] for order-normalized node pairs
//! - [`DistanceOracle`] and [`DistanceMatrix`] for pairwise distances
//! - [`Tour`] for closed permutations of nodes
//! - [`LinKernError`] for input-contract violations

pub mod distance;
pub mod edge;
pub mod error;
pub mod tour;

pub use distance::{DistanceMatrix, DistanceOracle};
pub use edge::Edge;
pub use error::{LinKernError, Result};
pub use tour::Tour;
