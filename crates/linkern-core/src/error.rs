//! Error types for linkern

use thiserror::Error;

/// Input-contract and invariant violations.
///
/// Search dead-ends are not errors; they surface as "no improvement".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LinKernError {
    /// Fewer nodes than a meaningful tour needs.
    #[error("At least 3 nodes are required, got {count}")]
    TooFewNodes { count: usize },

    /// A distance matrix row has the wrong length.
    #[error("Distance matrix is not square: {rows} rows but row {row} has {len} entries")]
    NotSquare { rows: usize, row: usize, len: usize },

    /// `d(a, b) != d(b, a)`.
    #[error("Distance matrix is not symmetric at ({a}, {b})")]
    Asymmetric { a: usize, b: usize },

    /// Negative, non-finite, or non-zero diagonal entry.
    #[error("Invalid distance {value} at ({a}, {b})")]
    InvalidDistance { a: usize, b: usize, value: f64 },

    /// Tour length does not match the node count of the oracle.
    #[error("Tour has {actual} nodes, expected {expected}")]
    TourLengthMismatch { expected: usize, actual: usize },

    /// Tour is not a permutation of `[0, N)`.
    #[error("Tour is not a permutation of the node set")]
    InvalidTour,

    /// Internal invariant broken (should not occur in normal operation).
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for linkern operations
pub type Result<T> = std::result::Result<T, LinKernError>;
