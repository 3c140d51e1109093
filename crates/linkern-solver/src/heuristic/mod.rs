//! Lin-Kernighan move search.
//!
//! - `chain`: the alternating t-chain and the exchange it closes into
//! - `edge_bag`: rebuilding a tour from its edges after an exchange
//! - `lin_kernighan`: one improvement attempt from a start position

mod chain;
mod edge_bag;
mod lin_kernighan;

pub use lin_kernighan::{Direction, ImprovingMove, LinKernighanStep};
