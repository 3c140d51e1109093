//! The alternating t-chain of one improvement attempt.
//!
//! A chain `t1, t2, t3, ...` holds tour *positions*. Consecutive pairs
//! starting at an odd index, `(t1, t2), (t3, t4), ...`, are removed edges
//! (the X set); pairs starting at an even index, `(t2, t3), (t4, t5), ...`,
//! are added edges (the Y set). Closing a chain of even length `k` adds the
//! edge `(t_k, t1)`.

use linkern_core::{Edge, Tour};
use smallvec::SmallVec;

/// Removed and added node-space edges of a closed chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Exchange {
    pub removed: SmallVec<[Edge; 8]>,
    pub added: SmallVec<[Edge; 8]>,
}

impl Exchange {
    /// Builds the exchange that closes `ts` back to its first element.
    ///
    /// `ts` must have even length.
    pub fn closing(ts: &[usize], tour: &Tour) -> Self {
        debug_assert!(ts.len() >= 2 && ts.len() % 2 == 0);
        let edge = |a: usize, b: usize| Edge::new(tour.node_at(a), tour.node_at(b));

        let removed = ts.chunks_exact(2).map(|p| edge(p[0], p[1])).collect();
        let mut added: SmallVec<[Edge; 8]> =
            ts[1..].chunks_exact(2).map(|p| edge(p[0], p[1])).collect();
        added.push(edge(ts[ts.len() - 1], ts[0]));

        Self { removed, added }
    }
}

/// Growing sequence of tour positions `t1, t2, ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TChain {
    t: Vec<usize>,
}

impl TChain {
    pub fn new(t1: usize, t2: usize, t3: usize) -> Self {
        Self { t: vec![t1, t2, t3] }
    }

    /// Number of t's in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    #[inline]
    pub fn first(&self) -> usize {
        self.t[0]
    }

    #[inline]
    pub fn last(&self) -> usize {
        self.t[self.t.len() - 1]
    }

    pub fn push(&mut self, position: usize) {
        self.t.push(position);
    }

    /// Keeps `t1..=t_len`.
    pub fn truncate(&mut self, len: usize) {
        self.t.truncate(len);
    }

    /// Number of removed edges once the next t is appended.
    #[inline]
    pub fn removed_after_extension(&self) -> usize {
        (self.t.len() + 1) / 2
    }

    /// True if `(a, b)` appears as any consecutive pair, removed or added.
    pub fn contains_link(&self, a: usize, b: usize) -> bool {
        self.t
            .windows(2)
            .any(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
    }

    /// True if `(a, b)` is one of the removed pairs.
    pub fn is_removed(&self, a: usize, b: usize) -> bool {
        self.t
            .chunks_exact(2)
            .any(|p| (p[0] == a && p[1] == b) || (p[0] == b && p[1] == a))
    }

    /// True if the tour edge `(a, b)` is still available for removal.
    #[inline]
    pub fn is_open(&self, a: usize, b: usize) -> bool {
        a != b && !self.is_removed(a, b)
    }

    /// The exchange that closes the chain with `extra` appended.
    pub fn closing_exchange_with(&self, extra: usize, tour: &Tour) -> Exchange {
        let mut ts: SmallVec<[usize; 16]> = SmallVec::from_slice(&self.t);
        ts.push(extra);
        Exchange::closing(&ts, tour)
    }

    /// The exchange that closes the chain as it stands.
    pub fn closing_exchange(&self, tour: &Tour) -> Exchange {
        Exchange::closing(&self.t, tour)
    }
}
