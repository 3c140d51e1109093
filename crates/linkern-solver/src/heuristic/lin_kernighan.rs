//! One Lin-Kernighan improvement attempt from a fixed start position.
//!
//! The search grows an alternating chain of removed and added edges. Removed
//! edges must keep the tour closable into a single cycle; added edges must
//! leave the running gain positive. The best closing point seen along the
//! chain is committed at the end, so the chain may wander through
//! non-improving prefixes before settling.

use std::fmt;

use linkern_core::{DistanceOracle, Tour};
use tracing::warn;

use super::chain::TChain;
use super::edge_bag::apply_exchange;

/// Which tour neighbor of `t1` the first removed edge goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `t2 = next(t1)`.
    Successor,
    /// `t2 = previous(t1)`.
    Predecessor,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Successor => write!(f, "successor"),
            Direction::Predecessor => write!(f, "predecessor"),
        }
    }
}

/// A committed exchange together with its bookkeeping.
#[derive(Debug, Clone)]
pub struct ImprovingMove {
    /// The rebuilt tour.
    pub tour: Tour,
    /// Predicted length reduction.
    pub gain: f64,
    /// Number of edges exchanged.
    pub depth: usize,
    /// Direction that produced the move.
    pub direction: Direction,
}

/// Positional view of a tour for distance lookups.
struct TourView<'t, O: ?Sized> {
    tour: &'t Tour,
    positions: Vec<usize>,
    oracle: &'t O,
}

impl<'t, O: DistanceOracle + ?Sized> TourView<'t, O> {
    fn new(tour: &'t Tour, oracle: &'t O) -> Self {
        Self {
            tour,
            positions: tour.positions(),
            oracle,
        }
    }

    /// Distance between the nodes at positions `p` and `q`.
    #[inline]
    fn d(&self, p: usize, q: usize) -> f64 {
        self.oracle.distance(self.tour.node_at(p), self.tour.node_at(q))
    }

    /// Position of the node closest to the one at `position`.
    ///
    /// Scans node ids in ascending order; the first strictly smaller distance
    /// wins ties.
    fn nearest_neighbor(&self, position: usize) -> Option<usize> {
        let from = self.tour.node_at(position);
        let mut best: Option<(usize, f64)> = None;
        for node in 0..self.tour.len() {
            if node == from {
                continue;
            }
            let d = self.oracle.distance(from, node);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((node, d));
            }
        }
        best.map(|(node, _)| self.positions[node])
    }
}

/// Searches for a single improving exchange.
///
/// # Examples
///
/// ```
/// use linkern_core::{DistanceMatrix, Tour};
/// use linkern_solver::LinKernighanStep;
///
/// // Unit square visited in crossing order.
/// let square = DistanceMatrix::euclidean(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let crossed = Tour::new(vec![0, 2, 1, 3]);
///
/// let step = LinKernighanStep::new(&square);
/// let found = step.improve(&crossed, 0).unwrap();
/// assert!(found.tour.length(&square) < crossed.length(&square));
/// ```
#[derive(Debug)]
pub struct LinKernighanStep<'a, O: DistanceOracle + ?Sized> {
    oracle: &'a O,
    max_depth: Option<usize>,
    try_predecessor: bool,
}

impl<'a, O: DistanceOracle + ?Sized> LinKernighanStep<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self {
            oracle,
            max_depth: None,
            try_predecessor: true,
        }
    }

    /// Caps the number of removed edges in one exchange.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables or disables the predecessor retry.
    pub fn with_predecessor_retry(mut self, enabled: bool) -> Self {
        self.try_predecessor = enabled;
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Tries the successor direction from `t1`, then the predecessor
    /// direction if the first produced nothing.
    ///
    /// Returns `None` when neither direction finds a positive-gain exchange.
    pub fn improve(&self, tour: &Tour, t1: usize) -> Option<ImprovingMove> {
        if tour.len() < 3 || t1 >= tour.len() {
            return None;
        }
        let view = TourView::new(tour, self.oracle);

        if let Some(found) = self.attempt(&view, t1, Direction::Successor) {
            return Some(found);
        }
        if self.try_predecessor {
            return self.attempt(&view, t1, Direction::Predecessor);
        }
        None
    }

    fn attempt(
        &self,
        view: &TourView<'_, O>,
        t1: usize,
        direction: Direction,
    ) -> Option<ImprovingMove> {
        let tour = view.tour;
        let t2 = match direction {
            Direction::Successor => tour.next_position(t1),
            Direction::Predecessor => tour.previous_position(t1),
        };
        let t3 = view.nearest_neighbor(t2)?;

        // g1 = |x1| - |y1| must be positive.
        if view.d(t2, t3) >= view.d(t1, t2) {
            return None;
        }

        let mut chain = TChain::new(t1, t2, t3);
        let mut gain = view.d(t1, t2) - view.d(t2, t3);
        let mut best_gain = 0.0;
        let mut best_len = 3;

        loop {
            if let Some(max) = self.max_depth {
                if chain.removed_after_extension() > max {
                    break;
                }
            }

            let Some(ti) = self.select_next_removal(tour, &chain) else {
                break;
            };
            let previous = chain.last();
            chain.push(ti);
            let gain_with_x = gain + view.d(previous, ti);

            let Some(next) = self.select_next_addition(view, &chain, gain_with_x) else {
                break;
            };

            gain = gain_with_x;
            let closed = gain - view.d(ti, chain.first());
            if closed > best_gain {
                best_gain = closed;
                best_len = chain.len();
            }

            chain.push(next);
            gain -= view.d(ti, next);
        }

        if best_gain <= 0.0 {
            return None;
        }

        chain.truncate(best_len);
        let exchange = chain.closing_exchange(tour);
        let Some(new_tour) = apply_exchange(tour, &exchange.removed, &exchange.added) else {
            warn!(
                event = "candidate_rejected",
                t1 = t1,
                direction = %direction,
                reason = "closing exchange does not form a tour",
            );
            return None;
        };

        Some(ImprovingMove {
            tour: new_tour,
            gain: best_gain,
            depth: best_len / 2,
            direction,
        })
    }

    /// Picks the next removed endpoint among the tour neighbors of the chain's
    /// last position, predecessor first, keeping the first whose closed
    /// exchange is a single cycle.
    fn select_next_removal(&self, tour: &Tour, chain: &TChain) -> Option<usize> {
        let last = chain.last();
        [tour.previous_position(last), tour.next_position(last)]
            .into_iter()
            .find(|&candidate| {
                let exchange = chain.closing_exchange_with(candidate, tour);
                apply_exchange(tour, &exchange.removed, &exchange.added).is_some()
            })
    }

    /// Picks the closest position to join to the chain's last position.
    ///
    /// A candidate must not repeat a chain link, must keep the running gain
    /// positive, and must still have an unremoved tour edge to continue with.
    fn select_next_addition(
        &self,
        view: &TourView<'_, O>,
        chain: &TChain,
        gain_with_x: f64,
    ) -> Option<usize> {
        let tour = view.tour;
        let ti = chain.last();
        let mut best: Option<(usize, f64)> = None;

        for candidate in 0..tour.len() {
            if candidate == ti || chain.contains_link(candidate, ti) {
                continue;
            }
            let dy = view.d(ti, candidate);
            if gain_with_x - dy <= 0.0 {
                continue;
            }
            let continues = chain.is_open(candidate, tour.next_position(candidate))
                || chain.is_open(candidate, tour.previous_position(candidate));
            if !continues {
                continue;
            }
            if best.map_or(true, |(_, best_dy)| dy < best_dy) {
                best = Some((candidate, dy));
            }
        }

        best.map(|(candidate, _)| candidate)
    }
}

#[cfg(test)]
#[path = "lin_kernighan_tests.rs"]
mod tests;
