//! Undirected tour edges.

use std::fmt;

/// An undirected edge between two nodes.
///
/// The endpoints are normalized on construction so that `low <= high`.
/// Equality, hashing and ordering all operate on the normalized pair,
/// ordering lexicographically by `(low, high)`.
///
/// # Examples
///
/// ```
/// use linkern_core::Edge;
///
/// let e = Edge::new(7, 3);
/// assert_eq!(e.low(), 3);
/// assert_eq!(e.high(), 7);
/// assert_eq!(e, Edge::new(3, 7));
/// assert!(Edge::new(1, 2) < Edge::new(1, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    low: usize,
    high: usize,
}

impl Edge {
    /// Creates an edge from two endpoints given in any order.
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Returns the smaller endpoint.
    #[inline]
    pub const fn low(&self) -> usize {
        self.low
    }

    /// Returns the larger endpoint.
    #[inline]
    pub const fn high(&self) -> usize {
        self.high
    }

    /// Returns true if `node` is one of the endpoints.
    #[inline]
    pub const fn contains(&self, node: usize) -> bool {
        self.low == node || self.high == node
    }

    /// Returns the endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    #[inline]
    pub const fn other(&self, node: usize) -> Option<usize> {
        if self.low == node {
            Some(self.high)
        } else if self.high == node {
            Some(self.low)
        } else {
            None
        }
    }

    /// Returns true for a self-loop.
    #[inline]
    pub const fn is_loop(&self) -> bool {
        self.low == self.high
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Edge::new(a, b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use std::collections::BTreeSet;

    #[test]
    fn test_normalizes_endpoints() {
        let e = Edge::new(9, 4);
        assert_eq!(e.low(), 4);
        assert_eq!(e.high(), 9);
    }

    #[test]
    fn test_equality_is_order_independent() {
        for a in 0..6 {
            for b in 0..6 {
                assert_eq!(Edge::new(a, b), Edge::new(b, a));
                assert_eq!(Edge::new(a, b).cmp(&Edge::new(b, a)), Ordering::Equal);
            }
        }
    }

    #[test]
    fn test_absent_comparand_is_not_equal() {
        let absent: Option<Edge> = None;
        assert_ne!(Some(Edge::new(1, 2)), absent);
    }

    #[test]
    fn test_orders_by_low_then_high() {
        assert!(Edge::new(1, 2) < Edge::new(1, 3));
        assert!(Edge::new(1, 3) < Edge::new(2, 3));
        assert!(Edge::new(3, 1) < Edge::new(2, 3));
        assert_eq!(Edge::new(2, 1).cmp(&Edge::new(1, 2)), Ordering::Equal);
    }

    #[test]
    fn test_set_deduplicates_reversed_pairs() {
        let set: BTreeSet<Edge> = [(0, 1), (1, 0), (2, 1), (1, 2)]
            .into_iter()
            .map(Edge::from)
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some(&Edge::new(0, 1)));
    }

    #[test]
    fn test_other_endpoint() {
        let e = Edge::new(5, 2);
        assert_eq!(e.other(2), Some(5));
        assert_eq!(e.other(5), Some(2));
        assert_eq!(e.other(3), None);
        assert!(e.contains(5));
        assert!(!e.is_loop());
        assert!(Edge::new(4, 4).is_loop());
    }

    #[test]
    fn test_display() {
        assert_eq!(Edge::new(8, 1).to_string(), "(1, 8)");
    }
}
