//! Closed tours over node ids.

use std::collections::BTreeSet;
use std::fmt;

use crate::distance::DistanceOracle;
use crate::edge::Edge;
use crate::error::{LinKernError, Result};

/// An ordered sequence of node ids, implicitly cyclic.
///
/// Position `len() - 1` connects back to position 0. A `Tour` built with
/// [`Tour::new`] is not checked; use [`Tour::validated`] or
/// [`Tour::is_valid_permutation`] where the permutation invariant matters.
///
/// # Examples
///
/// ```
/// use linkern_core::{DistanceMatrix, Tour};
///
/// let square = DistanceMatrix::euclidean(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
/// let tour = Tour::identity(4);
///
/// assert_eq!(tour.length(&square), 4.0);
/// assert_eq!(tour.position_of(2), Some(2));
/// assert!(tour.is_valid_permutation(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Wraps a node sequence without validation.
    pub fn new(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    /// Wraps a node sequence, rejecting anything that is not a permutation of `[0, n)`.
    pub fn validated(nodes: Vec<usize>, n: usize) -> Result<Self> {
        let tour = Self { nodes };
        if tour.len() != n {
            return Err(LinKernError::TourLengthMismatch {
                expected: n,
                actual: tour.len(),
            });
        }
        if !tour.is_valid_permutation(n) {
            return Err(LinKernError::InvalidTour);
        }
        Ok(tour)
    }

    /// The tour `[0, 1, ..., n - 1]`.
    pub fn identity(n: usize) -> Self {
        Self {
            nodes: (0..n).collect(),
        }
    }

    /// Number of positions in the tour.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node id at `position`.
    #[inline]
    pub fn node_at(&self, position: usize) -> usize {
        self.nodes[position]
    }

    /// The node sequence.
    #[inline]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Consumes the tour, returning the node sequence.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }

    /// Position following `position`, wrapping at the end.
    #[inline]
    pub fn next_position(&self, position: usize) -> usize {
        (position + 1) % self.nodes.len()
    }

    /// Position preceding `position`, wrapping at the start.
    #[inline]
    pub fn previous_position(&self, position: usize) -> usize {
        if position == 0 {
            self.nodes.len() - 1
        } else {
            position - 1
        }
    }

    /// Total closed length: sum of `d(tour[i], tour[(i + 1) mod N])`.
    pub fn length<O: DistanceOracle + ?Sized>(&self, oracle: &O) -> f64 {
        let n = self.nodes.len();
        (0..n)
            .map(|i| oracle.distance(self.nodes[i], self.nodes[(i + 1) % n]))
            .sum()
    }

    /// Returns true iff the tour holds exactly `n` distinct nodes, all in `[0, n)`.
    pub fn is_valid_permutation(&self, n: usize) -> bool {
        if self.nodes.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in &self.nodes {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }

    /// Position of `node` within the tour, or `None` if absent.
    pub fn position_of(&self, node: usize) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }

    /// Inverse index: `positions()[node]` is the position of `node`.
    ///
    /// Only meaningful on a valid permutation; out-of-range nodes are skipped.
    pub fn positions(&self) -> Vec<usize> {
        let mut positions = vec![usize::MAX; self.nodes.len()];
        for (position, &node) in self.nodes.iter().enumerate() {
            if let Some(slot) = positions.get_mut(node) {
                *slot = position;
            }
        }
        positions
    }

    /// Edges between consecutive positions, in tour order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.nodes.len();
        (0..n).map(move |i| Edge::new(self.nodes[i], self.nodes[(i + 1) % n]))
    }

    /// The set of edges formed by consecutive positions.
    pub fn edge_set(&self) -> BTreeSet<Edge> {
        self.edges().collect()
    }
}

impl From<Vec<usize>> for Tour {
    fn from(nodes: Vec<usize>) -> Self {
        Tour::new(nodes)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for node in &self.nodes {
            if !first {
                write!(f, " => ")?;
            }
            write!(f, "{node}")?;
            first = false;
        }
        Ok(())
    }
}
