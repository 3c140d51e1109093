//! Rebuilding a tour from its edge set after an exchange.

use linkern_core::{Edge, Tour};
use smallvec::SmallVec;

/// Undirected adjacency lists over node ids.
///
/// Every node of a valid tour has exactly two neighbors, so the lists stay
/// inline for well-formed exchanges.
#[derive(Debug, Clone)]
pub(crate) struct EdgeBag {
    adjacency: Vec<SmallVec<[usize; 2]>>,
}

impl EdgeBag {
    pub fn from_tour(tour: &Tour) -> Self {
        let mut adjacency = vec![SmallVec::new(); tour.len()];
        for edge in tour.edges() {
            adjacency[edge.low()].push(edge.high());
            adjacency[edge.high()].push(edge.low());
        }
        Self { adjacency }
    }

    /// Removes one occurrence of `edge`. Returns false if it was not present.
    pub fn remove(&mut self, edge: Edge) -> bool {
        let (a, b) = (edge.low(), edge.high());
        if b >= self.adjacency.len() {
            return false;
        }
        let Some(i) = self.adjacency[a].iter().position(|&x| x == b) else {
            return false;
        };
        let Some(j) = self.adjacency[b].iter().position(|&x| x == a) else {
            return false;
        };
        self.adjacency[a].remove(i);
        self.adjacency[b].remove(j);
        true
    }

    /// Adds `edge`. Loops and out-of-range nodes are refused.
    pub fn insert(&mut self, edge: Edge) -> bool {
        if edge.is_loop() || edge.high() >= self.adjacency.len() {
            return false;
        }
        self.adjacency[edge.low()].push(edge.high());
        self.adjacency[edge.high()].push(edge.low());
        true
    }

    /// Walks the bag from `start` back into a node sequence.
    ///
    /// Returns `None` unless every node has degree two and the walk visits all
    /// nodes in one cycle.
    pub fn into_tour(self, start: usize) -> Option<Tour> {
        let n = self.adjacency.len();
        if start >= n || self.adjacency.iter().any(|adj| adj.len() != 2) {
            return None;
        }

        let mut visited = vec![false; n];
        let mut nodes = Vec::with_capacity(n);
        let mut previous = usize::MAX;
        let mut current = start;

        while !visited[current] {
            visited[current] = true;
            nodes.push(current);
            let adj = &self.adjacency[current];
            let next = if adj[0] != previous { adj[0] } else { adj[1] };
            previous = current;
            current = next;
        }

        (nodes.len() == n && current == start).then(|| Tour::new(nodes))
    }
}

/// Applies an exchange to `tour`: removes every edge of `removed`, adds every
/// edge of `added`, and walks the result starting from the tour's first node.
///
/// Returns `None` when a removed edge is not in the tour, an added edge is a
/// loop, or the result is not a single Hamiltonian cycle.
pub(crate) fn apply_exchange(tour: &Tour, removed: &[Edge], added: &[Edge]) -> Option<Tour> {
    if tour.is_empty() {
        return None;
    }
    let mut bag = EdgeBag::from_tour(tour);
    for &edge in removed {
        if !bag.remove(edge) {
            return None;
        }
    }
    for &edge in added {
        if !bag.insert(edge) {
            return None;
        }
    }
    bag.into_tour(tour.node_at(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_without_changes() {
        let tour = Tour::new(vec![3, 0, 4, 1, 2]);
        let rebuilt = apply_exchange(&tour, &[], &[]).unwrap();
        assert_eq!(rebuilt.node_at(0), 3);
        assert_eq!(rebuilt.edge_set(), tour.edge_set());
    }

    #[test]
    fn test_two_opt_exchange() {
        // 0-1-2-3 with crossing fixed: drop (0,1) and (2,3), add (0,2) and (1,3).
        let tour = Tour::identity(4);
        let rebuilt = apply_exchange(
            &tour,
            &[Edge::new(0, 1), Edge::new(2, 3)],
            &[Edge::new(0, 2), Edge::new(1, 3)],
        )
        .unwrap();
        assert!(rebuilt.is_valid_permutation(4));
        assert!(rebuilt.edge_set().contains(&Edge::new(0, 2)));
        assert!(!rebuilt.edge_set().contains(&Edge::new(0, 1)));
    }

    #[test]
    fn test_split_into_two_cycles_is_rejected() {
        // Leaves the cycles 0-4-5 and 1-2-3.
        let tour = Tour::identity(6);
        let result = apply_exchange(
            &tour,
            &[Edge::new(0, 1), Edge::new(3, 4)],
            &[Edge::new(0, 4), Edge::new(1, 3)],
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_edge_is_rejected() {
        let tour = Tour::identity(5);
        assert!(apply_exchange(&tour, &[Edge::new(0, 2)], &[Edge::new(0, 1)]).is_none());
    }

    #[test]
    fn test_loop_is_rejected() {
        let tour = Tour::identity(5);
        assert!(apply_exchange(&tour, &[Edge::new(0, 1)], &[Edge::new(1, 1)]).is_none());
    }

    #[test]
    fn test_degree_violation_is_rejected() {
        let tour = Tour::identity(5);
        assert!(apply_exchange(&tour, &[], &[Edge::new(0, 2)]).is_none());
    }
}
