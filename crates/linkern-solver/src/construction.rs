//! Initial tour construction.

use linkern_config::ConstructionType;
use linkern_core::{DistanceOracle, LinKernError, Result, Tour};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// How to build the tour the optimizer starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Construction {
    /// `[0, 1, ..., N-1]`.
    #[default]
    Identity,
    /// Greedy nearest unvisited node. A missing start is drawn at random.
    NearestNeighbor { start: Option<usize> },
}

impl From<ConstructionType> for Construction {
    fn from(kind: ConstructionType) -> Self {
        match kind {
            ConstructionType::Identity => Construction::Identity,
            ConstructionType::NearestNeighbor => Construction::NearestNeighbor { start: None },
        }
    }
}

impl Construction {
    /// Builds a tour over every node of `oracle`.
    ///
    /// `seed` fixes the random start node of a nearest-neighbor construction;
    /// without it the thread-local generator is used.
    pub fn build<O: DistanceOracle + ?Sized>(
        &self,
        oracle: &O,
        seed: Option<u64>,
    ) -> Result<Tour> {
        let n = oracle.node_count();
        match *self {
            Construction::Identity => Ok(Tour::identity(n)),
            Construction::NearestNeighbor { start: Some(start) } => {
                nearest_neighbor_tour(oracle, start)
            }
            Construction::NearestNeighbor { start: None } => {
                if n == 0 {
                    return Ok(Tour::identity(0));
                }
                let start = match seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed).random_range(0..n),
                    None => rand::rng().random_range(0..n),
                };
                nearest_neighbor_tour(oracle, start)
            }
        }
    }
}

/// Greedy tour: from `start`, repeatedly move to the closest unvisited node.
///
/// Ties go to the lowest node id.
///
/// # Examples
///
/// ```
/// use linkern_core::DistanceMatrix;
/// use linkern_solver::nearest_neighbor_tour;
///
/// let m = DistanceMatrix::euclidean(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
/// let tour = nearest_neighbor_tour(&m, 0).unwrap();
/// assert_eq!(tour.nodes(), &[0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor_tour<O>(oracle: &O, start: usize) -> Result<Tour>
where
    O: DistanceOracle + ?Sized,
{
    let n = oracle.node_count();
    if start >= n {
        return Err(LinKernError::InvalidState(format!(
            "start node {start} is outside 0..{n}"
        )));
    }

    let mut visited = vec![false; n];
    let mut nodes = Vec::with_capacity(n);
    let mut current = start;
    visited[current] = true;
    nodes.push(current);

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for (candidate, _) in visited.iter().enumerate().filter(|&(_, &seen)| !seen) {
            let d = oracle.distance(current, candidate);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((candidate, d));
            }
        }
        let Some((next, _)) = best else {
            break;
        };
        visited[next] = true;
        nodes.push(next);
        current = next;
    }

    debug!(event = "construction_end", start = start, node_count = n);
    Ok(Tour::new(nodes))
}
