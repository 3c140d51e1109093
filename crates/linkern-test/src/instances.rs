//! Point sets with known optimal tours, and seeded random instances.

use linkern_core::{DistanceMatrix, Tour};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Corners of the unit square in tour order.
pub fn square_points() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
}

/// Euclidean matrix over [`square_points`]. The identity tour is optimal with length 4.
pub fn unit_square() -> DistanceMatrix {
    euclidean(&square_points())
}

/// A convex pentagon listed in hull order.
pub fn pentagon_points() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (2.0, 5.0), (0.0, 3.0)]
}

/// Euclidean matrix over [`pentagon_points`].
pub fn crossing_pentagon() -> DistanceMatrix {
    euclidean(&pentagon_points())
}

/// A visiting order of the pentagon whose edges `0-2` and `1-3` cross.
pub const CROSSING_PENTAGON_TOUR: [usize; 5] = [0, 2, 1, 3, 4];

/// Length of the hull tour `0-1-2-3-4`: `4 + 3 + 2√2 + 2√2 + 3`.
pub const PENTAGON_HULL_LENGTH: f64 = 10.0 + 4.0 * std::f64::consts::SQRT_2;

/// A 3-4-5 right triangle.
pub fn triangle() -> DistanceMatrix {
    euclidean(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)])
}

/// `n` points uniform in `[0, 1000)²`, reproducible from `seed`.
pub fn random_points(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect()
}

/// Euclidean matrix over [`random_points`].
pub fn random_euclidean(n: usize, seed: u64) -> DistanceMatrix {
    euclidean(&random_points(n, seed))
}

/// A shuffled permutation of `[0, n)`, reproducible from `seed`.
pub fn random_tour(n: usize, seed: u64) -> Tour {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut nodes: Vec<usize> = (0..n).collect();
    nodes.shuffle(&mut rng);
    Tour::new(nodes)
}

fn euclidean(points: &[(f64, f64)]) -> DistanceMatrix {
    DistanceMatrix::euclidean(points).expect("fixture points produce a valid matrix")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pentagon_hull_length() {
        let m = crossing_pentagon();
        let hull = Tour::identity(5).length(&m);
        assert!((hull - PENTAGON_HULL_LENGTH).abs() < 1e-9);

        let crossing = Tour::new(CROSSING_PENTAGON_TOUR.to_vec()).length(&m);
        assert!(crossing > hull);
    }

    #[test]
    fn test_random_instances_are_reproducible() {
        assert_eq!(random_points(20, 7), random_points(20, 7));
        assert_ne!(random_points(20, 7), random_points(20, 8));
        assert!(random_tour(20, 3).is_valid_permutation(20));
        assert_eq!(random_tour(20, 3), random_tour(20, 3));
    }
}
