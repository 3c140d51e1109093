//! Tests for the optimizer loop.

use super::*;
use crate::termination::{ExternalTermination, SweepCountTermination};
use linkern_core::DistanceMatrix;
use linkern_test::{
    crossing_pentagon, random_euclidean, random_tour, triangle, unit_square,
    SymmetryCheckingOracle, CROSSING_PENTAGON_TOUR, PENTAGON_HULL_LENGTH,
};

#[test]
fn test_optimal_square_is_unchanged() {
    let m = unit_square();
    let solution = Optimizer::new(&m).optimize(Tour::identity(4)).unwrap();

    assert_eq!(solution.length, 4.0);
    assert_eq!(solution.tour, Tour::identity(4));
    assert_eq!(solution.status, SolveStatus::Converged);
    assert_eq!(solution.sweeps, 1);
    assert_eq!(solution.improvements, 0);
}

#[test]
fn test_pentagon_is_uncrossed() {
    let m = crossing_pentagon();
    let input = Tour::new(CROSSING_PENTAGON_TOUR.to_vec());
    let input_length = input.length(&m);

    let solution = Optimizer::new(&m).optimize(input).unwrap();

    assert!(solution.length < input_length);
    assert!((solution.length - PENTAGON_HULL_LENGTH).abs() < 1e-9);
    assert_eq!(solution.tour.edge_set(), Tour::identity(5).edge_set());
    assert!(solution.is_converged());
    assert!((solution.improvement() - (input_length - solution.length)).abs() < 1e-12);
}

#[test]
fn test_triangle_keeps_length() {
    let m = triangle();
    for nodes in [vec![0, 1, 2], vec![2, 1, 0], vec![1, 0, 2]] {
        let input = Tour::new(nodes);
        let input_length = input.length(&m);
        let solution = Optimizer::new(&m).optimize(input).unwrap();

        assert!(solution.tour.is_valid_permutation(3));
        assert!((solution.length - input_length).abs() < 1e-9);
        assert!(solution.length <= input_length);
    }
}

#[test]
fn test_rejects_too_few_nodes() {
    let m = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    let err = Optimizer::new(&m).optimize(Tour::identity(2)).unwrap_err();
    assert_eq!(err, LinKernError::TooFewNodes { count: 2 });
}

#[test]
fn test_rejects_invalid_tours() {
    let m = unit_square();
    let optimizer = Optimizer::new(&m);

    assert_eq!(
        optimizer.optimize(Tour::new(vec![0, 1, 2])).unwrap_err(),
        LinKernError::TourLengthMismatch {
            expected: 4,
            actual: 3
        }
    );
    assert_eq!(
        optimizer.optimize(Tour::new(vec![0, 1, 1, 3])).unwrap_err(),
        LinKernError::InvalidTour
    );
}

#[test]
fn test_random_instances_improve_monotonically() {
    for seed in 0..5 {
        let m = random_euclidean(40, seed);
        let input = random_tour(40, seed + 100);
        let input_length = input.length(&m);

        let solution = Optimizer::new(&m).optimize(input).unwrap();

        assert!(solution.tour.is_valid_permutation(40));
        assert!(solution.length <= input_length);
        assert!((solution.tour.length(&m) - solution.length).abs() < 1e-9);
        assert_eq!(solution.status, SolveStatus::Converged);
    }
}

#[test]
fn test_converged_output_is_fixed_point() {
    let m = random_euclidean(30, 11);
    let first = Optimizer::new(&m).optimize(random_tour(30, 12)).unwrap();
    let second = Optimizer::new(&m).optimize(first.tour.clone()).unwrap();

    assert_eq!(second.tour, first.tour);
    assert_eq!(second.length, first.length);
    assert_eq!(second.improvements, 0);
}

#[test]
fn test_sweep_limit_terminates() {
    let m = crossing_pentagon();
    let solution = Optimizer::new(&m)
        .with_termination(SweepCountTermination::new(1))
        .optimize(Tour::new(CROSSING_PENTAGON_TOUR.to_vec()))
        .unwrap();

    assert_eq!(solution.status, SolveStatus::Terminated);
    assert_eq!(solution.sweeps, 1);
    assert!(solution.length < solution.initial_length);
}

#[test]
fn test_external_termination_returns_input() {
    let m = crossing_pentagon();
    let external = ExternalTermination::new();
    external.terminate();

    let input = Tour::new(CROSSING_PENTAGON_TOUR.to_vec());
    let solution = Optimizer::new(&m)
        .with_termination(external)
        .optimize(input.clone())
        .unwrap();

    assert_eq!(solution.status, SolveStatus::Terminated);
    assert_eq!(solution.sweeps, 0);
    assert_eq!(solution.tour, input);
    assert_eq!(solution.length, solution.initial_length);
}

#[test]
fn test_depth_cap_of_one_finds_nothing() {
    let m = crossing_pentagon();
    let input = Tour::new(CROSSING_PENTAGON_TOUR.to_vec());
    let solution = Optimizer::new(&m)
        .with_max_depth(Some(1))
        .optimize(input.clone())
        .unwrap();

    assert_eq!(solution.tour, input);
    assert!(solution.is_converged());
}

#[test]
fn test_statistics_match_solution() {
    let m = random_euclidean(25, 3);
    let stats = Arc::new(StatisticsCollector::new());
    let solution = Optimizer::new(&m)
        .with_statistics(Arc::clone(&stats))
        .optimize(random_tour(25, 4))
        .unwrap();

    let snapshot = stats.snapshot();
    assert_eq!(snapshot.sweeps, solution.sweeps);
    assert_eq!(snapshot.improvements, solution.improvements);
    assert_eq!(snapshot.attempts, solution.sweeps * 25);
    if let Some(best) = snapshot.best_length() {
        assert_eq!(best, solution.length);
    }
    assert!(snapshot
        .history
        .windows(2)
        .all(|w| w[1].length < w[0].length));
}

#[test]
fn test_symmetric_probes_only() {
    let oracle = SymmetryCheckingOracle::new(random_euclidean(20, 5));
    let solution = Optimizer::new(&oracle)
        .optimize(random_tour(20, 6))
        .unwrap();

    assert!(solution.tour.is_valid_permutation(20));
    assert!(oracle.probes() > 0);
}

#[test]
fn test_without_predecessor_retry_still_valid() {
    let m = random_euclidean(30, 21);
    let input = random_tour(30, 22);
    let input_length = input.length(&m);
    let solution = Optimizer::new(&m)
        .with_predecessor_retry(false)
        .optimize(input)
        .unwrap();

    assert!(solution.tour.is_valid_permutation(30));
    assert!(solution.length <= input_length);
}
