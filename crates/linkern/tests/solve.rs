//! End-to-end checks through the public facade.

use linkern::prelude::*;
use linkern::termination::{ExternalTermination, SweepCountTermination};
use linkern::{ConstructionType, LinKernError};
use linkern_test::{
    crossing_pentagon, pentagon_points, random_euclidean, random_points, random_tour, triangle,
    unit_square, SymmetryCheckingOracle, CROSSING_PENTAGON_TOUR, PENTAGON_HULL_LENGTH,
};

fn euclid(a: &(f64, f64), b: &(f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

#[test]
fn crossed_square_becomes_perimeter() {
    let m = unit_square();
    let input = Tour::new(vec![0, 2, 1, 3]);
    assert!((input.length(&m) - (2.0 + 2.0 * std::f64::consts::SQRT_2)).abs() < 1e-12);

    let solution = Optimizer::new(&m).optimize(input).unwrap();
    assert_eq!(solution.length, 4.0);
    assert!(solution.tour.is_valid_permutation(4));
}

#[test]
fn pentagon_reaches_hull() {
    let m = crossing_pentagon();
    let solution = Optimizer::new(&m)
        .optimize(Tour::new(CROSSING_PENTAGON_TOUR.to_vec()))
        .unwrap();

    assert!((solution.length - PENTAGON_HULL_LENGTH).abs() < 1e-9);
    assert_eq!(solution.status, SolveStatus::Converged);
}

#[test]
fn triangle_is_already_optimal() {
    let m = triangle();
    let solution = Optimizer::new(&m).optimize(Tour::identity(3)).unwrap();
    assert_eq!(solution.length, 12.0);
}

#[test]
fn second_run_changes_nothing() {
    let m = random_euclidean(50, 31);
    let first = Optimizer::new(&m).optimize(random_tour(50, 32)).unwrap();
    let second = Optimizer::new(&m).optimize(first.tour.clone()).unwrap();

    assert_eq!(second.tour, first.tour);
    assert_eq!(second.improvements, 0);
}

#[test]
fn random_instances_stay_permutations_and_never_lengthen() {
    for seed in 10..16 {
        let m = random_euclidean(60, seed);
        let input = random_tour(60, seed * 7);
        let input_length = input.length(&m);

        let solution = Optimizer::new(&m).optimize(input).unwrap();
        assert!(solution.tour.is_valid_permutation(60));
        assert!(solution.length <= input_length);
        assert!((solution.tour.length(&m) - solution.length).abs() < 1e-6);
    }
}

#[test]
fn search_only_probes_symmetric_pairs() {
    let oracle = SymmetryCheckingOracle::new(random_euclidean(35, 40));
    let solution = Optimizer::new(&oracle)
        .optimize(random_tour(35, 41))
        .unwrap();
    assert!(solution.tour.is_valid_permutation(35));
    assert!(oracle.probes() > 0);
}

#[test]
fn termination_is_honored() {
    let m = random_euclidean(40, 50);
    let stop = ExternalTermination::new();
    stop.terminate();
    let input = random_tour(40, 51);

    let stopped = Optimizer::new(&m)
        .with_termination(stop)
        .optimize(input.clone())
        .unwrap();
    assert_eq!(stopped.status, SolveStatus::Terminated);
    assert_eq!(stopped.tour, input);

    let limited = Optimizer::new(&m)
        .with_termination(SweepCountTermination::new(1))
        .optimize(input)
        .unwrap();
    assert!(limited.sweeps <= 1);
}

fn closed_length(points: &[(f64, f64)]) -> f64 {
    (0..points.len())
        .map(|i| euclid(&points[i], &points[(i + 1) % points.len()]))
        .sum()
}

#[test]
fn solve_points_uncrosses_square() {
    let crossed = [(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)];
    let tour = solve_points(&crossed, euclid).unwrap();

    assert_eq!(tour[0], (0.0, 0.0));
    assert!((closed_length(&tour) - 4.0).abs() < 1e-9);
}

#[test]
fn solve_points_keeps_every_point() {
    let points = pentagon_points();
    let shuffled: Vec<(f64, f64)> = CROSSING_PENTAGON_TOUR.iter().map(|&i| points[i]).collect();

    let tour = solve_points(&shuffled, euclid).unwrap();
    assert_eq!(tour.len(), 5);
    assert!(closed_length(&tour) <= closed_length(&shuffled) + 1e-12);
    for p in &points {
        assert!(tour.contains(p));
    }
}

#[test]
fn solve_points_passes_small_inputs_through() {
    let two = [(0.0, 0.0), (5.0, 5.0)];
    assert_eq!(solve_points(&two, euclid).unwrap(), two.to_vec());
    assert!(solve_points::<(f64, f64), _>(&[], euclid).unwrap().is_empty());
}

#[test]
fn solve_points_rejects_negative_distances() {
    let points = random_points(5, 1);
    let err = solve_points(&points, |_, _| -1.0).unwrap_err();
    assert!(matches!(err, LinKernError::InvalidDistance { .. }));
}

#[test]
fn run_solver_follows_config() {
    let m = random_euclidean(45, 60);
    let config = SolverConfig::new()
        .with_construction(ConstructionType::NearestNeighbor)
        .with_random_seed(9);

    let a = run_solver(&config, &m).unwrap();
    let b = run_solver(&config, &m).unwrap();
    assert_eq!(a.tour, b.tour);
    assert!(a.tour.is_valid_permutation(45));
    assert!(a.length <= a.initial_length);
}

#[test]
fn run_solver_multi_start_from_toml() {
    let config = SolverConfig::from_toml_str(
        r#"
        random_seed = 2

        [multi_start]
        starts = 3
        "#,
    )
    .unwrap();
    let m = random_euclidean(30, 61);

    let solution = run_solver(&config, &m).unwrap();
    assert!(solution.tour.is_valid_permutation(30));
    assert!(solution.length <= solution.initial_length);
    assert_eq!(run_solver(&config, &m).unwrap().tour, solution.tour);
}

#[test]
fn run_solver_rejects_tiny_instances() {
    let m = DistanceMatrix::from_rows(vec![vec![0.0, 2.0], vec![2.0, 0.0]]).unwrap();
    let err = run_solver(&SolverConfig::default(), &m).unwrap_err();
    assert_eq!(err, LinKernError::TooFewNodes { count: 2 });
}
