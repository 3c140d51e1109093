//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        construction = "nearest_neighbor"

        [search]
        max_depth = 10
        try_predecessor = false

        [termination]
        seconds_spent_limit = 30
        sweep_count_limit = 50

        [multi_start]
        starts = 8
        thread_count = { count = 2 }
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.construction, ConstructionType::NearestNeighbor);
    assert_eq!(config.search.max_depth, Some(10));
    assert!(!config.search.try_predecessor);
    let termination = config.termination.unwrap();
    assert_eq!(termination.seconds_spent_limit, Some(30));
    assert_eq!(termination.sweep_count_limit, Some(50));
    assert_eq!(config.multi_start.starts, 8);
    assert_eq!(config.multi_start.thread_count, ThreadCount::Count(2));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        construction: identity
        search:
          max_depth: 5
        termination:
          minutes_spent_limit: 2
        multi_start:
          starts: 3
          thread_count: none
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.construction, ConstructionType::Identity);
    assert_eq!(config.search.max_depth, Some(5));
    assert!(config.search.try_predecessor);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(120)));
    assert_eq!(config.multi_start.thread_count, ThreadCount::None);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.multi_start.starts, 1);
    assert!(config.search.try_predecessor);
    assert_eq!(config.search.max_depth, None);
    assert_eq!(config.time_limit(), None);
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_termination_seconds(60)
        .with_sweep_limit(9)
        .with_construction(ConstructionType::NearestNeighbor)
        .with_max_depth(12)
        .with_starts(4);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    assert_eq!(
        config.termination.as_ref().and_then(|t| t.sweep_count_limit),
        Some(9)
    );
    assert_eq!(config.search.max_depth, Some(12));
    assert_eq!(config.multi_start.starts, 4);
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_zero_depth() {
    let err = SolverConfig::from_toml_str("[search]\nmax_depth = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_rejects_zero_starts() {
    let err = SolverConfig::from_toml_str("[multi_start]\nstarts = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_rejects_unknown_construction() {
    let err = SolverConfig::from_toml_str("construction = \"christofides\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = SolverConfig::load("/nonexistent/linkern.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_time_limit_combines_minutes_and_seconds() {
    let termination = TerminationConfig {
        seconds_spent_limit: Some(15),
        minutes_spent_limit: Some(1),
        sweep_count_limit: None,
    };
    assert_eq!(termination.time_limit(), Some(Duration::from_secs(75)));
    assert_eq!(TerminationConfig::default().time_limit(), None);
}

#[test]
fn test_thread_count_resolve() {
    assert_eq!(ThreadCount::None.resolve(8), 1);
    assert_eq!(ThreadCount::Count(4).resolve(8), 4);
    assert_eq!(ThreadCount::Count(16).resolve(3), 3);
    assert!(ThreadCount::Auto.resolve(2) >= 1);
    assert!(ThreadCount::Auto.resolve(2) <= 2);
    assert_eq!(ThreadCount::Count(4).resolve(0), 1);
}
