//! Wiring between configuration types and the solver.

use linkern_config::SolverConfig;
use linkern_core::{DistanceOracle, Result};
use tracing::debug;

use crate::construction::Construction;
use crate::multi_start::MultiStartSolver;
use crate::optimizer::{Optimizer, Solution};
use crate::termination::{ConfiguredTermination, ExternalTermination};

/// Builds optimizers, constructions and multi-starts from a [`SolverConfig`].
///
/// # Examples
///
/// ```
/// use linkern_config::SolverConfig;
/// use linkern_core::DistanceMatrix;
/// use linkern_solver::SolverBuilder;
///
/// let config = SolverConfig::from_toml_str(r#"
///     construction = "nearest_neighbor"
///     random_seed = 3
///
///     [termination]
///     sweep_count_limit = 50
/// "#).unwrap();
///
/// let m = DistanceMatrix::euclidean(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0), (1.0, 3.0)]).unwrap();
/// let solution = SolverBuilder::new(config).solve(&m).unwrap();
/// assert!(solution.tour.is_valid_permutation(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverBuilder {
    config: SolverConfig,
    external: Option<ExternalTermination>,
}

impl SolverBuilder {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            external: None,
        }
    }

    /// Adds a stop flag checked alongside the configured limits.
    pub fn with_external_termination(mut self, external: ExternalTermination) -> Self {
        self.external = Some(external);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Termination from the configured limits plus any external flag.
    pub fn termination(&self) -> ConfiguredTermination {
        let termination = self
            .config
            .termination
            .as_ref()
            .map(ConfiguredTermination::from_config)
            .unwrap_or_default();
        match &self.external {
            Some(external) => termination.with_external(external.clone()),
            None => termination,
        }
    }

    pub fn construction(&self) -> Construction {
        Construction::from(self.config.construction)
    }

    pub fn optimizer<'a, O>(&self, oracle: &'a O) -> Optimizer<'a, O, ConfiguredTermination>
    where
        O: DistanceOracle + ?Sized,
    {
        Optimizer::new(oracle)
            .with_max_depth(self.config.search.max_depth)
            .with_predecessor_retry(self.config.search.try_predecessor)
            .with_termination(self.termination())
    }

    pub fn multi_start<'a, O>(&self, oracle: &'a O) -> MultiStartSolver<'a, O>
    where
        O: DistanceOracle + ?Sized,
    {
        let solver = MultiStartSolver::new(oracle)
            .with_starts(self.config.multi_start.starts)
            .with_thread_count(self.config.multi_start.thread_count)
            .with_search(self.config.search.clone())
            .with_termination(self.termination());
        match self.config.random_seed {
            Some(seed) => solver.with_seed(seed),
            None => solver,
        }
    }

    /// Constructs an initial tour and optimizes it, or runs a multi-start when
    /// more than one start is configured.
    pub fn solve<O>(&self, oracle: &O) -> Result<Solution>
    where
        O: DistanceOracle + ?Sized,
    {
        if self.config.multi_start.starts > 1 {
            debug!(
                event = "builder_dispatch",
                mode = "multi_start",
                starts = self.config.multi_start.starts,
            );
            return self.multi_start(oracle).solve().map(|result| result.best);
        }

        let tour = self
            .construction()
            .build(oracle, self.config.random_seed)?;
        self.optimizer(oracle).optimize(tour)
    }
}
