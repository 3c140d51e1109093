//! Termination assembled from configuration.

use linkern_config::TerminationConfig;

use super::{ExternalTermination, SweepCountTermination, Termination, TimeTermination};
use crate::scope::SolverScope;

/// Any combination of a time limit, a sweep limit and an external flag,
/// stopping when any configured part stops.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredTermination {
    time: Option<TimeTermination>,
    sweeps: Option<SweepCountTermination>,
    external: Option<ExternalTermination>,
}

impl ConfiguredTermination {
    pub fn from_config(config: &TerminationConfig) -> Self {
        Self {
            time: config.time_limit().map(TimeTermination::new),
            sweeps: config.sweep_count_limit.map(SweepCountTermination::new),
            external: None,
        }
    }

    pub fn with_external(mut self, external: ExternalTermination) -> Self {
        self.external = Some(external);
        self
    }

    /// True if no part is configured.
    pub fn is_unbounded(&self) -> bool {
        self.time.is_none() && self.sweeps.is_none() && self.external.is_none()
    }
}

impl Termination for ConfiguredTermination {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        self.time
            .as_ref()
            .is_some_and(|t| t.is_terminated(solver_scope))
            || self
                .sweeps
                .as_ref()
                .is_some_and(|t| t.is_terminated(solver_scope))
            || self
                .external
                .as_ref()
                .is_some_and(|t| t.is_terminated(solver_scope))
    }
}
