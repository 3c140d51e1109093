//! Solver-level scope.

use std::sync::Arc;
use std::time::{Duration, Instant};

use linkern_core::Tour;

use crate::statistics::StatisticsCollector;

/// State of one optimization run: the current tour and its progress counters.
///
/// Terminations read from the scope; only the optimizer mutates it.
#[derive(Debug)]
pub struct SolverScope {
    tour: Tour,
    current_length: f64,
    start_time: Option<Instant>,
    sweep_count: u64,
    improvement_count: u64,
    statistics: Option<Arc<StatisticsCollector>>,
}

impl SolverScope {
    pub fn new(tour: Tour, length: f64) -> Self {
        Self {
            tour,
            current_length: length,
            start_time: None,
            sweep_count: 0,
            improvement_count: 0,
            statistics: None,
        }
    }

    pub fn with_statistics(mut self, collector: Arc<StatisticsCollector>) -> Self {
        self.statistics = Some(collector);
        self
    }

    pub fn statistics(&self) -> Option<&Arc<StatisticsCollector>> {
        self.statistics.as_ref()
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.sweep_count = 0;
        self.improvement_count = 0;
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn current_length(&self) -> f64 {
        self.current_length
    }

    /// Replaces the current tour after an accepted improvement.
    pub fn adopt(&mut self, tour: Tour, length: f64) {
        self.tour = tour;
        self.current_length = length;
        self.improvement_count += 1;
        if let Some(stats) = &self.statistics {
            stats.record_improvement(self.sweep_count, length);
        }
    }

    pub fn record_attempt(&self) {
        if let Some(stats) = &self.statistics {
            stats.record_attempt();
        }
    }

    pub fn record_rejection(&self) {
        if let Some(stats) = &self.statistics {
            stats.record_rejection();
        }
    }

    /// Marks the current sweep as finished.
    pub fn increment_sweep_count(&mut self) -> u64 {
        self.sweep_count += 1;
        if let Some(stats) = &self.statistics {
            stats.record_sweep();
        }
        self.sweep_count
    }

    /// Number of completed sweeps; also the 0-based index of the running one.
    pub fn sweep_count(&self) -> u64 {
        self.sweep_count
    }

    pub fn improvement_count(&self) -> u64 {
        self.improvement_count
    }

    pub fn into_tour(self) -> Tour {
        self.tour
    }
}
