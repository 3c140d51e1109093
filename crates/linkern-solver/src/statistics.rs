//! Solver statistics collection.
//!
//! Tracks sweep, attempt and improvement counts plus the history of accepted
//! tour lengths while an optimization runs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Record of an accepted improvement.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthImprovement {
    /// Time since collection started when the improvement was adopted.
    pub time_offset: Duration,
    /// Sweep index the improvement happened in.
    pub sweep: u64,
    /// Tour length after the improvement.
    pub length: f64,
}

/// Complete statistics for a run.
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    /// Time since the collector was created.
    pub total_duration: Duration,
    /// Completed sweeps.
    pub sweeps: u64,
    /// Start positions tried.
    pub attempts: u64,
    /// Improvements adopted.
    pub improvements: u64,
    /// Candidates discarded as invalid or not shorter.
    pub rejected: u64,
    /// Every adopted length, in order.
    pub history: Vec<LengthImprovement>,
}

impl SolverStatistics {
    /// Fraction of attempts that produced an adopted improvement.
    pub fn improvement_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.improvements as f64 / self.attempts as f64
        }
    }

    /// Length after the last improvement, if any.
    pub fn best_length(&self) -> Option<f64> {
        self.history.last().map(|h| h.length)
    }
}

/// Thread-safe collector for solver statistics.
///
/// Shared between an optimizer and whoever reads progress through an `Arc`.
#[derive(Debug)]
pub struct StatisticsCollector {
    start_time: Instant,
    sweeps: AtomicU64,
    attempts: AtomicU64,
    improvements: AtomicU64,
    rejected: AtomicU64,
    history: Mutex<Vec<LengthImprovement>>,
}

impl StatisticsCollector {
    /// Creates a collector; the start time is taken now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            sweeps: AtomicU64::new(0),
            attempts: AtomicU64::new(0),
            improvements: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn record_sweep(&self) {
        self.sweeps.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_attempt(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an adopted improvement and appends it to the history.
    pub fn record_improvement(&self, sweep: u64, length: f64) {
        self.improvements.fetch_add(1, Ordering::Relaxed);
        let improvement = LengthImprovement {
            time_offset: self.start_time.elapsed(),
            sweep,
            length,
        };
        if let Ok(mut history) = self.history.lock() {
            history.push(improvement);
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn current_sweeps(&self) -> u64 {
        self.sweeps.load(Ordering::Relaxed)
    }

    pub fn current_attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    pub fn current_improvements(&self) -> u64 {
        self.improvements.load(Ordering::Relaxed)
    }

    /// Takes a snapshot without consuming the collector.
    pub fn snapshot(&self) -> SolverStatistics {
        let history = match self.history.lock() {
            Ok(history) => history.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        SolverStatistics {
            total_duration: self.start_time.elapsed(),
            sweeps: self.sweeps.load(Ordering::Relaxed),
            attempts: self.attempts.load(Ordering::Relaxed),
            improvements: self.improvements.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            history,
        }
    }

    /// Consumes the collector into final statistics.
    pub fn into_statistics(self) -> SolverStatistics {
        let history = self
            .history
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        SolverStatistics {
            total_duration: self.start_time.elapsed(),
            sweeps: self.sweeps.into_inner(),
            attempts: self.attempts.into_inner(),
            improvements: self.improvements.into_inner(),
            rejected: self.rejected.into_inner(),
            history,
        }
    }
}

impl Default for StatisticsCollector {
    fn default() -> Self {
        Self::new()
    }
}
