//! Configuration system for linkern.
//!
//! Load solver configuration from TOML or YAML to control the chain search,
//! termination, initial tour construction and multi-start without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use linkern_config::{ConstructionType, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!     construction = "nearest_neighbor"
//!
//!     [search]
//!     max_depth = 25
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     sweep_count_limit = 100
//!
//!     [multi_start]
//!     starts = 4
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.construction, ConstructionType::NearestNeighbor);
//! assert_eq!(config.search.max_depth, Some(25));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use linkern_config::SolverConfig;
//!
//! let config = SolverConfig::load("linkern.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Random seed for reproducible start-node selection.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// How the initial tour is built when the caller does not supply one.
    #[serde(default)]
    pub construction: ConstructionType,

    /// Chain search configuration.
    #[serde(default)]
    pub search: SearchConfig,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Multi-start configuration.
    #[serde(default)]
    pub multi_start: MultiStartConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.max_depth == Some(0) {
            return Err(ConfigError::Invalid(
                "search.max_depth must be at least 1".to_string(),
            ));
        }
        if self.multi_start.starts == 0 {
            return Err(ConfigError::Invalid(
                "multi_start.starts must be at least 1".to_string(),
            ));
        }
        if self.multi_start.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "multi_start.thread_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the sweep count limit.
    pub fn with_sweep_limit(mut self, sweeps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            sweep_count_limit: Some(sweeps),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the initial tour construction.
    pub fn with_construction(mut self, construction: ConstructionType) -> Self {
        self.construction = construction;
        self
    }

    /// Sets the maximum chain depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.search.max_depth = Some(depth);
        self
    }

    /// Sets the number of independent starts.
    pub fn with_starts(mut self, starts: usize) -> Self {
        self.multi_start.starts = starts;
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }
}

/// Initial tour construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionType {
    /// Visit nodes in id order.
    #[default]
    Identity,

    /// Greedy nearest unvisited node from a (seeded) random start.
    NearestNeighbor,
}

/// Chain search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Maximum number of removed edges in one chain. Unbounded when absent.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Whether a start position is retried in the predecessor direction.
    #[serde(default = "default_true")]
    pub try_predecessor: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            try_predecessor: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend solving.
    pub minutes_spent_limit: Option<u64>,

    /// Maximum number of full sweeps.
    pub sweep_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let seconds =
            self.seconds_spent_limit.unwrap_or(0) + self.minutes_spent_limit.unwrap_or(0) * 60;
        if seconds > 0 {
            Some(Duration::from_secs(seconds))
        } else {
            None
        }
    }
}

/// Multi-start configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MultiStartConfig {
    /// Number of independent optimizations; 1 disables multi-start.
    #[serde(default = "default_starts")]
    pub starts: usize,

    /// Worker threads for parallel starts.
    #[serde(default)]
    pub thread_count: ThreadCount,
}

impl Default for MultiStartConfig {
    fn default() -> Self {
        Self {
            starts: default_starts(),
            thread_count: ThreadCount::default(),
        }
    }
}

fn default_starts() -> usize {
    1
}

/// Thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Use the available parallelism.
    #[default]
    Auto,

    /// Run starts sequentially.
    None,

    /// Specific number of threads.
    Count(usize),
}

impl ThreadCount {
    /// Resolves to a concrete thread count, capped by the amount of work.
    pub fn resolve(&self, work_items: usize) -> usize {
        let threads = match self {
            ThreadCount::Auto => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            ThreadCount::None => 1,
            ThreadCount::Count(n) => *n,
        };
        threads.clamp(1, work_items.max(1))
    }
}

#[cfg(test)]
mod tests;
