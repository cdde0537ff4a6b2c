//! Configuration system for RelayForge.
//!
//! Load engine configuration from TOML or YAML files to tune the medley
//! search bound, the medley solver and parallelism without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use relayforge_config::{EngineConfig, MedleySolverType, ThreadCount};
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     thread_count = "none"
//!
//!     [medley]
//!     candidate_bound = 6
//!     widen_step = 2
//!     solver = "bounded_search"
//! "#).unwrap();
//!
//! assert_eq!(config.medley.candidate_bound, 6);
//! assert_eq!(config.medley.solver, MedleySolverType::BoundedSearch);
//! assert_eq!(config.thread_count, ThreadCount::None);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use relayforge_config::EngineConfig;
//!
//! let config = EngineConfig::load("relayforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use relayforge_core::RelayForgeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Default number of distinct swimmers kept per medley stroke.
pub const DEFAULT_CANDIDATE_BOUND: usize = 8;

/// Default growth of the candidate bound per widening round.
pub const DEFAULT_WIDEN_STEP: usize = 4;

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

impl From<ConfigError> for RelayForgeError {
    fn from(err: ConfigError) -> Self {
        RelayForgeError::Config(err.to_string())
    }
}

/// Main engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Medley relay selection settings.
    #[serde(default)]
    pub medley: MedleyConfig,

    /// Number of threads evaluating lineups in parallel.
    #[serde(default)]
    pub thread_count: ThreadCount,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`EngineConfig::validate`].
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

    /// Sets the medley candidate bound (K).
    pub fn with_candidate_bound(mut self, bound: usize) -> Self {
        self.medley.candidate_bound = bound;
        self
    }

    /// Sets the medley solver.
    pub fn with_medley_solver(mut self, solver: MedleySolverType) -> Self {
        self.medley.solver = solver;
        self
    }

    /// Sets which sources may fill the breast, fly and free medley legs.
    pub fn with_non_back_leg_sources(mut self, sources: LegSourcePolicy) -> Self {
        self.medley.non_back_leg_sources = sources;
        self
    }

    /// Sets the thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.medley.candidate_bound == 0 {
            return Err(ConfigError::Invalid(
                "medley.candidate_bound must be at least 1".to_string(),
            ));
        }
        if self.medley.widen_step == 0 {
            return Err(ConfigError::Invalid(
                "medley.widen_step must be at least 1".to_string(),
            ));
        }
        if self.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "thread_count must be at least 1; use \"none\" for single-threaded".to_string(),
            ));
        }
        Ok(())
    }
}

/// Medley relay selection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MedleyConfig {
    /// Distinct swimmers kept per stroke before enumerating combinations.
    #[serde(default = "default_candidate_bound")]
    pub candidate_bound: usize,

    /// Growth of the bound per widening round when no distinct lineup exists.
    #[serde(default = "default_widen_step")]
    pub widen_step: usize,

    /// Solver used for the four-stroke assignment.
    #[serde(default)]
    pub solver: MedleySolverType,

    /// Sources allowed on the breast, fly and free legs.
    #[serde(default)]
    pub non_back_leg_sources: LegSourcePolicy,
}

impl Default for MedleyConfig {
    fn default() -> Self {
        Self {
            candidate_bound: DEFAULT_CANDIDATE_BOUND,
            widen_step: DEFAULT_WIDEN_STEP,
            solver: MedleySolverType::default(),
            non_back_leg_sources: LegSourcePolicy::default(),
        }
    }
}

fn default_candidate_bound() -> usize {
    DEFAULT_CANDIDATE_BOUND
}

fn default_widen_step() -> usize {
    DEFAULT_WIDEN_STEP
}

/// Medley assignment solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MedleySolverType {
    /// Enumerate the top-K swimmers per stroke, widening K when needed.
    #[default]
    BoundedSearch,

    /// Exact minimum-weight assignment over the whole pool.
    ExactAssignment,
}

/// Which record sources may fill a relay leg that is not the lead-off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegSourcePolicy {
    /// Any source, including rolling-start relay splits.
    #[default]
    AnySource,

    /// Only block-start times.
    LeadoffEligibleOnly,
}

/// Thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Use rayon's global pool.
    #[default]
    Auto,

    /// Evaluate lineups sequentially on the calling thread.
    None,

    /// Specific number of threads.
    Count(usize),
}
