//! Simulation run settings.
//!
//! A [`SimulationConfig`] is built either programmatically or from a YAML
//! file, and is always validated before any entity is generated.
//!
//! The expected YAML structure is:
//! ```yaml
//! simulation:
//!   node_count: 6
//!   task_count: 12
//!   algorithm: predictive_qos
//!   seed: 42
//! ```
//!
//! Every key is optional; missing values fall back to
//! [`SimulationConfig::default`].

use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ConfigViolation, SimulationError};
use crate::scheduler::Algorithm;

// ── Limits ────────────────────────────────────────────────────────────────────

/// Supported number of grid nodes per run.
pub const NODE_COUNT_RANGE: RangeInclusive<usize> = 3..=10;

/// Supported number of tasks per run.
pub const TASK_COUNT_RANGE: RangeInclusive<usize> = 3..=15;

pub const DEFAULT_NODE_COUNT: usize = 5;
pub const DEFAULT_TASK_COUNT: usize = 8;

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
struct SimulationConfigFile {
    #[serde(default)]
    simulation: SimulationEntry,
}

/// Run settings as they appear in the YAML file.
///
/// `algorithm` stays a string here so an unknown name surfaces as a
/// [`ConfigViolation::UnknownAlgorithm`] rather than a serde error.
#[derive(Debug, Default, Deserialize)]
struct SimulationEntry {
    node_count: Option<usize>,
    task_count: Option<usize>,
    algorithm: Option<String>,
    seed: Option<u64>,
}

// ── Public data structures ────────────────────────────────────────────────────

/// Validated settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub node_count: usize,
    pub task_count: usize,
    pub algorithm: Algorithm,
    /// Seed for the run's random source.  `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            task_count: DEFAULT_TASK_COUNT,
            algorithm: Algorithm::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Build and validate an unseeded configuration.
    ///
    /// # Errors
    /// [`SimulationError::Configuration`] if either count is out of range.
    pub fn new(
        node_count: usize,
        task_count: usize,
        algorithm: Algorithm,
    ) -> Result<Self, SimulationError> {
        let config = Self {
            node_count,
            task_count,
            algorithm,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Same configuration with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check both counts against [`NODE_COUNT_RANGE`] / [`TASK_COUNT_RANGE`].
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !NODE_COUNT_RANGE.contains(&self.node_count) {
            return Err(ConfigViolation::NodeCountOutOfRange {
                value: self.node_count,
                min: *NODE_COUNT_RANGE.start(),
                max: *NODE_COUNT_RANGE.end(),
            }
            .into());
        }
        if !TASK_COUNT_RANGE.contains(&self.task_count) {
            return Err(ConfigViolation::TaskCountOutOfRange {
                value: self.task_count,
                min: *TASK_COUNT_RANGE.start(),
                max: *TASK_COUNT_RANGE.end(),
            }
            .into());
        }
        Ok(())
    }

    /// Parse `path` as YAML and return a validated configuration.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, if the YAML is
    /// structurally invalid, if the algorithm name is unknown, or if a count
    /// is out of range.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading simulation configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open configuration file: {}", path.display()))?;

        let file: SimulationConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;
        let entry = file.simulation;

        let defaults = Self::default();
        let algorithm = match entry.algorithm.as_deref() {
            Some(name) => name
                .parse::<Algorithm>()
                .with_context(|| format!("Invalid algorithm in {}", path.display()))?,
            None => defaults.algorithm,
        };

        let config = Self {
            node_count: entry.node_count.unwrap_or(defaults.node_count),
            task_count: entry.task_count.unwrap_or(defaults.task_count),
            algorithm,
            seed: entry.seed,
        };
        config
            .validate()
            .with_context(|| format!("Invalid simulation settings in {}", path.display()))?;

        debug!(
            node_count = config.node_count,
            task_count = config.task_count,
            algorithm  = %config.algorithm,
            seed       = ?config.seed,
            "simulation configuration loaded"
        );
        Ok(config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
