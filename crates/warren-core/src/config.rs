//! Configuration loading and typed config structures for the Warren simulation.
//!
//! The canonical configuration lives in `warren-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads and validates the file.
//! Every field has a default, so an empty file yields the classic 80x120
//! foxes-and-rabbits setup.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;
use warren_agents::{SpeciesConfig, SpeciesConfigError};
use warren_types::Species;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A species block holds parameters no animal can live with.
    #[error("invalid {species} parameters: {source}")]
    Species {
        /// The species the block configures.
        species: Species,
        /// What is wrong with it.
        source: SpeciesConfigError,
    },

    /// A value is out of range.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `warren-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Grid size, seed, and initial population density.
    #[serde(default)]
    pub world: WorldConfig,

    /// Lifecycle parameters per species.
    #[serde(default)]
    pub species: SpeciesTable,

    /// Run boundaries.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `WARREN_SEED` overrides `world.seed` when set to a valid integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or a
    /// validation error if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or a
    /// validation error if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.world.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()?;
        for species in Species::ALL {
            self.species
                .get(species)
                .validate()
                .map_err(|source| ConfigError::Species { species, source })?;
        }
        Ok(())
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable simulation name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of grid rows.
    #[serde(default = "default_rows")]
    pub rows: u32,

    /// Number of grid columns.
    #[serde(default = "default_cols")]
    pub cols: u32,

    /// Chance that a cell starts with a fox.
    #[serde(default = "default_fox_creation_probability")]
    pub fox_creation_probability: f64,

    /// Chance that a cell without a fox starts with a rabbit.
    #[serde(default = "default_rabbit_creation_probability")]
    pub rabbit_creation_probability: f64,
}

impl WorldConfig {
    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("WARREN_SEED") {
            match val.trim().parse() {
                Ok(seed) => self.seed = seed,
                Err(_) => warn!(value = %val, "Ignoring WARREN_SEED: not an unsigned integer"),
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "grid must have at least one cell, got {}x{}",
                    self.rows, self.cols
                ),
            });
        }
        for (name, value) in [
            ("fox_creation_probability", self.fox_creation_probability),
            ("rabbit_creation_probability", self.rabbit_creation_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    reason: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
            rows: default_rows(),
            cols: default_cols(),
            fox_creation_probability: default_fox_creation_probability(),
            rabbit_creation_probability: default_rabbit_creation_probability(),
        }
    }
}

fn default_world_name() -> String {
    String::from("Warren")
}

const fn default_seed() -> u64 {
    1111
}

const fn default_rows() -> u32 {
    80
}

const fn default_cols() -> u32 {
    120
}

const fn default_fox_creation_probability() -> f64 {
    0.02
}

const fn default_rabbit_creation_probability() -> f64 {
    0.08
}

/// Lifecycle parameters for each species.
///
/// A species block replaces the defaults as a whole, so it must list every
/// field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeciesTable {
    /// Predator parameters.
    #[serde(default = "SpeciesConfig::fox")]
    pub fox: SpeciesConfig,

    /// Prey parameters.
    #[serde(default = "SpeciesConfig::rabbit")]
    pub rabbit: SpeciesConfig,
}

impl SpeciesTable {
    /// The parameters for `species`.
    pub const fn get(&self, species: Species) -> &SpeciesConfig {
        match species {
            Species::Fox => &self.fox,
            Species::Rabbit => &self.rabbit,
        }
    }
}

impl Default for SpeciesTable {
    fn default() -> Self {
        Self {
            fox: SpeciesConfig::fox(),
            rabbit: SpeciesConfig::rabbit(),
        }
    }
}

/// Simulation boundary parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Steps to run before stopping. 0 runs no steps.
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
        }
    }
}

const fn default_max_steps() -> u64 {
    4000
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes
    /// precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    String::from("info")
}
