//! Engine binary for the Warren predator-prey simulation.
//!
//! Loads configuration, populates the field, and runs the simulation loop
//! until the step limit or until only one species is left. The final run
//! report is printed to stdout as JSON.
//!
//! # Startup Sequence
//!
//! 1. Load configuration: the path given as the first argument, else
//!    `WARREN_CONFIG`, else `warren-config.yaml` if present, else defaults
//! 2. Initialize structured logging (tracing)
//! 3. Build and populate the simulation state
//! 4. Run the simulation loop
//! 5. Print the run report

mod census_callback;
mod error;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;
use warren_core::config::LoggingConfig;
use warren_core::{SimulationConfig, SimulationState, runner};

use crate::census_callback::CensusLogger;
use crate::error::EngineError;

/// Default config file, looked up in the working directory.
const DEFAULT_CONFIG_PATH: &str = "warren-config.yaml";

/// Census lines are logged this many steps apart.
const CENSUS_INTERVAL: u64 = 100;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, setup, or the simulation itself fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!(
        world_name = config.world.name,
        seed = config.world.seed,
        rows = config.world.rows,
        cols = config.world.cols,
        max_steps = config.simulation.max_steps,
        "Configuration loaded"
    );

    // 3. Build and populate.
    let mut state = SimulationState::new(&config).map_err(EngineError::from)?;

    // 4. Run.
    let mut callback = CensusLogger::new(CENSUS_INTERVAL);
    let report = runner::simulate(&mut state, config.simulation.max_steps, &mut callback)
        .map_err(EngineError::from)?;

    // 5. Report.
    let json = serde_json::to_string_pretty(&report).map_err(EngineError::from)?;
    println!("{json}");

    Ok(())
}

/// Load configuration from the first CLI argument, `WARREN_CONFIG`, or the
/// default file. Falls back to built-in defaults when no path was given
/// and the default file does not exist.
fn load_config() -> Result<SimulationConfig, EngineError> {
    let explicit = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("WARREN_CONFIG").map(PathBuf::from));
    if let Some(path) = explicit {
        return Ok(SimulationConfig::from_file(&path)?);
    }
    let path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if path.exists() {
        Ok(SimulationConfig::from_file(&path)?)
    } else {
        let mut config = SimulationConfig::default();
        config.world.apply_env_overrides();
        Ok(config)
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured
/// level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
