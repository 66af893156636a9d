//! Simulation core for the Warren predator-prey model.
//!
//! This crate drives the animals defined in `warren-agents` across the grid
//! from `warren-world`. It owns the simulation state, the per-step tick
//! cycle, and the bounded run loop.
//!
//! # Modules
//!
//! - [`census`] -- Per-species head counts and the viability check.
//! - [`clock`] -- The step counter.
//! - [`config`] -- YAML configuration loading and typed config structures.
//! - [`runner`] -- The run loop: step until a limit or until the ecosystem
//!   stops being viable.
//! - [`state`] -- Simulation state: field, random source, population, and
//!   the populate and reset operations.
//! - [`tick`] -- A single simulation step.

pub mod census;
pub mod clock;
pub mod config;
pub mod runner;
pub mod state;
pub mod tick;

pub use census::Census;
pub use clock::{ClockError, StepClock};
pub use config::{ConfigError, SimulationConfig};
pub use runner::{EndReason, NoOpCallback, RunReport, RunnerError, TickCallback, simulate};
pub use state::{SimulationError, SimulationState};
pub use tick::{TickError, TickSummary, run_tick};
