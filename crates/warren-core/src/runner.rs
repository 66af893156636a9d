//! Simulation loop runner.
//!
//! [`simulate`] drives [`run_tick`] until one of two conditions holds:
//!
//! - **Step limit**: the requested number of steps has run.
//! - **Not viable**: fewer than two species are left alive, so nothing
//!   interesting can happen any more.
//!
//! Both are checked before every step, so a run that starts non-viable
//! executes no steps at all.
//!
//! [`run_tick`]: crate::tick::run_tick

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;
use warren_types::DeathCause;

use crate::census::Census;
use crate::tick::{self, TickError, TickSummary};
use crate::state::SimulationState;

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A tick execution failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying tick error.
        #[from]
        source: TickError,
    },
}

/// Reason why the simulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The requested number of steps ran.
    StepLimit,
    /// Fewer than two species are alive.
    NotViable,
}

/// Outcome of a run, suitable for printing as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Name of the run.
    pub name: String,
    /// Seed of the random source.
    pub seed: u64,
    /// Why the run stopped.
    pub end_reason: EndReason,
    /// Steps executed by this run.
    pub steps_run: u64,
    /// Step counter when the run stopped.
    pub final_step: u64,
    /// Live animals when the run started.
    pub initial_census: Census,
    /// Live animals when the run stopped.
    pub final_census: Census,
    /// Animals born during the run.
    pub births: usize,
    /// Animals that died during the run, by cause.
    pub deaths: BTreeMap<DeathCause, usize>,
}

/// Callback invoked after each tick completes.
pub trait TickCallback {
    /// Called after a tick completes successfully.
    fn on_tick(&mut self, summary: &TickSummary, state: &SimulationState);
}

/// A no-op tick callback for testing.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary, _state: &SimulationState) {}
}

/// Run up to `max_steps` steps, stopping early once the ecosystem is no
/// longer viable.
///
/// # Errors
///
/// Returns [`RunnerError`] if a tick fails.
pub fn simulate(
    state: &mut SimulationState,
    max_steps: u64,
    callback: &mut dyn TickCallback,
) -> Result<RunReport, RunnerError> {
    let initial_census = state.census();
    let mut steps_run: u64 = 0;
    let mut births: usize = 0;
    let mut deaths: BTreeMap<DeathCause, usize> = BTreeMap::new();

    info!(
        name = state.name(),
        seed = state.seed(),
        max_steps,
        start_step = state.clock.step(),
        "Simulation starting"
    );

    let end_reason = loop {
        if steps_run >= max_steps {
            break EndReason::StepLimit;
        }
        if !state.census().is_viable() {
            break EndReason::NotViable;
        }

        let summary = tick::run_tick(state)?;
        steps_run = steps_run.saturating_add(1);
        births = births.saturating_add(summary.births);
        for (cause, count) in &summary.deaths {
            let total = deaths.entry(*cause).or_insert(0);
            *total = total.saturating_add(*count);
        }

        callback.on_tick(&summary, state);
    };

    let report = RunReport {
        name: state.name().to_owned(),
        seed: state.seed(),
        end_reason,
        steps_run,
        final_step: state.clock.step(),
        initial_census,
        final_census: state.census(),
        births,
        deaths,
    };
    log_simulation_end(&report);
    Ok(report)
}

/// Log the simulation end.
pub fn log_simulation_end(report: &RunReport) {
    info!(
        reason = ?report.end_reason,
        steps_run = report.steps_run,
        final_step = report.final_step,
        census = %report.final_census,
        "Simulation ended"
    );
}

#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
#[cfg(test)]
mod tests {
    use warren_types::Species;

    use super::*;
    use crate::config::SimulationConfig;

    fn config(rows: u32, cols: u32) -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.world.rows = rows;
        config.world.cols = cols;
        config
    }

    struct Counter {
        steps: Vec<u64>,
    }

    impl TickCallback for Counter {
        fn on_tick(&mut self, summary: &TickSummary, _state: &SimulationState) {
            self.steps.push(summary.step);
        }
    }

    #[test]
    fn runs_exactly_max_steps_while_viable() {
        let mut state = SimulationState::new(&config(40, 40)).unwrap();
        let mut counter = Counter { steps: Vec::new() };
        let report = simulate(&mut state, 5, &mut counter).unwrap();
        assert_eq!(report.end_reason, EndReason::StepLimit);
        assert_eq!(report.steps_run, 5);
        assert_eq!(counter.steps, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_steps_runs_nothing() {
        let mut state = SimulationState::new(&config(10, 10)).unwrap();
        let report = simulate(&mut state, 0, &mut NoOpCallback).unwrap();
        assert_eq!(report.steps_run, 0);
        assert_eq!(report.end_reason, EndReason::StepLimit);
        assert_eq!(report.initial_census, report.final_census);
    }

    #[test]
    fn single_species_stops_immediately() {
        let mut cfg = config(10, 10);
        cfg.world.fox_creation_probability = 0.0;
        cfg.world.rabbit_creation_probability = 0.5;
        let mut state = SimulationState::new(&cfg).unwrap();
        let report = simulate(&mut state, 100, &mut NoOpCallback).unwrap();
        assert_eq!(report.end_reason, EndReason::NotViable);
        assert_eq!(report.steps_run, 0);
        assert_eq!(report.final_census.count(Species::Fox), 0);
    }

    #[test]
    fn continued_run_keeps_counting_steps() {
        let mut state = SimulationState::new(&config(40, 40)).unwrap();
        let first = simulate(&mut state, 3, &mut NoOpCallback).unwrap();
        let second = simulate(&mut state, 2, &mut NoOpCallback).unwrap();
        assert_eq!(first.final_step, 3);
        assert_eq!(second.steps_run, 2);
        assert_eq!(second.final_step, 5);
    }

    #[test]
    fn report_serializes_to_json() {
        let mut state = SimulationState::new(&config(40, 40)).unwrap();
        let report = simulate(&mut state, 2, &mut NoOpCallback).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["end_reason"], "step_limit");
        assert_eq!(json["seed"], 1111);
        assert!(json["final_census"]["counts"]["rabbit"].is_u64());
    }
}
