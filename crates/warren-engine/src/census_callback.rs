//! Tick callback that logs the census after each step.

use tracing::info;
use warren_core::{SimulationState, TickCallback, TickSummary};
use warren_types::{DeathCause, Species};

/// Logs one line per step with the head count of each species.
pub struct CensusLogger {
    every: u64,
}

impl CensusLogger {
    /// Log every `every` steps. 0 and 1 both log every step.
    pub const fn new(every: u64) -> Self {
        Self { every }
    }
}

impl TickCallback for CensusLogger {
    fn on_tick(&mut self, summary: &TickSummary, _state: &SimulationState) {
        if self.every > 1 && summary.step.checked_rem(self.every) != Some(0) {
            return;
        }
        let died = |cause: DeathCause| summary.deaths.get(&cause).copied().unwrap_or(0);
        info!(
            step = summary.step,
            foxes = summary.census.count(Species::Fox),
            rabbits = summary.census.count(Species::Rabbit),
            births = summary.births,
            eaten = died(DeathCause::Eaten),
            starved = died(DeathCause::Starvation),
            old_age = died(DeathCause::OldAge),
            overcrowded = died(DeathCause::Overcrowding),
            "Census"
        );
    }
}
