//! Tick cycle: one step of the simulation.
//!
//! Each step runs these phases in order:
//!
//! 1. **Advance** -- bump the step counter.
//! 2. **Act** -- every animal, in turn order, takes its turn. The acting
//!    animal is lifted out of the population so it can reach its
//!    neighbours. A rabbit eaten before its turn is already dead and skips
//!    it.
//! 3. **Tally** -- count the deaths of this step by cause.
//! 4. **Settle** -- append newborns at the back of the turn order and drop
//!    the dead. Newborns first act on the next step.
//!
//! The tick cycle is deterministic given the same initial state and seed.

use std::collections::BTreeMap;

use tracing::debug;
use warren_agents::{Animal, AnimalError, Habitat};
use warren_types::{AnimalId, DeathCause};

use crate::census::Census;
use crate::clock::ClockError;
use crate::state::SimulationState;

/// Errors that can occur during tick execution.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// A clock operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// An animal's turn failed.
    #[error("animal error for {animal_id}: {source}")]
    Animal {
        /// The animal whose turn failed.
        animal_id: AnimalId,
        /// The underlying animal error.
        source: AnimalError,
    },
}

/// Summary of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSummary {
    /// The step number that was executed.
    pub step: u64,
    /// Animals born this step.
    pub births: usize,
    /// Animals that died this step, by cause.
    pub deaths: BTreeMap<DeathCause, usize>,
    /// Live animals at the end of the step.
    pub census: Census,
}

impl TickSummary {
    /// Deaths of every cause.
    pub fn total_deaths(&self) -> usize {
        self.deaths.values().fold(0, |acc, n| acc.saturating_add(*n))
    }
}

/// Execute one step of the simulation.
///
/// # Errors
///
/// Returns [`TickError`] if the step counter overflows or an animal's turn
/// fails. The animal is back in the population either way.
pub fn run_tick(state: &mut SimulationState) -> Result<TickSummary, TickError> {
    let step = state.clock.advance()?;

    // --- Act ---
    let mut newborns = Vec::new();
    for id in state.population.snapshot() {
        let Some(mut animal) = state.population.take(id) else {
            continue;
        };
        let outcome = if animal.is_alive() {
            let mut habitat = Habitat {
                field: &mut state.field,
                rng: &mut state.rng,
                neighbours: &mut state.population,
            };
            animal.act(&mut habitat, &mut newborns)
        } else {
            Ok(())
        };
        state.population.restore(animal);
        outcome.map_err(|source| TickError::Animal {
            animal_id: id,
            source,
        })?;
    }

    // --- Tally ---
    let mut deaths: BTreeMap<DeathCause, usize> = BTreeMap::new();
    for cause in state
        .population
        .animals()
        .filter_map(Animal::cause_of_death)
    {
        let count = deaths.entry(cause).or_insert(0);
        *count = count.saturating_add(1);
    }

    // --- Settle ---
    let births = newborns.len();
    for child in newborns {
        state.population.insert(child);
    }
    let removed = state.population.remove_dead();
    let census = state.census();

    debug!(
        step,
        births,
        deaths = removed,
        population = census.total(),
        "Step complete"
    );

    Ok(TickSummary {
        step,
        births,
        deaths,
        census,
    })
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use warren_agents::SpeciesConfig;
    use warren_types::{Location, Species};
    use warren_world::Field;

    use super::*;
    use crate::config::SimulationConfig;

    fn empty_state(rows: u32, cols: u32) -> SimulationState {
        let mut config = SimulationConfig::default();
        config.world.rows = rows;
        config.world.cols = cols;
        config.world.fox_creation_probability = 0.0;
        config.world.rabbit_creation_probability = 0.0;
        SimulationState::new(&config).unwrap()
    }

    fn add(
        state: &mut SimulationState,
        species: Species,
        config: SpeciesConfig,
        at: Location,
    ) -> AnimalId {
        let animal = Animal::new(
            species,
            Arc::new(config),
            false,
            &mut state.field,
            at,
            &mut state.rng,
        )
        .unwrap();
        let id = animal.id();
        state.population.insert(animal);
        id
    }

    #[test]
    fn step_counter_advances() {
        let mut state = empty_state(3, 3);
        assert_eq!(run_tick(&mut state).unwrap().step, 1);
        assert_eq!(run_tick(&mut state).unwrap().step, 2);
    }

    #[test]
    fn eaten_rabbit_is_removed_and_tallied() {
        let mut state = empty_state(1, 2);
        let no_breeding_fox = SpeciesConfig::new(15, 150, 0.0, 2, 9).unwrap();
        add(&mut state, Species::Fox, no_breeding_fox, Location::new(0, 0));
        let rabbit = add(
            &mut state,
            Species::Rabbit,
            SpeciesConfig::rabbit(),
            Location::new(0, 1),
        );

        let summary = run_tick(&mut state).unwrap();
        assert_eq!(summary.deaths.get(&DeathCause::Eaten), Some(&1));
        assert!(state.population.get(rabbit).is_none());
        assert_eq!(summary.census.count(Species::Rabbit), 0);
        assert_eq!(summary.census.count(Species::Fox), 1);
        assert_eq!(state.field.occupied_count(), 1);
    }

    #[test]
    fn prey_eaten_earlier_in_the_step_does_not_act() {
        let mut state = empty_state(3, 3);
        let no_breeding_fox = SpeciesConfig::new(15, 150, 0.0, 2, 9).unwrap();
        let eager_rabbit = SpeciesConfig::new(0, 40, 1.0, 4, 9).unwrap();
        add(&mut state, Species::Fox, no_breeding_fox, Location::new(0, 0));
        add(&mut state, Species::Rabbit, eager_rabbit, Location::new(0, 1));

        let summary = run_tick(&mut state).unwrap();
        // Had the rabbit acted it would have given birth.
        assert_eq!(summary.births, 0);
        assert_eq!(summary.deaths.get(&DeathCause::Eaten), Some(&1));
    }

    #[test]
    fn newborns_join_at_the_back_and_wait_a_step() {
        let mut state = empty_state(5, 5);
        let eager = SpeciesConfig::new(0, 40, 1.0, 4, 9).unwrap();
        let parent = add(&mut state, Species::Rabbit, eager, Location::new(2, 2));

        let summary = run_tick(&mut state).unwrap();
        assert!(summary.births >= 1);
        let order = state.population.snapshot();
        assert_eq!(order.first(), Some(&parent));
        assert_eq!(order.len(), summary.births.saturating_add(1));
        for animal in state.population.animals().skip(1) {
            // Newborns have not acted yet.
            assert_eq!(animal.age(), 0);
        }
    }

    #[test]
    fn population_and_field_stay_in_sync() {
        let mut config = SimulationConfig::default();
        config.world.rows = 15;
        config.world.cols = 15;
        let mut state = SimulationState::new(&config).unwrap();
        for _ in 0..30 {
            let summary = run_tick(&mut state).unwrap();
            assert_eq!(summary.census.total(), state.population.len());
            assert_eq!(state.field.occupied_count(), state.population.len());
            for animal in state.population.animals() {
                assert!(animal.is_alive());
                let location = animal.location().unwrap();
                assert_eq!(state.field.occupant_at(location), Some(animal.id()));
            }
        }
    }

    #[test]
    fn empty_field_ticks_quietly() {
        let mut state = empty_state(2, 2);
        let summary = run_tick(&mut state).unwrap();
        assert_eq!(summary.births, 0);
        assert_eq!(summary.total_deaths(), 0);
        assert_eq!(summary.census.total(), 0);
    }
}
