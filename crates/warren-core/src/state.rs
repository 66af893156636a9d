//! Simulation state and its lifecycle: build, populate, reset.

use std::sync::Arc;

use tracing::info;
use warren_agents::{Animal, AnimalError, Population, SpeciesConfig};
use warren_types::{Location, Species};
use warren_world::{Field, FieldError, GridField, RandomSource, SeededRandom};

use crate::census::Census;
use crate::clock::StepClock;
use crate::config::{ConfigError, SimulationConfig, WorldConfig};

/// Errors that can occur while building or resetting the simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// The configuration failed validation.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The field could not be created.
    #[error("field error: {source}")]
    Field {
        /// The underlying field error.
        #[from]
        source: FieldError,
    },

    /// An animal could not be created.
    #[error("animal error: {source}")]
    Animal {
        /// The underlying animal error.
        #[from]
        source: AnimalError,
    },
}

/// Everything the tick cycle reads and writes.
#[derive(Debug)]
pub struct SimulationState {
    /// The step counter.
    pub clock: StepClock,
    /// The grid; each cell holds the id of at most one animal.
    pub field: GridField,
    /// The single random source for the whole run.
    pub rng: SeededRandom,
    /// Every animal, in turn order.
    pub population: Population,
    /// Grid size, seed, and creation probabilities.
    world: WorldConfig,
    /// Shared by every fox.
    fox: Arc<SpeciesConfig>,
    /// Shared by every rabbit.
    rabbit: Arc<SpeciesConfig>,
}

impl SimulationState {
    /// Build and populate a simulation from `config`.
    pub fn new(config: &SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let mut state = Self {
            clock: StepClock::new(),
            field: GridField::new(config.world.rows, config.world.cols)?,
            rng: SeededRandom::new(config.world.seed),
            population: Population::new(),
            world: config.world.clone(),
            fox: Arc::new(config.species.fox.clone()),
            rabbit: Arc::new(config.species.rabbit.clone()),
        };
        state.populate()?;
        Ok(state)
    }

    /// Shared parameters for `species`.
    pub fn species_config(&self, species: Species) -> Arc<SpeciesConfig> {
        match species {
            Species::Fox => Arc::clone(&self.fox),
            Species::Rabbit => Arc::clone(&self.rabbit),
        }
    }

    /// Scatter animals over the field, row by row.
    ///
    /// Each cell gets a fox with the fox creation probability; a cell that
    /// did not get a fox gets a rabbit with the rabbit creation probability.
    /// Animals start at a random age.
    pub fn populate(&mut self) -> Result<(), SimulationError> {
        for row in 0..self.field.rows() {
            for col in 0..self.field.cols() {
                let species = if self.rng.next_float() < self.world.fox_creation_probability {
                    Species::Fox
                } else if self.rng.next_float() < self.world.rabbit_creation_probability {
                    Species::Rabbit
                } else {
                    continue;
                };
                let animal = Animal::new(
                    species,
                    self.species_config(species),
                    true,
                    &mut self.field,
                    Location::new(row, col),
                    &mut self.rng,
                )?;
                self.population.insert(animal);
            }
        }
        let census = self.census();
        info!(
            foxes = census.count(Species::Fox),
            rabbits = census.count(Species::Rabbit),
            "Field populated"
        );
        Ok(())
    }

    /// Start over: empty the field, rewind the random source and the step
    /// counter, and populate again. The same seed gives the same initial
    /// animals.
    pub fn reset(&mut self) -> Result<(), SimulationError> {
        self.population.clear();
        self.field.clear_all();
        self.rng.reset();
        self.clock.reset();
        info!(seed = self.rng.seed(), "Simulation reset");
        self.populate()
    }

    /// Live animals per species right now.
    pub fn census(&self) -> Census {
        Census::take(&self.population)
    }

    /// Name of this run.
    pub fn name(&self) -> &str {
        &self.world.name
    }

    /// Seed the random source was created with.
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
