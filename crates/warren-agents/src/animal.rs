//! The animal lifecycle state machine.
//!
//! An [`Animal`] owns its own lifecycle data: whether it is alive, its age,
//! food level, gender, and the cell it occupies. The field is never stored
//! inside the animal; every operation that touches occupancy borrows it from
//! the caller. "Bound to the field" therefore means "has a location".
//!
//! # Invariants
//!
//! - `alive == false` exactly when `location` is `None`.
//! - Death happens once. Later death transitions change nothing, including
//!   the recorded cause.
//! - While alive, the field cell at `location` holds this animal's id.

use std::sync::Arc;

use tracing::debug;
use warren_types::{AnimalId, DeathCause, Gender, Location, Species};
use warren_world::{Field, RandomSource};

use crate::behaviour::{Habitat, behaviour_for};
use crate::config::SpeciesConfig;
use crate::error::AnimalError;

/// One fox or rabbit.
#[derive(Debug, Clone)]
pub struct Animal {
    id: AnimalId,
    species: Species,
    alive: bool,
    age: u32,
    food_level: u32,
    gender: Gender,
    location: Option<Location>,
    cause_of_death: Option<DeathCause>,
    config: Arc<SpeciesConfig>,
}

impl Animal {
    /// Create an animal and register it in `field` at `location`.
    ///
    /// With `random_age` the starting age is uniform in `[0, max_age)`,
    /// otherwise it is 0. Gender is a fair coin flip. The starting food
    /// level comes from the species behaviour.
    ///
    /// # Errors
    ///
    /// [`AnimalError::Config`] if `config` is invalid, [`AnimalError::Field`]
    /// if the location is off the grid or already taken.
    pub fn new(
        species: Species,
        config: Arc<SpeciesConfig>,
        random_age: bool,
        field: &mut dyn Field,
        location: Location,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, AnimalError> {
        config.validate()?;

        let age = if random_age {
            rng.next_int(config.max_age)
        } else {
            0
        };
        let id = AnimalId::new();
        field.place(id, location)?;

        let gender = if rng.next_bool() {
            Gender::Female
        } else {
            Gender::Male
        };
        let food_level = behaviour_for(species).initial_food_level(&config, random_age, rng);

        Ok(Self {
            id,
            species,
            alive: true,
            age,
            food_level,
            gender,
            location: Some(location),
            cause_of_death: None,
            config,
        })
    }

    /// Do whatever this animal does in one tick.
    ///
    /// Offspring are pushed onto `new_animals`. Acting on a dead animal does
    /// nothing.
    pub fn act(
        &mut self,
        habitat: &mut Habitat<'_>,
        new_animals: &mut Vec<Self>,
    ) -> Result<(), AnimalError> {
        if !self.alive {
            return Ok(());
        }
        behaviour_for(self.species).act(self, habitat, new_animals)
    }

    /// Grow one tick older, dying of old age past `max_age`.
    pub fn increment_age(&mut self, field: &mut dyn Field) {
        if !self.alive {
            return;
        }
        self.age = self.age.saturating_add(1);
        if self.age > self.config.max_age {
            self.set_dead(field, DeathCause::OldAge);
        }
    }

    /// Get one tick hungrier, starving when the food level reaches zero.
    pub fn increment_hunger(&mut self, field: &mut dyn Field) {
        if !self.alive {
            return;
        }
        self.food_level = self.food_level.saturating_sub(1);
        if self.food_level == 0 {
            self.set_dead(field, DeathCause::Starvation);
        }
    }

    /// Mark the animal dead and remove it from the field.
    ///
    /// The cell is only cleared if it still holds this animal.
    pub fn set_dead(&mut self, field: &mut dyn Field, cause: DeathCause) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.cause_of_death = Some(cause);
        if let Some(location) = self.location.take()
            && field.occupant_at(location) == Some(self.id)
        {
            field.clear(location);
        }
        debug!(
            animal_id = %self.id,
            species = %self.species,
            age = self.age,
            %cause,
            "Animal died"
        );
    }

    /// Move to `new_location`, vacating the old cell.
    ///
    /// If the field rejects the new cell the animal stays where it was.
    ///
    /// # Errors
    ///
    /// [`AnimalError::NotInField`] if the animal is dead,
    /// [`AnimalError::Field`] if the new cell is off the grid or taken.
    pub fn set_location(
        &mut self,
        field: &mut dyn Field,
        new_location: Location,
    ) -> Result<(), AnimalError> {
        let Some(old) = self.location.filter(|_| self.alive) else {
            return Err(AnimalError::NotInField(self.id));
        };
        if old == new_location {
            return Ok(());
        }
        field.place(self.id, new_location)?;
        if field.occupant_at(old) == Some(self.id) {
            field.clear(old);
        }
        self.location = Some(new_location);
        Ok(())
    }

    /// Whether the animal has reached breeding age.
    pub fn can_breed(&self) -> bool {
        self.age >= self.config.breeding_age
    }

    /// Unique id, also the value stored in the field cell.
    pub const fn id(&self) -> AnimalId {
        self.id
    }

    /// Species of this animal.
    pub const fn species(&self) -> Species {
        self.species
    }

    /// Whether the animal is still alive.
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Whether the animal currently occupies a field cell.
    pub const fn is_bound(&self) -> bool {
        self.location.is_some()
    }

    /// Current age in ticks.
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Overwrite the age, e.g. when restoring a saved state.
    ///
    /// Does not trigger death; the next [`increment_age`](Self::increment_age)
    /// applies the `max_age` check.
    pub const fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    /// Current food level.
    pub const fn food_level(&self) -> u32 {
        self.food_level
    }

    /// Overwrite the food level.
    pub const fn set_food_level(&mut self, food_level: u32) {
        self.food_level = food_level;
    }

    /// Gender drawn at construction.
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Current cell, `None` once dead.
    pub const fn location(&self) -> Option<Location> {
        self.location
    }

    /// Why the animal died, `None` while alive.
    pub const fn cause_of_death(&self) -> Option<DeathCause> {
        self.cause_of_death
    }

    /// The species parameters this animal was created with.
    pub fn config(&self) -> &SpeciesConfig {
        &self.config
    }

    /// A new handle to the shared species parameters, for offspring.
    pub fn shared_config(&self) -> Arc<SpeciesConfig> {
        Arc::clone(&self.config)
    }

    /// Age at which breeding becomes possible.
    pub fn breeding_age(&self) -> u32 {
        self.config.breeding_age
    }

    /// Age beyond which the animal dies.
    pub fn max_age(&self) -> u32 {
        self.config.max_age
    }

    /// Per-tick chance of giving birth.
    pub fn breeding_probability(&self) -> f64 {
        self.config.breeding_probability
    }

    /// Largest possible litter.
    pub fn max_litter_size(&self) -> u32 {
        self.config.max_litter_size
    }

    /// Food level after a meal.
    pub fn food_value(&self) -> u32 {
        self.config.food_value
    }
}
