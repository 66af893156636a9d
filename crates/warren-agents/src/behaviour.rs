//! Species behaviour and the habitat an animal acts in.
//!
//! [`Animal`] carries the shared lifecycle data. What an animal actually
//! does on its turn is supplied by a [`Behaviour`], looked up from the
//! animal's species with [`behaviour_for`].

use warren_types::{DeathCause, Species};
use warren_world::{Field, RandomSource};

use crate::animal::Animal;
use crate::config::SpeciesConfig;
use crate::error::AnimalError;
use crate::fox::Fox;
use crate::population::Population;
use crate::rabbit::Rabbit;

/// Everything an animal can see and touch during its turn.
///
/// `neighbours` is the rest of the population. The acting animal is taken
/// out of it for the duration of its turn, so a predator can reach its prey
/// while holding a mutable borrow of itself.
pub struct Habitat<'a> {
    /// The grid the animals live on.
    pub field: &'a mut dyn Field,
    /// Random source for every draw made this turn.
    pub rng: &'a mut dyn RandomSource,
    /// Every other animal in the simulation.
    pub neighbours: &'a mut Population,
}

/// Per-species policy plugged into the shared lifecycle.
pub trait Behaviour: Sync {
    /// The species this behaviour drives.
    fn species(&self) -> Species;

    /// Food level for a newly constructed animal.
    fn initial_food_level(
        &self,
        config: &SpeciesConfig,
        random_age: bool,
        rng: &mut dyn RandomSource,
    ) -> u32;

    /// Run one turn. Offspring go onto `new_animals`.
    fn act(
        &self,
        animal: &mut Animal,
        habitat: &mut Habitat<'_>,
        new_animals: &mut Vec<Animal>,
    ) -> Result<(), AnimalError>;
}

/// The behaviour for `species`.
pub fn behaviour_for(species: Species) -> &'static dyn Behaviour {
    match species {
        Species::Fox => &Fox,
        Species::Rabbit => &Rabbit,
    }
}

/// Move to a free neighbouring cell, or die of overcrowding when there is
/// nowhere to go.
pub(crate) fn wander(animal: &mut Animal, habitat: &mut Habitat<'_>) -> Result<(), AnimalError> {
    let Some(here) = animal.location() else {
        return Ok(());
    };
    match habitat.field.free_adjacent_location(here, habitat.rng) {
        Some(location) => animal.set_location(habitat.field, location),
        None => {
            animal.set_dead(habitat.field, DeathCause::Overcrowding);
            Ok(())
        }
    }
}
