//! Foxes: the predator.
//!
//! A fox ages, then hunts: it scans the neighbouring cells in random order
//! and eats the first live rabbit it finds, refilling its food level and
//! stepping into the rabbit's cell. A fox that found nothing gets hungry
//! instead. If it survives it gives birth, and a fox that did not eat
//! wanders to a free cell or dies of overcrowding.

use tracing::debug;
use warren_types::{DeathCause, Species};
use warren_world::RandomSource;

use crate::animal::Animal;
use crate::behaviour::{self, Behaviour, Habitat};
use crate::breeding;
use crate::config::SpeciesConfig;
use crate::error::AnimalError;

/// The species foxes eat.
const PREY: Species = Species::Rabbit;

/// Predator behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fox;

impl Fox {
    /// Eat the first live rabbit next to `fox` and take its cell.
    ///
    /// Returns whether the fox ate.
    fn hunt(fox: &mut Animal, habitat: &mut Habitat<'_>) -> Result<bool, AnimalError> {
        let Some(here) = fox.location() else {
            return Ok(false);
        };
        for location in habitat.field.adjacent_locations(here, habitat.rng) {
            let Some(occupant) = habitat.field.occupant_at(location) else {
                continue;
            };
            let Some(prey) = habitat.neighbours.get_mut(occupant) else {
                continue;
            };
            if prey.species() != PREY || !prey.is_alive() {
                continue;
            }
            prey.set_dead(habitat.field, DeathCause::Eaten);
            fox.set_food_level(fox.food_value());
            fox.set_location(habitat.field, location)?;
            debug!(fox = %fox.id(), prey = %occupant, %location, "Fox ate rabbit");
            return Ok(true);
        }
        Ok(false)
    }
}

impl Behaviour for Fox {
    fn species(&self) -> Species {
        Species::Fox
    }

    fn initial_food_level(
        &self,
        config: &SpeciesConfig,
        random_age: bool,
        rng: &mut dyn RandomSource,
    ) -> u32 {
        if random_age {
            rng.next_int(config.food_value)
        } else {
            config.food_value
        }
    }

    fn act(
        &self,
        animal: &mut Animal,
        habitat: &mut Habitat<'_>,
        new_animals: &mut Vec<Animal>,
    ) -> Result<(), AnimalError> {
        animal.increment_age(habitat.field);
        if !animal.is_alive() {
            return Ok(());
        }
        let fed = Self::hunt(animal, habitat)?;
        if !fed {
            animal.increment_hunger(habitat.field);
            if !animal.is_alive() {
                return Ok(());
            }
        }
        breeding::give_birth(animal, habitat.field, habitat.rng, new_animals)?;
        if fed {
            return Ok(());
        }
        behaviour::wander(animal, habitat)
    }
}
