//! Rabbits: the prey.
//!
//! A rabbit ages, gets hungry, and if it survives: gives birth, grazes,
//! and moves to a free neighbouring cell. Grass is unlimited, so grazing
//! always refills the food level. A rabbit with nowhere to move dies of
//! overcrowding.

use warren_types::Species;
use warren_world::RandomSource;

use crate::animal::Animal;
use crate::behaviour::{self, Behaviour, Habitat};
use crate::breeding;
use crate::config::SpeciesConfig;
use crate::error::AnimalError;

/// Prey behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rabbit;

impl Behaviour for Rabbit {
    fn species(&self) -> Species {
        Species::Rabbit
    }

    fn initial_food_level(
        &self,
        config: &SpeciesConfig,
        _random_age: bool,
        _rng: &mut dyn RandomSource,
    ) -> u32 {
        config.food_value
    }

    fn act(
        &self,
        animal: &mut Animal,
        habitat: &mut Habitat<'_>,
        new_animals: &mut Vec<Animal>,
    ) -> Result<(), AnimalError> {
        animal.increment_age(habitat.field);
        animal.increment_hunger(habitat.field);
        if !animal.is_alive() {
            return Ok(());
        }
        breeding::give_birth(animal, habitat.field, habitat.rng, new_animals)?;
        animal.set_food_level(animal.food_value());
        behaviour::wander(animal, habitat)
    }
}
