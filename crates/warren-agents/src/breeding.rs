//! Breeding.
//!
//! Once per turn a live animal of breeding age rolls against its species'
//! breeding probability. On success the litter size is uniform in
//! `[1, max_litter_size]`, and each young is placed in a free neighbouring
//! cell until the litter or the free cells run out. Breeding never changes
//! the parent's age, food level, or location.

use tracing::debug;
use warren_world::{Field, RandomSource};

use crate::animal::Animal;
use crate::error::AnimalError;

/// Roll for a litter. Returns 0 when the animal does not give birth.
pub fn litter_size(animal: &Animal, rng: &mut dyn RandomSource) -> u32 {
    if !animal.is_alive() || !animal.can_breed() {
        return 0;
    }
    if rng.next_float() >= animal.breeding_probability() {
        return 0;
    }
    let max = animal.max_litter_size();
    if max == 0 {
        return 0;
    }
    rng.next_int(max).saturating_add(1)
}

/// Give birth around `parent`, pushing each newborn onto `new_animals`.
///
/// Returns how many were born, which may be fewer than the litter when the
/// parent is hemmed in.
pub fn give_birth(
    parent: &Animal,
    field: &mut dyn Field,
    rng: &mut dyn RandomSource,
    new_animals: &mut Vec<Animal>,
) -> Result<u32, AnimalError> {
    let births = litter_size(parent, rng);
    if births == 0 {
        return Ok(0);
    }
    let Some(here) = parent.location() else {
        return Ok(0);
    };

    let free = field.free_adjacent_locations(here, rng);
    let mut born: u32 = 0;
    for location in free.into_iter().take(usize::try_from(births).unwrap_or(usize::MAX)) {
        let young = Animal::new(
            parent.species(),
            parent.shared_config(),
            false,
            field,
            location,
            rng,
        )?;
        new_animals.push(young);
        born = born.saturating_add(1);
    }

    debug!(
        parent = %parent.id(),
        species = %parent.species(),
        litter = births,
        born,
        "Animal gave birth"
    );
    Ok(born)
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use warren_types::{AnimalId, Location, Species};
    use warren_world::{GridField, SeededRandom};

    use super::*;
    use crate::config::SpeciesConfig;

    fn config(probability: f64, litter: u32) -> Arc<SpeciesConfig> {
        Arc::new(SpeciesConfig::new(5, 40, probability, litter, 9).unwrap())
    }

    fn parent_at(
        field: &mut GridField,
        rng: &mut SeededRandom,
        config: Arc<SpeciesConfig>,
        at: Location,
        age: u32,
    ) -> Animal {
        let mut animal = Animal::new(Species::Rabbit, config, false, field, at, rng).unwrap();
        animal.set_age(age);
        animal
    }

    #[test]
    fn too_young_never_breeds() {
        let mut field = GridField::new(5, 5).unwrap();
        let mut rng = SeededRandom::new(1);
        let parent = parent_at(&mut field, &mut rng, config(1.0, 4), Location::new(2, 2), 4);
        for _ in 0..100 {
            assert_eq!(litter_size(&parent, &mut rng), 0);
        }
    }

    #[test]
    fn zero_probability_never_breeds() {
        let mut field = GridField::new(5, 5).unwrap();
        let mut rng = SeededRandom::new(2);
        let parent = parent_at(&mut field, &mut rng, config(0.0, 4), Location::new(2, 2), 10);
        let mut young = Vec::new();
        for _ in 0..500 {
            let born = give_birth(&parent, &mut field, &mut rng, &mut young);
            assert_eq!(born, Ok(0));
        }
        assert!(young.is_empty());
    }

    #[test]
    fn certain_probability_always_breeds_within_bounds() {
        let mut field = GridField::new(5, 5).unwrap();
        let mut rng = SeededRandom::new(3);
        let parent = parent_at(&mut field, &mut rng, config(1.0, 3), Location::new(2, 2), 5);
        for _ in 0..500 {
            let size = litter_size(&parent, &mut rng);
            assert!((1..=3).contains(&size));
        }
    }

    #[test]
    fn zero_litter_size_never_breeds() {
        let mut field = GridField::new(5, 5).unwrap();
        let mut rng = SeededRandom::new(4);
        let parent = parent_at(&mut field, &mut rng, config(1.0, 0), Location::new(2, 2), 10);
        assert_eq!(litter_size(&parent, &mut rng), 0);
    }

    #[test]
    fn newborns_fill_free_neighbours_only() {
        let mut field = GridField::new(3, 3).unwrap();
        let mut rng = SeededRandom::new(5);
        let centre = Location::new(1, 1);
        let parent = parent_at(&mut field, &mut rng, config(1.0, 4), centre, 10);
        // Leave only one free neighbour.
        for loc in field.adjacent_locations(centre, &mut rng) {
            if loc != Location::new(2, 2) {
                let _ = field.place(AnimalId::new(), loc);
            }
        }
        let mut young = Vec::new();
        let born = give_birth(&parent, &mut field, &mut rng, &mut young);
        assert_eq!(born, Ok(1));
        assert_eq!(young.len(), 1);
        assert_eq!(young.first().and_then(Animal::location), Some(Location::new(2, 2)));
    }

    #[test]
    fn newborns_are_young_and_parent_untouched() {
        let mut field = GridField::new(5, 5).unwrap();
        let mut rng = SeededRandom::new(6);
        let at = Location::new(2, 2);
        let parent = parent_at(&mut field, &mut rng, config(1.0, 4), at, 7);
        let food = parent.food_level();
        let mut young = Vec::new();
        let born = give_birth(&parent, &mut field, &mut rng, &mut young).unwrap();
        assert!(born >= 1);
        assert_eq!(usize::try_from(born).ok(), Some(young.len()));
        for child in &young {
            assert_eq!(child.age(), 0);
            assert!(child.is_alive());
            assert_eq!(child.species(), Species::Rabbit);
            let loc = child.location().unwrap();
            assert!(loc.is_adjacent_to(at));
            assert_eq!(field.occupant_at(loc), Some(child.id()));
        }
        assert_eq!(parent.age(), 7);
        assert_eq!(parent.food_level(), food);
        assert_eq!(parent.location(), Some(at));
    }

    #[test]
    fn no_free_cells_no_newborns() {
        let mut field = GridField::new(1, 1).unwrap();
        let mut rng = SeededRandom::new(7);
        let parent = parent_at(&mut field, &mut rng, config(1.0, 4), Location::new(0, 0), 10);
        let mut young = Vec::new();
        assert_eq!(give_birth(&parent, &mut field, &mut rng, &mut young), Ok(0));
        assert!(young.is_empty());
    }
}
