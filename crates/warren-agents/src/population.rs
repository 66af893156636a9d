//! The set of animals a simulation drives, in a stable turn order.

use std::collections::BTreeMap;

use warren_types::{AnimalId, Species};

use crate::animal::Animal;

/// Animals keyed by id, iterated in insertion order.
///
/// An animal can be [`take`](Self::take)n out for its turn and
/// [`restore`](Self::restore)d afterwards without losing its place in the
/// order.
#[derive(Debug, Default)]
pub struct Population {
    animals: BTreeMap<AnimalId, Animal>,
    order: Vec<AnimalId>,
}

impl Population {
    /// An empty population.
    pub const fn new() -> Self {
        Self {
            animals: BTreeMap::new(),
            order: Vec::new(),
        }
    }

    /// Add an animal at the end of the turn order.
    pub fn insert(&mut self, animal: Animal) {
        let id = animal.id();
        if self.animals.insert(id, animal).is_none() {
            self.order.push(id);
        }
    }

    /// Look up an animal.
    pub fn get(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.get(&id)
    }

    /// Look up an animal mutably.
    pub fn get_mut(&mut self, id: AnimalId) -> Option<&mut Animal> {
        self.animals.get_mut(&id)
    }

    /// Remove an animal for the duration of its turn. Its place in the order
    /// is kept.
    pub fn take(&mut self, id: AnimalId) -> Option<Animal> {
        self.animals.remove(&id)
    }

    /// Put back an animal previously taken. It resumes its old place in the
    /// order.
    pub fn restore(&mut self, animal: Animal) {
        self.animals.insert(animal.id(), animal);
    }

    /// The current turn order.
    pub fn snapshot(&self) -> Vec<AnimalId> {
        self.order.clone()
    }

    /// Number of animals held, dead or alive.
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    /// Whether there are no animals.
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Animals in turn order.
    pub fn animals(&self) -> impl Iterator<Item = &Animal> {
        self.order.iter().filter_map(|id| self.animals.get(id))
    }

    /// Drop every dead animal, returning how many were removed.
    pub fn remove_dead(&mut self) -> usize {
        let before = self.animals.len();
        self.animals.retain(|_, animal| animal.is_alive());
        let animals = &self.animals;
        self.order.retain(|id| animals.contains_key(id));
        before.saturating_sub(self.animals.len())
    }

    /// Live animals of `species`.
    pub fn count(&self, species: Species) -> usize {
        self.animals
            .values()
            .filter(|animal| animal.is_alive() && animal.species() == species)
            .count()
    }

    /// Remove every animal.
    pub fn clear(&mut self) {
        self.animals.clear();
        self.order.clear();
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use warren_types::{DeathCause, Location};
    use warren_world::{GridField, SeededRandom};

    use super::*;
    use crate::config::SpeciesConfig;

    fn spawn(field: &mut GridField, rng: &mut SeededRandom, species: Species, col: u32) -> Animal {
        let config = match species {
            Species::Fox => SpeciesConfig::fox(),
            Species::Rabbit => SpeciesConfig::rabbit(),
        };
        Animal::new(species, Arc::new(config), false, field, Location::new(0, col), rng).unwrap()
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut field = GridField::new(1, 5).unwrap();
        let mut rng = SeededRandom::new(1);
        let mut population = Population::new();
        let mut ids = Vec::new();
        for col in 0..5 {
            let animal = spawn(&mut field, &mut rng, Species::Rabbit, col);
            ids.push(animal.id());
            population.insert(animal);
        }
        assert_eq!(population.snapshot(), ids);
        let iterated: Vec<AnimalId> = population.animals().map(Animal::id).collect();
        assert_eq!(iterated, ids);
    }

    #[test]
    fn take_and_restore_keep_position() {
        let mut field = GridField::new(1, 3).unwrap();
        let mut rng = SeededRandom::new(2);
        let mut population = Population::new();
        for col in 0..3 {
            population.insert(spawn(&mut field, &mut rng, Species::Rabbit, col));
        }
        let order = population.snapshot();
        let middle = order.get(1).copied().unwrap();

        let taken = population.take(middle).unwrap();
        assert_eq!(population.len(), 2);
        assert!(population.get(middle).is_none());
        assert_eq!(population.animals().count(), 2);

        population.restore(taken);
        assert_eq!(population.snapshot(), order);
        assert_eq!(population.len(), 3);
    }

    #[test]
    fn remove_dead_drops_from_order() {
        let mut field = GridField::new(1, 3).unwrap();
        let mut rng = SeededRandom::new(3);
        let mut population = Population::new();
        for col in 0..3 {
            population.insert(spawn(&mut field, &mut rng, Species::Rabbit, col));
        }
        let first = population.snapshot().first().copied().unwrap();
        population
            .get_mut(first)
            .unwrap()
            .set_dead(&mut field, DeathCause::Eaten);

        assert_eq!(population.count(Species::Rabbit), 2);
        assert_eq!(population.remove_dead(), 1);
        assert_eq!(population.len(), 2);
        assert!(!population.snapshot().contains(&first));
        assert_eq!(population.remove_dead(), 0);
    }

    #[test]
    fn count_per_species() {
        let mut field = GridField::new(1, 4).unwrap();
        let mut rng = SeededRandom::new(4);
        let mut population = Population::new();
        population.insert(spawn(&mut field, &mut rng, Species::Fox, 0));
        population.insert(spawn(&mut field, &mut rng, Species::Rabbit, 1));
        population.insert(spawn(&mut field, &mut rng, Species::Rabbit, 2));
        assert_eq!(population.count(Species::Fox), 1);
        assert_eq!(population.count(Species::Rabbit), 2);

        population.clear();
        assert!(population.is_empty());
        assert!(population.snapshot().is_empty());
    }
}
