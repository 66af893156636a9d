//! The field capability consumed by animals.
//!
//! Animals depend only on the operations below, never on how a field stores
//! its cells. Neighbour queries cover the eight surrounding cells (Moore
//! neighbourhood), clipped at the grid edges, and come back shuffled so that
//! no direction is favoured.

use warren_types::{AnimalId, Location};

use crate::error::FieldError;
use crate::random::{RandomSource, shuffle};

/// Row/column offsets of the eight surrounding cells.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid where each cell holds at most one animal.
pub trait Field {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// Record `occupant` in the cell at `location`.
    ///
    /// Placing an animal into the cell it already holds is a no-op.
    ///
    /// # Errors
    ///
    /// [`FieldError::OutOfBounds`] if the location is off the grid,
    /// [`FieldError::CellOccupied`] if another animal holds the cell.
    fn place(&mut self, occupant: AnimalId, location: Location) -> Result<(), FieldError>;

    /// Empty the cell at `location`, returning whoever was there.
    fn clear(&mut self, location: Location) -> Option<AnimalId>;

    /// The animal in the cell at `location`, if any.
    fn occupant_at(&self, location: Location) -> Option<AnimalId>;

    /// Empty every cell.
    fn clear_all(&mut self);

    /// Whether `location` lies on the grid.
    fn contains(&self, location: Location) -> bool {
        location.row < self.rows() && location.col < self.cols()
    }

    /// All in-bounds cells surrounding `location`, in random order.
    fn adjacent_locations(
        &self,
        location: Location,
        rng: &mut dyn RandomSource,
    ) -> Vec<Location> {
        let mut adjacent: Vec<Location> = NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = location.row.checked_add_signed(dr)?;
                let col = location.col.checked_add_signed(dc)?;
                Some(Location::new(row, col))
            })
            .filter(|loc| self.contains(*loc))
            .collect();
        shuffle(&mut adjacent, rng);
        adjacent
    }

    /// Surrounding cells that are currently empty, in random order.
    fn free_adjacent_locations(
        &self,
        location: Location,
        rng: &mut dyn RandomSource,
    ) -> Vec<Location> {
        let mut free = self.adjacent_locations(location, rng);
        free.retain(|loc| self.occupant_at(*loc).is_none());
        free
    }

    /// One empty surrounding cell, or `None` if all are taken.
    fn free_adjacent_location(
        &self,
        location: Location,
        rng: &mut dyn RandomSource,
    ) -> Option<Location> {
        self.free_adjacent_locations(location, rng).into_iter().next()
    }

    /// One surrounding cell chosen at random, occupied or not.
    fn random_adjacent_location(
        &self,
        location: Location,
        rng: &mut dyn RandomSource,
    ) -> Option<Location> {
        self.adjacent_locations(location, rng).into_iter().next()
    }
}
