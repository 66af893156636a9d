//! Dense grid implementation of [`Field`].
//!
//! Cells are stored row-major in a single `Vec<Option<AnimalId>>`. The grid
//! only records which animal holds which cell; the animals themselves live
//! in the driver's population.

use tracing::debug;
use warren_types::{AnimalId, Location};

use crate::error::FieldError;
use crate::field::Field;

/// A `rows x cols` field backed by a flat cell vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridField {
    rows: u32,
    cols: u32,
    cells: Vec<Option<AnimalId>>,
}

impl GridField {
    /// Create an empty field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidDimensions`] if either dimension is zero
    /// or the cell count does not fit in memory indices.
    pub fn new(rows: u32, cols: u32) -> Result<Self, FieldError> {
        let invalid = FieldError::InvalidDimensions { rows, cols };
        if rows == 0 || cols == 0 {
            return Err(invalid);
        }
        let size = usize::try_from(rows)
            .ok()
            .zip(usize::try_from(cols).ok())
            .and_then(|(r, c)| r.checked_mul(c))
            .ok_or(invalid)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![None; size],
        })
    }

    /// Number of cells currently holding an animal.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Flat index for `location`, or `None` if it is off the grid.
    fn index(&self, location: Location) -> Option<usize> {
        if !self.contains(location) {
            return None;
        }
        let row = usize::try_from(location.row).ok()?;
        let col = usize::try_from(location.col).ok()?;
        let cols = usize::try_from(self.cols).ok()?;
        row.checked_mul(cols)?.checked_add(col)
    }
}

impl Field for GridField {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn place(&mut self, occupant: AnimalId, location: Location) -> Result<(), FieldError> {
        let (rows, cols) = (self.rows, self.cols);
        let cell = self
            .index(location)
            .and_then(|idx| self.cells.get_mut(idx))
            .ok_or(FieldError::OutOfBounds {
                location,
                rows,
                cols,
            })?;
        let existing = *cell;
        match existing {
            Some(current) if current != occupant => {
                debug!(%location, %current, %occupant, "Placement rejected, cell occupied");
                Err(FieldError::CellOccupied {
                    location,
                    occupant: current,
                })
            }
            _ => {
                *cell = Some(occupant);
                Ok(())
            }
        }
    }

    fn clear(&mut self, location: Location) -> Option<AnimalId> {
        let idx = self.index(location)?;
        self.cells.get_mut(idx).and_then(Option::take)
    }

    fn occupant_at(&self, location: Location) -> Option<AnimalId> {
        let idx = self.index(location)?;
        self.cells.get(idx).copied().flatten()
    }

    fn clear_all(&mut self) {
        self.cells.fill(None);
    }
}
