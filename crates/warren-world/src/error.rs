//! Error types for the `warren-world` crate.

use warren_types::{AnimalId, Location};

/// Errors that can occur during field operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The location lies outside the grid.
    #[error("location {location} is outside the {rows}x{cols} field")]
    OutOfBounds {
        /// The offending location.
        location: Location,
        /// Number of rows in the field.
        rows: u32,
        /// Number of columns in the field.
        cols: u32,
    },

    /// The cell already holds a different animal.
    #[error("cell {location} is already occupied by {occupant}")]
    CellOccupied {
        /// The contested cell.
        location: Location,
        /// The animal currently in the cell.
        occupant: AnimalId,
    },

    /// A field must have at least one row and one column.
    #[error("invalid field dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
    },
}
