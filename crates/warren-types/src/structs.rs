//! Value structs shared across the workspace.

use serde::{Deserialize, Serialize};

/// A cell coordinate in the field.
///
/// Locations are plain values: two locations are equal when both the row
/// and the column match. Ordering is row-major, which is also the order the
/// simulator scans the field when populating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Zero-based row index.
    pub row: u32,
    /// Zero-based column index.
    pub col: u32,
}

impl Location {
    /// Create a location at `(row, col)`.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Whether `other` is one of the eight cells surrounding this one.
    ///
    /// A location is not adjacent to itself.
    pub const fn is_adjacent_to(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && !(dr == 0 && dc == 0)
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
