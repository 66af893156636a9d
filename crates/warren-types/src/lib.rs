//! Shared type definitions for the Warren simulation.
//!
//! This crate is the single source of truth for the small value types used
//! across the workspace: identifiers, grid coordinates, and the enumerations
//! that describe species, gender, and causes of death.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`enums`] -- Enumeration types (species, gender, death causes)
//! - [`structs`] -- Value structs (grid [`Location`])

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{DeathCause, Gender, Species};
pub use ids::AnimalId;
pub use structs::Location;
