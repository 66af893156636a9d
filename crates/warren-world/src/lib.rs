//! Field and randomness capabilities for the Warren simulation.
//!
//! This crate models the spatial side of the world: a rectangular grid of
//! cells, each holding at most one animal, with neighbour queries over the
//! eight surrounding cells. It also owns the injected random source that
//! every other crate threads through construction and tick calls.
//!
//! # Modules
//!
//! - [`error`] -- Error types for field operations.
//! - [`field`] -- The [`Field`] capability trait consumed by animals.
//! - [`grid`] -- [`GridField`], the dense grid implementation.
//! - [`random`] -- [`RandomSource`] and the seeded [`SeededRandom`].

pub mod error;
pub mod field;
pub mod grid;
pub mod random;

// Re-export primary types at crate root.
pub use error::FieldError;
pub use field::Field;
pub use grid::GridField;
pub use random::{RandomSource, SeededRandom, shuffle};
