//! Animal lifecycle, breeding, and species behaviour for the Warren simulation.
//!
//! This crate contains the logic layer for animals: everything that operates
//! on animal state through the [`Field`] and [`RandomSource`] capabilities
//! without owning either. It sits between `warren-world` (the grid and the
//! random source) and `warren-core` (the tick loop that drives it).
//!
//! # Modules
//!
//! - [`animal`] -- The [`Animal`] lifecycle state machine (age, hunger, death,
//!   location binding).
//! - [`behaviour`] -- The [`Behaviour`] trait each species implements, and the
//!   [`Habitat`] an animal acts in.
//! - [`breeding`] -- Breeding rolls, litter sizes, and placing offspring.
//! - [`config`] -- Immutable per-species parameters ([`SpeciesConfig`]).
//! - [`error`] -- Error types ([`AnimalError`], [`SpeciesConfigError`]).
//! - [`fox`] -- The predator.
//! - [`population`] -- Ordered collection of animals ([`Population`]).
//! - [`rabbit`] -- The prey.
//!
//! [`Field`]: warren_world::Field
//! [`RandomSource`]: warren_world::RandomSource

pub mod animal;
pub mod behaviour;
pub mod breeding;
pub mod config;
pub mod error;
pub mod fox;
pub mod population;
pub mod rabbit;

// Re-export primary types at crate root for convenience.
pub use animal::Animal;
pub use behaviour::{Behaviour, Habitat, behaviour_for};
pub use breeding::{give_birth, litter_size};
pub use config::SpeciesConfig;
pub use error::{AnimalError, SpeciesConfigError};
pub use fox::Fox;
pub use population::Population;
pub use rabbit::Rabbit;
