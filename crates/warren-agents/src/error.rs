//! Error types for the warren-agents crate.
//!
//! Dying is a state transition, not an error. The variants here cover the
//! genuine precondition violations: a bad species configuration, a field
//! that refuses a placement, and moving an animal that is no longer in the
//! field.

use warren_types::AnimalId;
use warren_world::FieldError;

/// Rejected species configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpeciesConfigError {
    /// `max_age` must be at least 1.
    #[error("max_age must be positive, got {0}")]
    InvalidMaxAge(u32),

    /// `breeding_probability` must lie in `[0, 1]`.
    #[error("breeding_probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// `food_value` must be at least 1, or every animal starves on its first tick.
    #[error("food_value must be positive, got {0}")]
    InvalidFoodValue(u32),
}

/// Errors that can occur during animal operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnimalError {
    /// The species configuration failed validation.
    #[error("invalid species configuration: {source}")]
    Config {
        /// The underlying validation error.
        #[from]
        source: SpeciesConfigError,
    },

    /// The field rejected a placement.
    #[error("field error: {source}")]
    Field {
        /// The underlying field error.
        #[from]
        source: FieldError,
    },

    /// A location-changing operation was invoked on a dead animal.
    #[error("animal {0} is not in the field")]
    NotInField(AnimalId),
}
