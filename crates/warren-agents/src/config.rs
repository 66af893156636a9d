//! Per-species configuration.
//!
//! Every animal of a species shares one [`SpeciesConfig`] through an `Arc`.
//! The record is never written after construction, so one animal cannot
//! change the breeding parameters of another.

use serde::{Deserialize, Serialize};

use crate::error::SpeciesConfigError;

/// Immutable lifecycle parameters for one species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesConfig {
    /// Age at which an animal can start to breed.
    pub breeding_age: u32,

    /// Age an animal can live to. Exceeding it is fatal.
    pub max_age: u32,

    /// Chance per tick that a breeding-age animal gives birth.
    pub breeding_probability: f64,

    /// Upper bound of a litter. Litters hold between 1 and this many young.
    pub max_litter_size: u32,

    /// Food level on construction and after a meal.
    pub food_value: u32,
}

impl SpeciesConfig {
    /// Build a validated configuration.
    pub fn new(
        breeding_age: u32,
        max_age: u32,
        breeding_probability: f64,
        max_litter_size: u32,
        food_value: u32,
    ) -> Result<Self, SpeciesConfigError> {
        let config = Self {
            breeding_age,
            max_age,
            breeding_probability,
            max_litter_size,
            food_value,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default fox parameters.
    pub const fn fox() -> Self {
        Self {
            breeding_age: 15,
            max_age: 150,
            breeding_probability: 0.08,
            max_litter_size: 2,
            food_value: 9,
        }
    }

    /// Default rabbit parameters.
    pub const fn rabbit() -> Self {
        Self {
            breeding_age: 5,
            max_age: 40,
            breeding_probability: 0.12,
            max_litter_size: 4,
            food_value: 9,
        }
    }

    /// Check the invariants every animal relies on.
    pub fn validate(&self) -> Result<(), SpeciesConfigError> {
        if self.max_age == 0 {
            return Err(SpeciesConfigError::InvalidMaxAge(self.max_age));
        }
        if !(0.0..=1.0).contains(&self.breeding_probability) {
            return Err(SpeciesConfigError::InvalidProbability(
                self.breeding_probability,
            ));
        }
        if self.food_value == 0 {
            return Err(SpeciesConfigError::InvalidFoodValue(self.food_value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SpeciesConfig::fox().validate().is_ok());
        assert!(SpeciesConfig::rabbit().validate().is_ok());
    }

    #[test]
    fn default_values() {
        let fox = SpeciesConfig::fox();
        assert_eq!(fox.breeding_age, 15);
        assert_eq!(fox.max_age, 150);
        assert_eq!(fox.max_litter_size, 2);
        let rabbit = SpeciesConfig::rabbit();
        assert_eq!(rabbit.breeding_age, 5);
        assert_eq!(rabbit.max_age, 40);
        assert_eq!(rabbit.max_litter_size, 4);
    }

    #[test]
    fn zero_max_age_rejected() {
        assert_eq!(
            SpeciesConfig::new(0, 0, 0.5, 2, 5),
            Err(SpeciesConfigError::InvalidMaxAge(0))
        );
    }

    #[test]
    fn probability_out_of_range_rejected() {
        assert!(matches!(
            SpeciesConfig::new(1, 10, 1.5, 2, 5),
            Err(SpeciesConfigError::InvalidProbability(_))
        ));
        assert!(matches!(
            SpeciesConfig::new(1, 10, -0.1, 2, 5),
            Err(SpeciesConfigError::InvalidProbability(_))
        ));
        assert!(matches!(
            SpeciesConfig::new(1, 10, f64::NAN, 2, 5),
            Err(SpeciesConfigError::InvalidProbability(_))
        ));
    }

    #[test]
    fn probability_bounds_accepted() {
        assert!(SpeciesConfig::new(1, 10, 0.0, 2, 5).is_ok());
        assert!(SpeciesConfig::new(1, 10, 1.0, 2, 5).is_ok());
    }

    #[test]
    fn zero_food_value_rejected() {
        assert_eq!(
            SpeciesConfig::new(1, 10, 0.5, 2, 0),
            Err(SpeciesConfigError::InvalidFoodValue(0))
        );
    }

    #[test]
    fn zero_litter_is_allowed() {
        assert!(SpeciesConfig::new(1, 10, 0.5, 0, 5).is_ok());
    }

    #[test]
    fn deserialize_from_json() {
        let json = r#"{"breeding_age":3,"max_age":20,"breeding_probability":0.5,"max_litter_size":2,"food_value":4}"#;
        let config: Result<SpeciesConfig, _> = serde_json::from_str(json);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_else(SpeciesConfig::rabbit);
        assert_eq!(config.max_age, 20);
        assert_eq!(config.food_value, 4);
    }

    #[test]
    fn negative_age_fails_to_deserialize() {
        let json = r#"{"breeding_age":-3,"max_age":20,"breeding_probability":0.5,"max_litter_size":2,"food_value":4}"#;
        let config: Result<SpeciesConfig, _> = serde_json::from_str(json);
        assert!(config.is_err());
    }
}
