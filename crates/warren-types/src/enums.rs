//! Enumeration types for the Warren simulation.

use serde::{Deserialize, Serialize};

/// The species an animal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// Predator. Hunts rabbits in adjacent cells.
    Fox,
    /// Prey. Grazes and is hunted by foxes.
    Rabbit,
}

impl Species {
    /// All species, in census order.
    pub const ALL: [Self; 2] = [Self::Fox, Self::Rabbit];
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fox => write!(f, "fox"),
            Self::Rabbit => write!(f, "rabbit"),
        }
    }
}

/// Gender of an animal, drawn once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Female.
    Female,
    /// Male.
    Male,
}

/// Why an animal died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    /// Age exceeded the species' maximum age.
    OldAge,
    /// Food level ran out.
    Starvation,
    /// No free adjacent cell to move into.
    Overcrowding,
    /// Killed by a predator.
    Eaten,
}

impl core::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OldAge => write!(f, "old_age"),
            Self::Starvation => write!(f, "starvation"),
            Self::Overcrowding => write!(f, "overcrowding"),
            Self::Eaten => write!(f, "eaten"),
        }
    }
}
