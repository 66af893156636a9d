//! Head counts per species.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use warren_agents::Population;
use warren_types::Species;

/// Live animals per species at one point in time.
///
/// Every species appears, with a zero count if it has died out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Census {
    counts: BTreeMap<Species, usize>,
}

impl Census {
    /// Count the live animals in `population`.
    pub fn take(population: &Population) -> Self {
        let counts = Species::ALL
            .iter()
            .map(|&species| (species, population.count(species)))
            .collect();
        Self { counts }
    }

    /// Live animals of `species`.
    pub fn count(&self, species: Species) -> usize {
        self.counts.get(&species).copied().unwrap_or(0)
    }

    /// Live animals of every species.
    pub fn total(&self) -> usize {
        self.counts.values().fold(0, |acc, n| acc.saturating_add(*n))
    }

    /// The ecosystem is viable while more than one species is alive.
    pub fn is_viable(&self) -> bool {
        self.counts.values().filter(|&&n| n > 0).count() > 1
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (species, count) in &self.counts {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{species}: {count}")?;
        }
        Ok(())
    }
}
