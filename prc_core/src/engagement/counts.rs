//! Confrontation unit counts for both domains

use crate::confrontation::UnitCounts;
use crate::types::{ConfrontationDomain, PerSide, Side};
use serde::{Deserialize, Serialize};

/// Per-domain, per-side unit counts feeding the confrontations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfrontationCounts {
    #[serde(default)]
    pub electronic_warfare: PerSide<UnitCounts>,
    #[serde(default)]
    pub air_defense: PerSide<UnitCounts>,
}

impl ConfrontationCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(&self, domain: ConfrontationDomain) -> &PerSide<UnitCounts> {
        match domain {
            ConfrontationDomain::ElectronicWarfare => &self.electronic_warfare,
            ConfrontationDomain::AirDefense => &self.air_defense,
        }
    }

    fn domain_mut(&mut self, domain: ConfrontationDomain) -> &mut PerSide<UnitCounts> {
        match domain {
            ConfrontationDomain::ElectronicWarfare => &mut self.electronic_warfare,
            ConfrontationDomain::AirDefense => &mut self.air_defense,
        }
    }

    pub fn get(&self, domain: ConfrontationDomain, side: Side, unit: &str) -> u32 {
        self.domain(domain)[side].get(unit).copied().unwrap_or(0)
    }

    /// Set one count, returns whether anything changed
    ///
    /// A count of zero removes the unit type.
    pub fn set(&mut self, domain: ConfrontationDomain, side: Side, unit: &str, count: u32) -> bool {
        let counts = &mut self.domain_mut(domain)[side];
        if count == 0 {
            return counts.remove(unit).is_some();
        }
        counts.insert(unit.to_string(), count) != Some(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut counts = ConfrontationCounts::new();
        let ew = ConfrontationDomain::ElectronicWarfare;
        assert!(counts.set(ew, Side::Enemy, "BGE", 2));
        assert!(!counts.set(ew, Side::Enemy, "BGE", 2));
        assert_eq!(counts.get(ew, Side::Enemy, "BGE"), 2);
        assert_eq!(counts.get(ew, Side::Friendly, "BGE"), 0);
        assert_eq!(counts.get(ConfrontationDomain::AirDefense, Side::Enemy, "BGE"), 0);
        assert!(counts.set(ew, Side::Enemy, "BGE", 0));
        assert!(counts.domain(ew).enemy.is_empty());
    }
}
