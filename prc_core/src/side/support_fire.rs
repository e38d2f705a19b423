//! SupportFireCount - fire-support batteries and groups fielded by a side

use crate::config::CoefficientStore;
use crate::types::Side;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Support-fire type → number fielded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportFireCount {
    counts: BTreeMap<String, u32>,
}

impl SupportFireCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, count: u32) -> Self {
        self.set(name, count);
        self
    }

    /// Set the count of one type, returns whether anything changed
    ///
    /// A count of zero removes the type.
    pub fn set(&mut self, name: &str, count: u32) -> bool {
        if count == 0 {
            return self.counts.remove(name).is_some();
        }
        self.counts.insert(name.to_string(), count) != Some(count)
    }

    pub fn get(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `Σ count × typeCoefficient`, unknown types count as zero
    pub fn total(&self, store: &CoefficientStore, side: Side) -> f64 {
        self.iter()
            .map(|(name, count)| count as f64 * store.support_fire_coefficient(side, name))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_coefficients;

    #[test]
    fn test_total() {
        let store = default_coefficients();
        // 2 × 2.8 + 1 × 12.0
        let fire = SupportFireCount::new().with("GAC 155 AP", 2).with("GMF", 1);
        assert!((fire.total(&store, Side::Friendly) - 17.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_total_is_zero() {
        let store = default_coefficients();
        assert_eq!(SupportFireCount::new().total(&store, Side::Enemy), 0.0);
    }

    #[test]
    fn test_unknown_type_counts_zero() {
        let store = default_coefficients();
        let fire = SupportFireCount::new().with("Railgun", 5);
        assert_eq!(fire.total(&store, Side::Friendly), 0.0);
    }

    #[test]
    fn test_set_reports_changes() {
        let mut fire = SupportFireCount::new();
        assert!(fire.set("GAC 105", 3));
        assert!(!fire.set("GAC 105", 3));
        assert!(fire.set("GAC 105", 0));
        assert!(!fire.set("GAC 105", 0));
        assert!(fire.is_empty());
    }
}
