//! ScoreAccumulator - Collects contributions before they become a score

use crate::sanitize::clamp_non_negative;
use crate::types::MultiplierKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One element line's share of the element sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementContribution {
    /// Coefficient key of the element
    pub key: String,
    /// Display label, empty when none was entered
    pub label: String,
    pub value: f64,
}

/// Accumulates contributions from the score sources of one side
///
/// Every value written is clamped to be non-negative, so the final score
/// can never go below zero.
#[derive(Debug, Clone, Default)]
pub struct ScoreAccumulator {
    pub elements: Vec<ElementContribution>,
    pub support_fire_total: f64,
    pub multipliers: BTreeMap<MultiplierKey, f64>,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, key: &str, label: &str, value: f64) {
        self.elements.push(ElementContribution {
            key: key.to_string(),
            label: label.to_string(),
            value: clamp_non_negative(value),
        });
    }

    pub fn add_support_fire(&mut self, value: f64) {
        self.support_fire_total += clamp_non_negative(value);
    }

    /// Record a factor's resolved value, a later write replaces an earlier one
    pub fn set_multiplier(&mut self, key: MultiplierKey, value: f64) {
        self.multipliers.insert(key, clamp_non_negative(value));
    }

    pub fn elements_total(&self) -> f64 {
        self.elements.iter().map(|e| e.value).sum()
    }

    /// Mean of the recorded factor values, 1.0 when none were recorded
    pub fn multiplier_average(&self) -> f64 {
        if self.multipliers.is_empty() {
            return 1.0;
        }
        self.multipliers.values().sum::<f64>() / self.multipliers.len() as f64
    }

    /// `(elements + support fire) × multiplier average`
    pub fn score(&self) -> f64 {
        super::combat_power(self.elements_total(), self.support_fire_total, self.multiplier_average())
    }
}
