//! ScoreBreakdown - the intermediate totals behind a side's score

use super::{accumulate_side, ElementContribution, ScoreAccumulator, ScoringContext};
use crate::config::Dataset;
use crate::side::SideInput;
use crate::types::{MultiplierKey, Side};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every term of one side's combat power
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub side: Side,
    pub elements: Vec<ElementContribution>,
    pub elements_total: f64,
    pub support_fire_total: f64,
    /// Resolved value of each factor
    pub multipliers: BTreeMap<MultiplierKey, f64>,
    pub multiplier_average: f64,
    pub score: f64,
}

impl ScoreBreakdown {
    /// Score a side input and keep the intermediate totals
    pub fn compute(input: &SideInput, side: Side, dataset: &Dataset) -> Self {
        let acc = accumulate_side(input, &ScoringContext::new(side, dataset));
        Self::from_accumulator(side, acc)
    }

    pub fn from_accumulator(side: Side, acc: ScoreAccumulator) -> Self {
        let elements_total = acc.elements_total();
        let multiplier_average = acc.multiplier_average();
        let score = acc.score();
        ScoreBreakdown {
            side,
            elements: acc.elements,
            elements_total,
            support_fire_total: acc.support_fire_total,
            multipliers: acc.multipliers,
            multiplier_average,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::compute_score;
    use crate::side::{ElementEntry, MultiplierSelection, SupportFireCount};
    use crate::types::Category;

    #[test]
    fn test_breakdown_matches_score() {
        let dataset = Dataset::default();
        let input = SideInput::new()
            .with_element(ElementEntry::new(Category::Medium, "RCC").with_quantity(2).with_label("1st RCC"))
            .with_element(ElementEntry::new(Category::Small, "Cia Fuz Mec"))
            .with_support_fire(SupportFireCount::new().with("Bia 105", 2))
            .with_multipliers(MultiplierSelection::new().with(MultiplierKey::Morale, "Low"));

        let breakdown = ScoreBreakdown::compute(&input, Side::Friendly, &dataset);
        assert_eq!(breakdown.elements.len(), 2);
        assert_eq!(breakdown.elements[0].label, "1st RCC");
        assert!((breakdown.elements_total - 5.6).abs() < 1e-9);
        assert_eq!(breakdown.multipliers.len(), 9);
        assert!((breakdown.multipliers[&MultiplierKey::Morale] - 0.5).abs() < f64::EPSILON);
        assert_eq!(breakdown.score, compute_score(&input, Side::Friendly, &dataset));
    }

    #[test]
    fn test_breakdown_serializes() {
        let dataset = Dataset::default();
        let breakdown = ScoreBreakdown::compute(&SideInput::new(), Side::Enemy, &dataset);
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["side"], "enemy");
        assert_eq!(json["score"], 0.0);
    }
}
