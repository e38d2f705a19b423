//! EngagementReport - everything derived from one engagement state

use crate::confrontation::ConfrontationOutcome;
use crate::degradation::DegradationProjection;
use crate::ratio::{RatioReading, RatioResult, RequiredRatio};
use crate::score::ScoreBreakdown;
use crate::types::{PerSide, Side};
use serde::{Deserialize, Serialize};

/// Mission requirement check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementCheck {
    pub mission: String,
    /// `None` when the mission is not in the table
    pub required: Option<RequiredRatio>,
    pub meets: bool,
}

/// Result of evaluating an engagement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementReport {
    pub revision: u64,
    pub breakdowns: PerSide<ScoreBreakdown>,
    pub confrontations: Vec<ConfrontationOutcome>,
    pub ratio: RatioResult,
    pub reading: RatioReading,
    pub requirement: RequirementCheck,
    pub profile: String,
    pub attacker: Side,
    pub projection: DegradationProjection,
}

impl EngagementReport {
    pub fn score(&self, side: Side) -> f64 {
        self.breakdowns[side].score
    }

    /// Reading of the ratio after degradation
    pub fn projected_reading(&self) -> RatioReading {
        RatioReading::of(self.projection.projected_ratio)
    }
}
