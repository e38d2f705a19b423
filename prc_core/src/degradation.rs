//! Degradation projection - attrition of both scores over elapsed time
//!
//! A profile gives the fraction of combat power each role loses over the
//! 24 hour reference window. For `H` elapsed hours:
//!
//! ```text
//! reduction(role) = min(base(role) × H / 24, 0.95)
//! projected(side) = score(side) × (1 − reduction(role of side))
//! ```
//!
//! Examples with profile (attacker 0.25, defender 0.20):
//! - 0h: no reduction
//! - 12h: 12.5% / 10%
//! - 24h: 25% / 20%
//! - 120h: 95% (capped) / 95% (capped)

use crate::ratio::{compute_ratio, RatioResult};
use crate::sanitize::constants::{MAX_EFFECTIVE_REDUCTION, REFERENCE_WINDOW_HOURS};
use crate::sanitize::{clamp_fraction, clamp_hours, clamp_non_negative};
use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Base attrition fractions over the reference window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DegradationProfile {
    pub attacker: f64,
    pub defender: f64,
}

impl DegradationProfile {
    /// Create a profile, clamping both fractions into [0, 1]
    pub fn new(attacker: f64, defender: f64) -> Self {
        DegradationProfile {
            attacker: clamp_fraction(attacker),
            defender: clamp_fraction(defender),
        }
    }

    /// Profile with no attrition at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Reduction after `hours`, capped
    pub fn effective_reduction(base: f64, hours: f64) -> f64 {
        let scale = clamp_hours(hours) / REFERENCE_WINDOW_HOURS;
        (clamp_fraction(base) * scale).min(MAX_EFFECTIVE_REDUCTION)
    }
}

/// Projected state of both sides after the elapsed window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegradationProjection {
    pub hours: f64,
    pub projected_friendly: f64,
    pub projected_enemy: f64,
    pub projected_ratio: RatioResult,
    pub effective_reduction_friendly: f64,
    pub effective_reduction_enemy: f64,
}

/// Project both scores with the friendly side attacking
pub fn project_degradation(
    score_friendly: f64,
    score_enemy: f64,
    profile: &DegradationProfile,
    hours: f64,
) -> DegradationProjection {
    project_degradation_with_attacker(score_friendly, score_enemy, profile, hours, Side::Friendly)
}

/// Project both scores, applying the attacker fraction to `attacker`
pub fn project_degradation_with_attacker(
    score_friendly: f64,
    score_enemy: f64,
    profile: &DegradationProfile,
    hours: f64,
    attacker: Side,
) -> DegradationProjection {
    let hours = clamp_hours(hours);
    let (base_friendly, base_enemy) = match attacker {
        Side::Friendly => (profile.attacker, profile.defender),
        Side::Enemy => (profile.defender, profile.attacker),
    };

    let reduction_friendly = DegradationProfile::effective_reduction(base_friendly, hours);
    let reduction_enemy = DegradationProfile::effective_reduction(base_enemy, hours);

    let projected_friendly = clamp_non_negative(score_friendly) * (1.0 - reduction_friendly);
    let projected_enemy = clamp_non_negative(score_enemy) * (1.0 - reduction_enemy);

    DegradationProjection {
        hours,
        projected_friendly,
        projected_enemy,
        projected_ratio: compute_ratio(projected_friendly, projected_enemy),
        effective_reduction_friendly: reduction_friendly,
        effective_reduction_enemy: reduction_enemy,
    }
}
