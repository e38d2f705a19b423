//! Force ratio between the two scores and mission requirements

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Friendly score divided by enemy score
///
/// Division by a zero enemy score is an outcome, not an error. It is
/// `Infinite` when the friendly side has any power left and `Undefined` when
/// neither side has any.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RatioResult {
    Finite(f64),
    Infinite,
    Undefined,
}

impl RatioResult {
    /// Numeric value, `None` for `Undefined`
    pub fn value(&self) -> Option<f64> {
        match self {
            RatioResult::Finite(v) => Some(*v),
            RatioResult::Infinite => Some(f64::INFINITY),
            RatioResult::Undefined => None,
        }
    }

    /// Whether this ratio is at least `required`
    pub fn meets(&self, required: f64) -> bool {
        match self {
            RatioResult::Finite(v) => *v >= required,
            RatioResult::Infinite => true,
            RatioResult::Undefined => false,
        }
    }
}

/// Compute the ratio of two non-negative scores
pub fn compute_ratio(score_friendly: f64, score_enemy: f64) -> RatioResult {
    if score_enemy > 0.0 {
        RatioResult::Finite(score_friendly / score_enemy)
    } else if score_friendly > 0.0 {
        RatioResult::Infinite
    } else {
        RatioResult::Undefined
    }
}

/// Minimum ratio written as `a:b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredRatio {
    pub friendly: u32,
    pub enemy: u32,
}

impl RequiredRatio {
    /// Create a requirement, `None` unless both terms are positive
    pub fn new(friendly: u32, enemy: u32) -> Option<Self> {
        if friendly == 0 || enemy == 0 {
            return None;
        }
        Some(RequiredRatio { friendly, enemy })
    }

    pub fn value(&self) -> f64 {
        self.friendly as f64 / self.enemy as f64
    }

    /// Whether `ratio` satisfies this requirement
    pub fn is_met_by(&self, ratio: RatioResult) -> bool {
        ratio.meets(self.value())
    }
}

impl fmt::Display for RequiredRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.friendly, self.enemy)
    }
}

impl FromStr for RequiredRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(':')
            .ok_or_else(|| format!("ratio '{}' is not of the form a:b", s))?;
        let a: u32 = a
            .trim()
            .parse()
            .map_err(|_| format!("ratio '{}' has a non-integer term", s))?;
        let b: u32 = b
            .trim()
            .parse()
            .map_err(|_| format!("ratio '{}' has a non-integer term", s))?;
        RequiredRatio::new(a, b).ok_or_else(|| format!("ratio '{}' must have positive terms", s))
    }
}

/// Qualitative reading of a ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioReading {
    /// 3:1 or greater
    Overwhelming,
    /// About 2:1
    Superior,
    ModerateAdvantage,
    SlightAdvantage,
    ApproximateParity,
    Inferior,
    /// 1:2 or worse
    MarkedlyInferior,
    /// Neither side has any combat power
    Undetermined,
}

impl RatioReading {
    pub fn of(ratio: RatioResult) -> Self {
        let value = match ratio {
            RatioResult::Finite(v) => v,
            RatioResult::Infinite => return RatioReading::Overwhelming,
            RatioResult::Undefined => return RatioReading::Undetermined,
        };

        if value >= 3.0 {
            RatioReading::Overwhelming
        } else if value >= 2.0 {
            RatioReading::Superior
        } else if value >= 1.5 {
            RatioReading::ModerateAdvantage
        } else if value >= 1.1 {
            RatioReading::SlightAdvantage
        } else if value <= 0.5 {
            RatioReading::MarkedlyInferior
        } else if value < 1.0 {
            RatioReading::Inferior
        } else {
            RatioReading::ApproximateParity
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RatioReading::Overwhelming => "Superiority of 3:1 or greater",
            RatioReading::Superior => "Superiority of about 2:1",
            RatioReading::ModerateAdvantage => "Moderate advantage",
            RatioReading::SlightAdvantage => "Slight advantage",
            RatioReading::ApproximateParity => "Approximate parity",
            RatioReading::Inferior => "Inferiority",
            RatioReading::MarkedlyInferior => "Marked inferiority",
            RatioReading::Undetermined => "Undetermined",
        }
    }
}

impl fmt::Display for RatioReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
