//! ElementEntry - one maneuver element line of a side

use crate::config::CoefficientPair;
use crate::sanitize::constants::FULL_STRENGTH_PERCENT;
use crate::sanitize::{clamp_count, clamp_percent};
use crate::types::{Category, Posture, Terrain, Visibility};
use serde::{Deserialize, Deserializer, Serialize};

/// A maneuver element as entered for one side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementEntry {
    pub category: Category,
    /// Name of the element in the category's coefficient table
    pub coefficient_key: String,
    pub quantity: u32,
    #[serde(default)]
    pub posture: Posture,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub terrain: Terrain,
    /// Free text for display, no effect on the score
    #[serde(default)]
    pub label: String,
    /// Remaining strength, 0-100
    #[serde(default = "default_strength", deserialize_with = "deserialize_strength")]
    pub strength_percent: u8,
}

fn default_strength() -> u8 {
    FULL_STRENGTH_PERCENT
}

fn deserialize_strength<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_percent)
}

impl ElementEntry {
    /// Create a single offensive element in daylight on trained terrain
    pub fn new(category: Category, coefficient_key: impl Into<String>) -> Self {
        ElementEntry {
            category,
            coefficient_key: coefficient_key.into(),
            quantity: 1,
            posture: Posture::Offensive,
            visibility: Visibility::Day,
            terrain: Terrain::Trained,
            label: String::new(),
            strength_percent: FULL_STRENGTH_PERCENT,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_posture(mut self, posture: Posture) -> Self {
        self.posture = posture;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_strength(mut self, percent: f64) -> Self {
        self.set_strength(percent);
        self
    }

    /// Set strength from raw input, clamped into [0, 100]
    pub fn set_strength(&mut self, percent: f64) {
        self.strength_percent = clamp_percent(percent);
    }

    /// Set quantity from raw input, clamped to a non-negative integer
    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = clamp_count(quantity);
    }

    /// Pull a directly written strength back into [0, 100]
    pub fn normalize(&mut self) {
        self.strength_percent = self.strength_percent.min(FULL_STRENGTH_PERCENT);
    }

    /// Remaining strength as a fraction
    pub fn strength_factor(&self) -> f64 {
        self.strength_percent.min(FULL_STRENGTH_PERCENT) as f64 / 100.0
    }

    /// `quantity × coefficient × visibility × terrain × strength`
    pub fn contribution(&self, pair: CoefficientPair) -> f64 {
        let coefficient = pair.select(self.posture).max(0.0);
        self.quantity as f64
            * coefficient
            * self.visibility.factor()
            * self.terrain.factor()
            * self.strength_factor()
    }
}
