//! Scenario files - an engagement described in TOML
//!
//! ```toml
//! mission = "Main attack"
//! profile = "Attack 3:1"
//! hours = 12
//!
//! [[friendly.elements]]
//! category = "large"
//! coefficient_key = "Bda Inf Mec"
//! quantity = 2
//!
//! [friendly.multipliers]
//! engineering_status = "Superiority"
//!
//! [electronic_warfare.enemy]
//! BGE = 1
//! ```
//!
//! A scenario is replayed through the [`Engagement`] edit methods, so it is
//! held to the same rules as interactive edits. Numbers are read raw and
//! clamped on the way in.

use crate::config::{ConfigError, Dataset};
use crate::engagement::{Engagement, SelectionError};
use crate::sanitize::clamp_count;
use crate::side::ElementEntry;
use crate::types::{Category, ConfrontationDomain, MultiplierKey, Posture, Side, Terrain, Visibility};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Failure to turn a scenario file into an engagement
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Rejected scenario entry: {0}")]
    Selection(#[from] SelectionError),
}

fn default_quantity() -> f64 {
    1.0
}

fn default_strength() -> f64 {
    100.0
}

/// One element line as written in a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioElement {
    pub category: Category,
    pub coefficient_key: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default)]
    pub posture: Posture,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_strength")]
    pub strength_percent: f64,
}

impl ScenarioElement {
    pub fn to_entry(&self) -> ElementEntry {
        let mut entry = ElementEntry::new(self.category, self.coefficient_key.as_str())
            .with_posture(self.posture)
            .with_visibility(self.visibility)
            .with_terrain(self.terrain)
            .with_label(self.label.as_str());
        entry.set_quantity(self.quantity);
        entry.set_strength(self.strength_percent);
        entry
    }
}

/// One side as written in a scenario
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioSide {
    #[serde(default)]
    pub elements: Vec<ScenarioElement>,
    #[serde(default)]
    pub support_fire: BTreeMap<String, f64>,
    /// Multiplier key name → option label
    #[serde(default)]
    pub multipliers: BTreeMap<String, String>,
}

/// Unit counts of one confrontation domain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioCounts {
    #[serde(default)]
    pub friendly: BTreeMap<String, f64>,
    #[serde(default)]
    pub enemy: BTreeMap<String, f64>,
}

impl ScenarioCounts {
    fn side(&self, side: Side) -> &BTreeMap<String, f64> {
        match side {
            Side::Friendly => &self.friendly,
            Side::Enemy => &self.enemy,
        }
    }
}

/// File layout of a scenario
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub attacker: Option<Side>,
    #[serde(default)]
    pub friendly: ScenarioSide,
    #[serde(default)]
    pub enemy: ScenarioSide,
    #[serde(default)]
    pub electronic_warfare: ScenarioCounts,
    #[serde(default)]
    pub air_defense: ScenarioCounts,
}

impl ScenarioFile {
    fn side(&self, side: Side) -> &ScenarioSide {
        match side {
            Side::Friendly => &self.friendly,
            Side::Enemy => &self.enemy,
        }
    }

    fn counts(&self, domain: ConfrontationDomain) -> &ScenarioCounts {
        match domain {
            ConfrontationDomain::ElectronicWarfare => &self.electronic_warfare,
            ConfrontationDomain::AirDefense => &self.air_defense,
        }
    }

    /// Replay the scenario into a fresh engagement
    pub fn build_engagement(&self, dataset: Dataset) -> Result<Engagement, SelectionError> {
        let mut engagement = Engagement::new(dataset);

        for side in Side::all() {
            let input = self.side(*side);
            for element in &input.elements {
                engagement.add_element(*side, element.to_entry());
            }
            for (name, count) in &input.support_fire {
                engagement.set_support_fire(*side, name, clamp_count(*count));
            }
            for (name, label) in &input.multipliers {
                let key: MultiplierKey = name
                    .parse()
                    .map_err(|_| SelectionError::UnknownKey(name.clone()))?;
                engagement.select_multiplier(*side, key, label)?;
            }
        }

        for domain in ConfrontationDomain::all() {
            for side in Side::all() {
                for (unit, count) in self.counts(*domain).side(*side) {
                    engagement.set_confrontation_count(*domain, *side, unit, clamp_count(*count));
                }
            }
        }

        if let Some(mission) = &self.mission {
            engagement.set_mission(mission)?;
        }
        if let Some(profile) = &self.profile {
            engagement.set_profile(profile)?;
        }
        if let Some(hours) = self.hours {
            engagement.set_hours(hours);
        }
        if let Some(attacker) = self.attacker {
            engagement.set_attacker(attacker);
        }

        tracing::debug!(revision = engagement.revision(), "scenario replayed");
        Ok(engagement)
    }
}

/// Load a scenario from a TOML file
pub fn load_scenario(path: &Path) -> Result<ScenarioFile, ConfigError> {
    crate::config::load_toml(path)
}

/// Load a scenario from a TOML string
pub fn parse_scenario(content: &str) -> Result<ScenarioFile, ConfigError> {
    crate::config::parse_toml(content)
}

/// Load a scenario file and replay it against `dataset`
pub fn load_engagement(path: &Path, dataset: Dataset) -> Result<Engagement, ScenarioError> {
    let scenario = load_scenario(path)?;
    Ok(scenario.build_engagement(dataset)?)
}
