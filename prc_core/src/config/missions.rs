//! Mission requirement table

use super::ConfigError;
use crate::ratio::{RatioResult, RequiredRatio};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MissionEntry {
    name: String,
    /// Written as "a:b"
    ratio: String,
}

/// File layout of `missions.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MissionsConfig {
    missions: Vec<MissionEntry>,
}

/// Mission name → minimum required ratio
#[derive(Debug, Clone, Default)]
pub struct MissionTable {
    missions: Vec<(String, RequiredRatio)>,
}

impl MissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a mission
    pub fn insert(&mut self, name: &str, requirement: RequiredRatio) {
        match self.missions.iter_mut().find(|(n, _)| n == name) {
            Some(existing) => existing.1 = requirement,
            None => self.missions.push((name.to_string(), requirement)),
        }
    }

    pub fn get(&self, name: &str) -> Option<RequiredRatio> {
        self.missions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, req)| *req)
    }

    /// Mission names, in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.missions.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Whether `ratio` satisfies the named mission
    ///
    /// An unknown mission has no requirement that can be checked, so it is
    /// never met.
    pub fn meets_mission(&self, ratio: RatioResult, mission: &str) -> bool {
        match self.get(mission) {
            Some(requirement) => requirement.is_met_by(ratio),
            None => {
                tracing::warn!(mission, "unknown mission, requirement not met");
                false
            }
        }
    }

    fn from_config(config: MissionsConfig) -> Result<Self, ConfigError> {
        let mut table = MissionTable::new();
        for entry in config.missions {
            let requirement: RequiredRatio = entry.ratio.parse().map_err(|e| {
                ConfigError::ValidationError(format!("mission '{}': {}", entry.name, e))
            })?;
            table.insert(&entry.name, requirement);
        }
        Ok(table)
    }
}

/// Load mission requirements from a TOML file
pub fn load_missions(path: &Path) -> Result<MissionTable, ConfigError> {
    let config: MissionsConfig = super::load_toml(path)?;
    MissionTable::from_config(config)
}

/// Load mission requirements from a TOML string
pub fn parse_missions(content: &str) -> Result<MissionTable, ConfigError> {
    let config: MissionsConfig = super::parse_toml(content)?;
    MissionTable::from_config(config)
}

/// Get the mission requirements shipped with the crate
pub fn default_missions() -> MissionTable {
    let toml = include_str!("../../config/missions.toml");
    parse_missions(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "shipped mission table failed to load, using empty table");
        MissionTable::new()
    })
}
