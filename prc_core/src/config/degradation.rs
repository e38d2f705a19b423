//! Named degradation profiles

use super::ConfigError;
use crate::degradation::DegradationProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A degradation profile as listed in the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedProfile {
    pub name: String,
    pub attacker: f64,
    pub defender: f64,
    /// Free-text summary shown next to the profile
    #[serde(default)]
    pub note: String,
}

impl NamedProfile {
    pub fn profile(&self) -> DegradationProfile {
        DegradationProfile::new(self.attacker, self.defender)
    }
}

/// File layout of `degradation.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DegradationConfig {
    profiles: Vec<NamedProfile>,
}

/// Tactical action name → degradation profile
#[derive(Debug, Clone, Default)]
pub struct DegradationTable {
    profiles: Vec<NamedProfile>,
}

impl DegradationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&NamedProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Profile for `name`, or no attrition when the name is unknown
    pub fn profile_or_none(&self, name: &str) -> DegradationProfile {
        match self.get(name) {
            Some(named) => named.profile(),
            None => {
                tracing::warn!(name, "unknown degradation profile, no attrition applied");
                DegradationProfile::none()
            }
        }
    }

    pub fn profiles(&self) -> &[NamedProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn from_config(config: DegradationConfig) -> Result<Self, ConfigError> {
        for profile in &config.profiles {
            for value in [profile.attacker, profile.defender] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ConfigError::ValidationError(format!(
                        "degradation profile '{}': fraction {} outside [0, 1]",
                        profile.name, value
                    )));
                }
            }
        }
        Ok(DegradationTable {
            profiles: config.profiles,
        })
    }
}

/// Load degradation profiles from a TOML file
pub fn load_degradation_profiles(path: &Path) -> Result<DegradationTable, ConfigError> {
    let config: DegradationConfig = super::load_toml(path)?;
    DegradationTable::from_config(config)
}

/// Load degradation profiles from a TOML string
pub fn parse_degradation_profiles(content: &str) -> Result<DegradationTable, ConfigError> {
    let config: DegradationConfig = super::parse_toml(content)?;
    DegradationTable::from_config(config)
}

/// Get the degradation profiles shipped with the crate
pub fn default_degradation_profiles() -> DegradationTable {
    let toml = include_str!("../../config/degradation.toml");
    parse_degradation_profiles(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "shipped degradation profiles failed to load, using empty table");
        DegradationTable::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles() {
        let table = default_degradation_profiles();
        assert_eq!(table.len(), 4);

        let attack = table.get("Attack 3:1").unwrap();
        assert!((attack.attacker - 0.25).abs() < f64::EPSILON);
        assert!((attack.defender - 0.20).abs() < f64::EPSILON);
        assert!(!attack.note.is_empty());
    }

    #[test]
    fn test_unknown_profile_is_none() {
        let table = default_degradation_profiles();
        assert_eq!(table.profile_or_none("Siege"), DegradationProfile::none());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let toml = r#"
[[profiles]]
name = "Bad"
attacker = 1.2
defender = 0.1
"#;
        assert!(matches!(
            parse_degradation_profiles(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
