//! Electronic-warfare and air-defense weight tables

use super::{validate_non_negative, ConfigError, SidedTable};
use crate::types::{ConfrontationDomain, Side};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeightEntry {
    name: String,
    #[serde(default)]
    side: Option<Side>,
    value: f64,
}

/// File layout of `confrontation.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfrontationConfig {
    #[serde(default)]
    electronic_warfare: Vec<WeightEntry>,
    #[serde(default)]
    air_defense: Vec<WeightEntry>,
}

/// Unit weights for both confrontation domains
#[derive(Debug, Clone, Default)]
pub struct ConfrontationTables {
    electronic_warfare: SidedTable<f64>,
    air_defense: SidedTable<f64>,
}

impl ConfrontationTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, domain: ConfrontationDomain, side: Option<Side>, name: &str, weight: f64) {
        self.table_mut(domain).insert(side, name, weight);
    }

    pub fn table(&self, domain: ConfrontationDomain) -> &SidedTable<f64> {
        match domain {
            ConfrontationDomain::ElectronicWarfare => &self.electronic_warfare,
            ConfrontationDomain::AirDefense => &self.air_defense,
        }
    }

    fn table_mut(&mut self, domain: ConfrontationDomain) -> &mut SidedTable<f64> {
        match domain {
            ConfrontationDomain::ElectronicWarfare => &mut self.electronic_warfare,
            ConfrontationDomain::AirDefense => &mut self.air_defense,
        }
    }

    /// Weight of one unit type, unknown types weigh nothing
    pub fn weight(&self, domain: ConfrontationDomain, side: Side, name: &str) -> f64 {
        self.table(domain).get(side, name).unwrap_or_else(|| {
            tracing::warn!(?domain, ?side, name, "unknown confrontation unit, weighted as zero");
            0.0
        })
    }

    /// Unit types a side may field in a domain
    pub fn options(&self, domain: ConfrontationDomain, side: Side) -> &[String] {
        self.table(domain).names(side)
    }

    fn from_config(config: ConfrontationConfig) -> Result<Self, ConfigError> {
        let mut tables = ConfrontationTables::new();
        let domains = [
            (ConfrontationDomain::ElectronicWarfare, "electronic_warfare", config.electronic_warfare),
            (ConfrontationDomain::AirDefense, "air_defense", config.air_defense),
        ];
        for (domain, table_name, entries) in domains {
            for entry in entries {
                validate_non_negative(table_name, &entry.name, entry.value)?;
                tables.insert(domain, entry.side, &entry.name, entry.value);
            }
        }
        Ok(tables)
    }
}

/// Load confrontation tables from a TOML file
pub fn load_confrontation_tables(path: &Path) -> Result<ConfrontationTables, ConfigError> {
    let config: ConfrontationConfig = super::load_toml(path)?;
    ConfrontationTables::from_config(config)
}

/// Load confrontation tables from a TOML string
pub fn parse_confrontation_tables(content: &str) -> Result<ConfrontationTables, ConfigError> {
    let config: ConfrontationConfig = super::parse_toml(content)?;
    ConfrontationTables::from_config(config)
}

/// Get the confrontation tables shipped with the crate
pub fn default_confrontation_tables() -> ConfrontationTables {
    let toml = include_str!("../../config/confrontation.toml");
    parse_confrontation_tables(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "shipped confrontation tables failed to load, using empty tables");
        ConfrontationTables::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_side_scoped() {
        let tables = default_confrontation_tables();
        let ew = ConfrontationDomain::ElectronicWarfare;
        assert!((tables.weight(ew, Side::Friendly, "BGE") - 3.0).abs() < f64::EPSILON);
        assert!((tables.weight(ew, Side::Enemy, "BGE") - 2.5).abs() < f64::EPSILON);

        let ad = ConfrontationDomain::AirDefense;
        assert_eq!(tables.options(ad, Side::Friendly).len(), 2);
        assert_eq!(tables.options(ad, Side::Enemy).len(), 3);
        assert!((tables.weight(ad, Side::Friendly, "GAAAe Ms") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_tables() {
        let toml = r#"
[[air_defense]]
name = "Bia AAAe"
value = 0.5
"#;
        let tables = parse_confrontation_tables(toml).unwrap();
        let ad = ConfrontationDomain::AirDefense;
        assert!((tables.weight(ad, Side::Enemy, "Bia AAAe") - 0.5).abs() < f64::EPSILON);
        assert!(tables.options(ConfrontationDomain::ElectronicWarfare, Side::Friendly).is_empty());
    }
}
