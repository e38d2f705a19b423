//! Configuration loading from TOML files

mod coefficients;
mod confrontation;
mod degradation;
mod missions;
mod multipliers;
mod table;

pub use coefficients::{
    default_coefficients, load_coefficients, parse_coefficients, CoefficientPair, CoefficientStore,
};
pub use confrontation::{
    default_confrontation_tables, load_confrontation_tables, parse_confrontation_tables,
    ConfrontationTables,
};
pub use degradation::{
    default_degradation_profiles, load_degradation_profiles, parse_degradation_profiles,
    DegradationTable, NamedProfile,
};
pub use missions::{default_missions, load_missions, parse_missions, MissionTable};
pub use multipliers::{
    default_multipliers, load_multipliers, parse_multipliers, MultiplierCatalog, MultiplierFactor,
    MultiplierOption,
};
pub use table::SidedTable;

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Every static table the pipeline reads, injected as one immutable value
#[derive(Debug, Clone)]
pub struct Dataset {
    pub coefficients: CoefficientStore,
    pub multipliers: MultiplierCatalog,
    pub missions: MissionTable,
    pub degradation: DegradationTable,
    pub confrontation: ConfrontationTables,
}

impl Default for Dataset {
    /// The tables shipped with the crate
    fn default() -> Self {
        Dataset {
            coefficients: default_coefficients(),
            multipliers: default_multipliers(),
            missions: default_missions(),
            degradation: default_degradation_profiles(),
            confrontation: default_confrontation_tables(),
        }
    }
}

impl Dataset {
    /// Load a dataset from a directory
    ///
    /// Each of `coefficients.toml`, `multipliers.toml`, `missions.toml`,
    /// `degradation.toml` and `confrontation.toml` replaces the shipped table
    /// when present. A file that exists but fails to parse or validate is an
    /// error.
    pub fn load_dir(dir: &Path) -> Result<Self, ConfigError> {
        let mut dataset = Dataset::default();

        let path = dir.join("coefficients.toml");
        if path.exists() {
            dataset.coefficients = load_coefficients(&path)?;
        }
        let path = dir.join("multipliers.toml");
        if path.exists() {
            dataset.multipliers = load_multipliers(&path)?;
        }
        let path = dir.join("missions.toml");
        if path.exists() {
            dataset.missions = load_missions(&path)?;
        }
        let path = dir.join("degradation.toml");
        if path.exists() {
            dataset.degradation = load_degradation_profiles(&path)?;
        }
        let path = dir.join("confrontation.toml");
        if path.exists() {
            dataset.confrontation = load_confrontation_tables(&path)?;
        }

        tracing::debug!(dir = %dir.display(), "loaded dataset");
        Ok(dataset)
    }
}

/// Reject a negative or non-finite configured number
pub(crate) fn validate_non_negative(table: &str, name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{}: '{}' has invalid value {}",
            table, name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_dataset_is_populated() {
        let dataset = Dataset::default();
        assert!(!dataset.coefficients.is_empty());
        assert_eq!(dataset.multipliers.factors().len(), 9);
        assert!(dataset.missions.get("Main attack").is_some());
        assert!(dataset.degradation.get("Attack 3:1").is_some());
    }

    /// Fresh directory per test and process, removed by the caller
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("prc_core_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_dir_without_overrides() {
        let dir = scratch_dir("empty_dataset");
        let dataset = Dataset::load_dir(&dir);
        fs::remove_dir_all(&dir).unwrap();
        assert_eq!(dataset.unwrap().missions.len(), Dataset::default().missions.len());
    }

    #[test]
    fn test_load_dir_rejects_bad_override() {
        let dir = scratch_dir("bad_dataset");
        fs::write(dir.join("missions.toml"), "[[missions]]\nname = \"Raid\"\nratio = \"3-1\"\n").unwrap();
        let result = Dataset::load_dir(&dir);
        fs::remove_dir_all(&dir).unwrap();
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
