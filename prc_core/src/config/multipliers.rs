//! Multiplier catalog - the nine qualitative factors and their options

use super::{validate_non_negative, ConfigError};
use crate::types::{MultiplierKey, TriStatus};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One labeled option of a factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierOption {
    pub label: String,
    pub value: f64,
}

/// A factor with its closed set of options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplierFactor {
    pub key: MultiplierKey,
    /// Display name
    pub name: String,
    /// Label picked when nothing (or something unknown) is selected
    pub default: String,
    pub options: Vec<MultiplierOption>,
}

impl MultiplierFactor {
    /// Value of an option, `None` for labels outside the closed set
    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.options.iter().find(|o| o.label == label).map(|o| o.value)
    }

    pub fn default_value(&self) -> f64 {
        self.value_of(&self.default).unwrap_or(1.0)
    }

    pub fn has_option(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label == label)
    }
}

/// File layout of `multipliers.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MultipliersConfig {
    factors: Vec<MultiplierFactor>,
}

/// Fixed list of factors, one per `MultiplierKey`
#[derive(Debug, Clone)]
pub struct MultiplierCatalog {
    factors: Vec<MultiplierFactor>,
}

impl MultiplierCatalog {
    /// Build a catalog, checking that every key is present exactly once and
    /// that each default is one of the factor's options
    pub fn new(factors: Vec<MultiplierFactor>) -> Result<Self, ConfigError> {
        for key in MultiplierKey::all() {
            let count = factors.iter().filter(|f| f.key == *key).count();
            if count != 1 {
                return Err(ConfigError::ValidationError(format!(
                    "multiplier '{:?}' defined {} times, expected once",
                    key, count
                )));
            }
        }

        for factor in &factors {
            if !factor.has_option(&factor.default) {
                return Err(ConfigError::ValidationError(format!(
                    "multiplier '{:?}' default '{}' is not one of its options",
                    factor.key, factor.default
                )));
            }
            for option in &factor.options {
                validate_non_negative("multipliers", &option.label, option.value)?;
            }
            if factor.key.is_status() {
                for status in TriStatus::all() {
                    if !factor.has_option(status.label()) {
                        return Err(ConfigError::ValidationError(format!(
                            "status multiplier '{:?}' is missing option '{}'",
                            factor.key, status
                        )));
                    }
                }
            }
        }

        let mut factors = factors;
        factors.sort_by_key(|f| f.key);
        Ok(MultiplierCatalog { factors })
    }

    /// Catalog where every plain factor is neutral (1.0) and status factors
    /// use 2 / 1 / 0.5
    pub fn neutral() -> Self {
        let factors = MultiplierKey::all()
            .iter()
            .map(|key| {
                if key.is_status() {
                    MultiplierFactor {
                        key: *key,
                        name: key.name().to_string(),
                        default: TriStatus::Equivalence.label().to_string(),
                        options: vec![
                            MultiplierOption { label: TriStatus::Superiority.label().to_string(), value: 2.0 },
                            MultiplierOption { label: TriStatus::Equivalence.label().to_string(), value: 1.0 },
                            MultiplierOption { label: TriStatus::Inferiority.label().to_string(), value: 0.5 },
                        ],
                    }
                } else {
                    MultiplierFactor {
                        key: *key,
                        name: key.name().to_string(),
                        default: "Normal".to_string(),
                        options: vec![MultiplierOption { label: "Normal".to_string(), value: 1.0 }],
                    }
                }
            })
            .collect();
        MultiplierCatalog { factors }
    }

    /// All factors, in `MultiplierKey` order
    pub fn factors(&self) -> &[MultiplierFactor] {
        &self.factors
    }

    pub fn factor(&self, key: MultiplierKey) -> Option<&MultiplierFactor> {
        self.factors.iter().find(|f| f.key == key)
    }

    /// Default option label of a factor
    pub fn default_label(&self, key: MultiplierKey) -> Option<&str> {
        self.factor(key).map(|f| f.default.as_str())
    }

    /// Whether `label` is an option of `key`
    pub fn has_option(&self, key: MultiplierKey, label: &str) -> bool {
        self.factor(key).is_some_and(|f| f.has_option(label))
    }

    /// Resolve a selection to its numeric value
    ///
    /// A missing selection gives the factor's default. An unknown label also
    /// gives the default, with a warning. A key absent from the catalog is
    /// neutral (1.0).
    pub fn resolve(&self, key: MultiplierKey, label: Option<&str>) -> f64 {
        let Some(factor) = self.factor(key) else {
            tracing::warn!(?key, "multiplier missing from catalog, treated as 1.0");
            return 1.0;
        };
        match label {
            None => factor.default_value(),
            Some(label) => factor.value_of(label).unwrap_or_else(|| {
                tracing::warn!(?key, label, "unknown multiplier option, using default");
                factor.default_value()
            }),
        }
    }
}

/// Load the multiplier catalog from a TOML file
pub fn load_multipliers(path: &Path) -> Result<MultiplierCatalog, ConfigError> {
    let config: MultipliersConfig = super::load_toml(path)?;
    MultiplierCatalog::new(config.factors)
}

/// Load the multiplier catalog from a TOML string
pub fn parse_multipliers(content: &str) -> Result<MultiplierCatalog, ConfigError> {
    let config: MultipliersConfig = super::parse_toml(content)?;
    MultiplierCatalog::new(config.factors)
}

/// Get the multiplier catalog shipped with the crate
pub fn default_multipliers() -> MultiplierCatalog {
    let toml = include_str!("../../config/multipliers.toml");
    parse_multipliers(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "shipped multiplier catalog failed to load, using neutral catalog");
        MultiplierCatalog::neutral()
    })
}
