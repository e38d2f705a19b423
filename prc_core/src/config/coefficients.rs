//! Maneuver and support-fire coefficient tables

use super::{validate_non_negative, ConfigError, SidedTable};
use crate::types::{Category, Posture, Side};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Offensive and defensive combat value of one element type
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoefficientPair {
    pub offensive: f64,
    pub defensive: f64,
}

impl CoefficientPair {
    pub fn new(offensive: f64, defensive: f64) -> Self {
        CoefficientPair {
            offensive,
            defensive,
        }
    }

    /// The value counted for an element in the given posture
    pub fn select(&self, posture: Posture) -> f64 {
        match posture {
            Posture::Offensive => self.offensive,
            Posture::Defensive => self.defensive,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PairEntry {
    name: String,
    #[serde(default)]
    side: Option<Side>,
    offensive: f64,
    defensive: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScalarEntry {
    name: String,
    #[serde(default)]
    side: Option<Side>,
    value: f64,
}

/// File layout of `coefficients.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CoefficientsConfig {
    #[serde(default)]
    large: Vec<PairEntry>,
    #[serde(default)]
    medium: Vec<PairEntry>,
    #[serde(default)]
    small: Vec<PairEntry>,
    #[serde(default)]
    support_fire: Vec<ScalarEntry>,
}

/// Read-only coefficient lookups keyed by category, side and element name
#[derive(Debug, Clone, Default)]
pub struct CoefficientStore {
    large: SidedTable<CoefficientPair>,
    medium: SidedTable<CoefficientPair>,
    small: SidedTable<CoefficientPair>,
    support_fire: SidedTable<f64>,
}

impl CoefficientStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a maneuver element type
    pub fn insert_pair(
        &mut self,
        category: Category,
        side: Option<Side>,
        name: &str,
        pair: CoefficientPair,
    ) {
        self.table_mut(category).insert(side, name, pair);
    }

    /// Register a support-fire type
    pub fn insert_support_fire(&mut self, side: Option<Side>, name: &str, value: f64) {
        self.support_fire.insert(side, name, value);
    }

    fn table(&self, category: Category) -> &SidedTable<CoefficientPair> {
        match category {
            Category::Large => &self.large,
            Category::Medium => &self.medium,
            Category::Small => &self.small,
        }
    }

    fn table_mut(&mut self, category: Category) -> &mut SidedTable<CoefficientPair> {
        match category {
            Category::Large => &mut self.large,
            Category::Medium => &mut self.medium,
            Category::Small => &mut self.small,
        }
    }

    /// Look up a pair, `None` if the element is not in the table
    pub fn lookup(&self, category: Category, side: Side, name: &str) -> Option<CoefficientPair> {
        self.table(category).get(side, name)
    }

    /// Look up a pair, treating unknown elements as (0, 0)
    pub fn pair(&self, category: Category, side: Side, name: &str) -> CoefficientPair {
        self.lookup(category, side, name).unwrap_or_else(|| {
            tracing::warn!(?category, ?side, name, "unknown element, counted as zero");
            CoefficientPair::default()
        })
    }

    /// Coefficient of one support-fire type, unknown types count as zero
    pub fn support_fire_coefficient(&self, side: Side, name: &str) -> f64 {
        self.support_fire.get(side, name).unwrap_or_else(|| {
            tracing::warn!(?side, name, "unknown support-fire type, counted as zero");
            0.0
        })
    }

    /// Element names a side may pick in a category
    pub fn options(&self, category: Category, side: Side) -> &[String] {
        self.table(category).names(side)
    }

    /// Support-fire types a side may pick
    pub fn support_fire_options(&self, side: Side) -> &[String] {
        self.support_fire.names(side)
    }

    /// Whether the store holds no entries at all
    pub fn is_empty(&self) -> bool {
        Category::all().iter().all(|c| self.table(*c).is_empty()) && self.support_fire.is_empty()
    }

    fn from_config(config: CoefficientsConfig) -> Result<Self, ConfigError> {
        let mut store = CoefficientStore::new();

        let categories = [
            (Category::Large, "large", config.large),
            (Category::Medium, "medium", config.medium),
            (Category::Small, "small", config.small),
        ];
        for (category, table_name, entries) in categories {
            for entry in entries {
                validate_non_negative(table_name, &entry.name, entry.offensive)?;
                validate_non_negative(table_name, &entry.name, entry.defensive)?;
                store.insert_pair(
                    category,
                    entry.side,
                    &entry.name,
                    CoefficientPair::new(entry.offensive, entry.defensive),
                );
            }
        }

        for entry in config.support_fire {
            validate_non_negative("support_fire", &entry.name, entry.value)?;
            store.insert_support_fire(entry.side, &entry.name, entry.value);
        }

        Ok(store)
    }
}

/// Load coefficient tables from a TOML file
pub fn load_coefficients(path: &Path) -> Result<CoefficientStore, ConfigError> {
    let config: CoefficientsConfig = super::load_toml(path)?;
    CoefficientStore::from_config(config)
}

/// Load coefficient tables from a TOML string
pub fn parse_coefficients(content: &str) -> Result<CoefficientStore, ConfigError> {
    let config: CoefficientsConfig = super::parse_toml(content)?;
    CoefficientStore::from_config(config)
}

/// Get the coefficient tables shipped with the crate
pub fn default_coefficients() -> CoefficientStore {
    let toml = include_str!("../../config/coefficients.toml");
    parse_coefficients(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "shipped coefficient tables failed to load, using empty store");
        CoefficientStore::new()
    })
}
