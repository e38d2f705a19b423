//! MultiplierSelection - the option label picked for each qualitative factor

use crate::config::MultiplierCatalog;
use crate::types::{MultiplierKey, TriStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Multiplier key → selected option label
///
/// Keys with no entry resolve to the catalog default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiplierSelection {
    labels: BTreeMap<MultiplierKey, String>,
}

impl MultiplierSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection holding the catalog default of every factor
    pub fn defaults(catalog: &MultiplierCatalog) -> Self {
        let labels = catalog
            .factors()
            .iter()
            .map(|factor| (factor.key, factor.default.clone()))
            .collect();
        MultiplierSelection { labels }
    }

    pub fn with(mut self, key: MultiplierKey, label: &str) -> Self {
        self.set(key, label);
        self
    }

    pub fn get(&self, key: MultiplierKey) -> Option<&str> {
        self.labels.get(&key).map(String::as_str)
    }

    /// Write a label, returns whether the stored value changed
    pub fn set(&mut self, key: MultiplierKey, label: &str) -> bool {
        if self.get(key) == Some(label) {
            return false;
        }
        self.labels.insert(key, label.to_string());
        true
    }

    /// Write a tri-state status label
    pub fn set_status(&mut self, key: MultiplierKey, status: TriStatus) -> bool {
        self.set(key, status.label())
    }

    /// The selected status of a status key, if the label parses as one
    pub fn status(&self, key: MultiplierKey) -> Option<TriStatus> {
        self.get(key).and_then(|label| label.parse().ok())
    }

    pub fn iter(&self) -> impl Iterator<Item = (MultiplierKey, &str)> {
        self.labels.iter().map(|(key, label)| (*key, label.as_str()))
    }

    /// Numeric value of one factor
    pub fn value(&self, catalog: &MultiplierCatalog, key: MultiplierKey) -> f64 {
        catalog.resolve(key, self.get(key))
    }

    /// Arithmetic mean of the nine resolved factor values
    pub fn average(&self, catalog: &MultiplierCatalog) -> f64 {
        let keys = MultiplierKey::all();
        let sum: f64 = keys.iter().map(|key| self.value(catalog, *key)).sum();
        sum / keys.len() as f64
    }
}
