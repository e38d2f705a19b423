//! Side inputs - everything one force contributes to its score

mod element;
mod multiplier;
mod support_fire;

pub use element::ElementEntry;
pub use multiplier::MultiplierSelection;
pub use support_fire::SupportFireCount;

use serde::{Deserialize, Serialize};

/// Snapshot of one side's inputs as handed to the aggregator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideInput {
    #[serde(default)]
    pub elements: Vec<ElementEntry>,
    #[serde(default)]
    pub support_fire: SupportFireCount,
    #[serde(default)]
    pub multipliers: MultiplierSelection,
}

impl SideInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, element: ElementEntry) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_support_fire(mut self, support_fire: SupportFireCount) -> Self {
        self.support_fire = support_fire;
        self
    }

    pub fn with_multipliers(mut self, multipliers: MultiplierSelection) -> Self {
        self.multipliers = multipliers;
        self
    }
}
