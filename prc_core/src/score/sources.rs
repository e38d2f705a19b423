//! ScoreSource implementations for the parts of a side input

use super::{ScoreAccumulator, ScoreSource, ScoringContext};
use crate::side::{ElementEntry, MultiplierSelection, SupportFireCount};
use crate::types::MultiplierKey;

impl ScoreSource for ElementEntry {
    fn id(&self) -> &str {
        &self.coefficient_key
    }

    fn apply(&self, ctx: &ScoringContext<'_>, acc: &mut ScoreAccumulator) {
        let pair = ctx
            .dataset
            .coefficients
            .pair(self.category, ctx.side, &self.coefficient_key);
        acc.add_element(&self.coefficient_key, &self.label, self.contribution(pair));
    }
}

impl ScoreSource for SupportFireCount {
    fn id(&self) -> &str {
        "support_fire"
    }

    fn apply(&self, ctx: &ScoringContext<'_>, acc: &mut ScoreAccumulator) {
        acc.add_support_fire(self.total(&ctx.dataset.coefficients, ctx.side));
    }
}

impl ScoreSource for MultiplierSelection {
    fn id(&self) -> &str {
        "multipliers"
    }

    /// Applied after every additive source
    fn priority(&self) -> i32 {
        100
    }

    fn apply(&self, ctx: &ScoringContext<'_>, acc: &mut ScoreAccumulator) {
        for key in MultiplierKey::all() {
            acc.set_multiplier(*key, self.value(&ctx.dataset.multipliers, *key));
        }
    }
}
