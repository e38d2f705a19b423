//! Combat power aggregation
//!
//! Each part of a side input is a [`ScoreSource`] that writes into a
//! [`ScoreAccumulator`]. The accumulator then yields
//! `score = (Σ elements + support fire) × mean(multipliers)`.

mod accumulator;
mod breakdown;
mod sources;

pub use accumulator::{ElementContribution, ScoreAccumulator};
pub use breakdown::ScoreBreakdown;

use crate::config::Dataset;
use crate::side::SideInput;
use crate::types::Side;

/// Lookup context shared by all sources of one side
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub side: Side,
    pub dataset: &'a Dataset,
}

impl<'a> ScoringContext<'a> {
    pub fn new(side: Side, dataset: &'a Dataset) -> Self {
        ScoringContext { side, dataset }
    }
}

/// Trait for anything that contributes to a side's combat power
pub trait ScoreSource {
    /// Identifier used in logs
    fn id(&self) -> &str;

    /// Application order, lower first
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's contribution to the accumulator
    fn apply(&self, ctx: &ScoringContext<'_>, acc: &mut ScoreAccumulator);
}

/// Run a set of sources through a fresh accumulator
pub fn accumulate(ctx: &ScoringContext<'_>, sources: &[&dyn ScoreSource]) -> ScoreAccumulator {
    let mut acc = ScoreAccumulator::new();

    let mut sorted: Vec<_> = sources.to_vec();
    sorted.sort_by_key(|s| s.priority());

    for source in sorted {
        tracing::trace!(side = ?ctx.side, source = source.id(), "applying score source");
        source.apply(ctx, &mut acc);
    }
    acc
}

/// Collect every source of a side input
pub fn accumulate_side(input: &SideInput, ctx: &ScoringContext<'_>) -> ScoreAccumulator {
    let mut sources: Vec<&dyn ScoreSource> = Vec::with_capacity(input.elements.len() + 2);
    for element in &input.elements {
        sources.push(element);
    }
    sources.push(&input.support_fire);
    sources.push(&input.multipliers);
    accumulate(ctx, &sources)
}

/// Combat power of one side
pub fn compute_score(input: &SideInput, side: Side, dataset: &Dataset) -> f64 {
    accumulate_side(input, &ScoringContext::new(side, dataset)).score()
}

/// `(elements + support fire) × multiplier average`, never negative
pub fn combat_power(elements_total: f64, support_fire_total: f64, multiplier_average: f64) -> f64 {
    let score = (elements_total + support_fire_total) * multiplier_average;
    if score.is_nan() {
        return 0.0;
    }
    score.max(0.0)
}
