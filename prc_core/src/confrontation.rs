//! Confrontation - status of a support domain from opposing unit counts
//!
//! Each side's count map is weighted by the domain's table. The side with the
//! larger sum holds Superiority and the other Inferiority. Sums within 1e-6 of
//! each other give Equivalence to both, so the two statuses are always
//! complementary.

use crate::config::ConfrontationTables;
use crate::sanitize::constants::EQUIVALENCE_TOLERANCE;
use crate::types::{ConfrontationDomain, PerSide, Side, TriStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unit type → number of units fielded
pub type UnitCounts = BTreeMap<String, u32>;

/// Weighted sums and resulting statuses of one confrontation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfrontationOutcome {
    pub domain: ConfrontationDomain,
    pub sums: PerSide<f64>,
    pub statuses: PerSide<TriStatus>,
}

/// Weighted sum of one side's units
pub fn weighted_sum(
    tables: &ConfrontationTables,
    domain: ConfrontationDomain,
    side: Side,
    counts: &UnitCounts,
) -> f64 {
    counts
        .iter()
        .map(|(name, count)| *count as f64 * tables.weight(domain, side, name))
        .sum()
}

/// Status pair for two weighted sums
pub fn status_pair(sum_friendly: f64, sum_enemy: f64) -> PerSide<TriStatus> {
    if (sum_friendly - sum_enemy).abs() < EQUIVALENCE_TOLERANCE {
        PerSide::new(TriStatus::Equivalence, TriStatus::Equivalence)
    } else if sum_friendly > sum_enemy {
        PerSide::new(TriStatus::Superiority, TriStatus::Inferiority)
    } else {
        PerSide::new(TriStatus::Inferiority, TriStatus::Superiority)
    }
}

/// Run one domain's confrontation
pub fn compute_confrontation(
    tables: &ConfrontationTables,
    domain: ConfrontationDomain,
    friendly: &UnitCounts,
    enemy: &UnitCounts,
) -> ConfrontationOutcome {
    let sums = PerSide::new(
        weighted_sum(tables, domain, Side::Friendly, friendly),
        weighted_sum(tables, domain, Side::Enemy, enemy),
    );
    let statuses = status_pair(sums.friendly, sums.enemy);
    ConfrontationOutcome {
        domain,
        sums,
        statuses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_confrontation_tables;
    use proptest::prelude::*;

    fn counts(entries: &[(&str, u32)]) -> UnitCounts {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_empty_counts_are_equivalent() {
        let tables = default_confrontation_tables();
        let outcome = compute_confrontation(
            &tables,
            ConfrontationDomain::ElectronicWarfare,
            &UnitCounts::new(),
            &UnitCounts::new(),
        );
        assert_eq!(outcome.statuses, PerSide::new(TriStatus::Equivalence, TriStatus::Equivalence));
    }

    #[test]
    fn test_friendly_superiority() {
        let tables = default_confrontation_tables();
        // 1 × 3.0 vs 1 × 2.5
        let outcome = compute_confrontation(
            &tables,
            ConfrontationDomain::ElectronicWarfare,
            &counts(&[("BGE", 1)]),
            &counts(&[("BGE", 1)]),
        );
        assert!((outcome.sums.friendly - 3.0).abs() < f64::EPSILON);
        assert!((outcome.sums.enemy - 2.5).abs() < f64::EPSILON);
        assert_eq!(outcome.statuses.friendly, TriStatus::Superiority);
        assert_eq!(outcome.statuses.enemy, TriStatus::Inferiority);
    }

    #[test]
    fn test_enemy_superiority() {
        let tables = default_confrontation_tables();
        // 2 × 0.5 = 1.0 vs 1 × 2.0
        let outcome = compute_confrontation(
            &tables,
            ConfrontationDomain::AirDefense,
            &counts(&[("Bia AAAe", 2)]),
            &counts(&[("GAAAe Ms", 1)]),
        );
        assert_eq!(outcome.statuses.friendly, TriStatus::Inferiority);
        assert_eq!(outcome.statuses.enemy, TriStatus::Superiority);
    }

    #[test]
    fn test_equal_sums_within_tolerance() {
        let tables = default_confrontation_tables();
        // 4 × 0.5 = 2.0 vs 1 × 2.0
        let outcome = compute_confrontation(
            &tables,
            ConfrontationDomain::AirDefense,
            &counts(&[("Bia AAAe", 4)]),
            &counts(&[("GAAAe Ms", 1)]),
        );
        assert_eq!(outcome.statuses.friendly, TriStatus::Equivalence);
        assert_eq!(status_pair(1.0, 1.0 + 1e-7).enemy, TriStatus::Equivalence);
    }

    #[test]
    fn test_unknown_units_weigh_nothing() {
        let tables = default_confrontation_tables();
        let outcome = compute_confrontation(
            &tables,
            ConfrontationDomain::ElectronicWarfare,
            &counts(&[("Jammer", 10)]),
            &UnitCounts::new(),
        );
        assert_eq!(outcome.sums.friendly, 0.0);
        assert_eq!(outcome.statuses.friendly, TriStatus::Equivalence);
    }

    proptest! {
        #[test]
        fn prop_statuses_are_complementary(
            f_bge in 0u32..20, f_cia in 0u32..20, f_pel in 0u32..50,
            e_bge in 0u32..20, e_cia in 0u32..20, e_pel in 0u32..50,
        ) {
            let tables = default_confrontation_tables();
            let friendly = counts(&[("BGE", f_bge), ("Cia GE", f_cia), ("Pel GE", f_pel)]);
            let enemy = counts(&[("BGE", e_bge), ("Cia GE", e_cia), ("Pel GE", e_pel)]);
            let outcome = compute_confrontation(
                &tables,
                ConfrontationDomain::ElectronicWarfare,
                &friendly,
                &enemy,
            );
            prop_assert_eq!(outcome.statuses.enemy, outcome.statuses.friendly.mirror());
        }

        #[test]
        fn prop_status_pair_antisymmetric(a in 0.0f64..1_000.0, b in 0.0f64..1_000.0) {
            let forward = status_pair(a, b);
            let backward = status_pair(b, a);
            prop_assert_eq!(forward.friendly, backward.enemy);
            prop_assert_eq!(forward.enemy, forward.friendly.mirror());
        }
    }
}
