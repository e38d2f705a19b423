//! Engagement - owned state of one force comparison
//!
//! The engagement holds both sides' inputs, the confrontation unit counts,
//! the mission and the degradation settings. Every edit goes through a method
//! that reports whether it changed anything, and `revision` only moves on a
//! real change.
//!
//! Two values are never edited by hand:
//! - the electronic-warfare and air-defense status of both sides, written by
//!   their confrontation when a unit count changes
//! - the enemy engineering status, written as the mirror of the friendly one
//!
//! Both writes are skipped when the stored label already matches.

mod counts;
mod error;
mod report;

pub use counts::ConfrontationCounts;
pub use error::SelectionError;
pub use report::{EngagementReport, RequirementCheck};

use crate::config::Dataset;
use crate::confrontation::{compute_confrontation, ConfrontationOutcome};
use crate::degradation::project_degradation_with_attacker;
use crate::ratio::{compute_ratio, RatioReading};
use crate::sanitize::clamp_hours;
use crate::sanitize::constants::REFERENCE_WINDOW_HOURS;
use crate::score::ScoreBreakdown;
use crate::side::{ElementEntry, MultiplierSelection, SideInput};
use crate::types::{ConfrontationDomain, MultiplierKey, PerSide, Side, TriStatus};

/// Mission selected when the table has it
pub const DEFAULT_MISSION: &str = "Main attack";
/// Degradation profile selected when the table has it
pub const DEFAULT_PROFILE: &str = "Attack 3:1";

/// Both sides of a force comparison and the settings it is judged under
#[derive(Debug, Clone)]
pub struct Engagement {
    dataset: Dataset,
    sides: PerSide<SideInput>,
    counts: ConfrontationCounts,
    mission: String,
    profile: String,
    hours: f64,
    attacker: Side,
    revision: u64,
}

impl Engagement {
    /// Create an empty engagement with catalog defaults on both sides
    pub fn new(dataset: Dataset) -> Self {
        let multipliers = MultiplierSelection::defaults(&dataset.multipliers);
        let side = SideInput::new().with_multipliers(multipliers);

        let mission = if dataset.missions.get(DEFAULT_MISSION).is_some() {
            DEFAULT_MISSION.to_string()
        } else {
            dataset.missions.names().next().unwrap_or_default().to_string()
        };
        let profile = if dataset.degradation.get(DEFAULT_PROFILE).is_some() {
            DEFAULT_PROFILE.to_string()
        } else {
            dataset
                .degradation
                .profiles()
                .first()
                .map(|p| p.name.clone())
                .unwrap_or_default()
        };

        let mut engagement = Engagement {
            dataset,
            sides: PerSide::new(side.clone(), side),
            counts: ConfrontationCounts::new(),
            mission,
            profile,
            hours: REFERENCE_WINDOW_HOURS,
            attacker: Side::Friendly,
            revision: 0,
        };
        for domain in ConfrontationDomain::all() {
            engagement.propagate(*domain);
        }
        engagement.mirror_engineering();
        engagement.revision = 0;
        engagement
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn side(&self, side: Side) -> &SideInput {
        &self.sides[side]
    }

    pub fn counts(&self) -> &ConfrontationCounts {
        &self.counts
    }

    pub fn mission(&self) -> &str {
        &self.mission
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn attacker(&self) -> Side {
        self.attacker
    }

    /// Number of edits that changed the state
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self, changed: bool) -> bool {
        if changed {
            self.revision += 1;
        }
        changed
    }

    // === Elements ===

    /// Append an element, returns its index
    pub fn add_element(&mut self, side: Side, element: ElementEntry) -> usize {
        let elements = &mut self.sides[side].elements;
        elements.push(element);
        self.revision += 1;
        elements.len() - 1
    }

    /// Edit an element in place, returns whether it changed
    ///
    /// Strength written directly by `edit` is capped at 100.
    pub fn update_element(
        &mut self,
        side: Side,
        index: usize,
        edit: impl FnOnce(&mut ElementEntry),
    ) -> Result<bool, SelectionError> {
        let element = self.sides[side]
            .elements
            .get_mut(index)
            .ok_or(SelectionError::UnknownElement { side, index })?;
        let before = element.clone();
        edit(element);
        element.normalize();
        let changed = *element != before;
        Ok(self.touch(changed))
    }

    /// Replace an element, returns whether it changed
    pub fn replace_element(
        &mut self,
        side: Side,
        index: usize,
        element: ElementEntry,
    ) -> Result<bool, SelectionError> {
        self.update_element(side, index, |slot| *slot = element)
    }

    pub fn remove_element(&mut self, side: Side, index: usize) -> Result<ElementEntry, SelectionError> {
        let elements = &mut self.sides[side].elements;
        if index >= elements.len() {
            return Err(SelectionError::UnknownElement { side, index });
        }
        let removed = elements.remove(index);
        self.revision += 1;
        Ok(removed)
    }

    // === Support fire ===

    pub fn set_support_fire(&mut self, side: Side, name: &str, count: u32) -> bool {
        let changed = self.sides[side].support_fire.set(name, count);
        self.touch(changed)
    }

    // === Multipliers ===

    /// Pick an option for a manually edited factor
    ///
    /// Confrontation-derived keys and the enemy engineering status are
    /// rejected. Picking a friendly engineering status also writes its
    /// mirror on the enemy side.
    pub fn select_multiplier(
        &mut self,
        side: Side,
        key: MultiplierKey,
        label: &str,
    ) -> Result<bool, SelectionError> {
        if key.derived_from().is_some() {
            return Err(SelectionError::DerivedKey(key));
        }
        if key == MultiplierKey::EngineeringStatus && side == Side::Enemy {
            return Err(SelectionError::MirroredKey(key, side));
        }
        if !self.dataset.multipliers.has_option(key, label) {
            return Err(SelectionError::UnknownOption {
                key,
                label: label.to_string(),
            });
        }

        let mut changed = self.sides[side].multipliers.set(key, label);
        if changed && key == MultiplierKey::EngineeringStatus {
            changed |= self.mirror_engineering();
        }
        Ok(self.touch(changed))
    }

    /// Set the friendly engineering status
    pub fn set_engineering_status(&mut self, status: TriStatus) -> Result<bool, SelectionError> {
        self.select_multiplier(Side::Friendly, MultiplierKey::EngineeringStatus, status.label())
    }

    /// Write the inverse of the friendly engineering status on the enemy side
    ///
    /// Only ever writes the enemy value, so it cannot re-trigger itself.
    fn mirror_engineering(&mut self) -> bool {
        let key = MultiplierKey::EngineeringStatus;
        let friendly = self.sides.friendly.multipliers.status(key).unwrap_or(TriStatus::Equivalence);
        let mirrored = friendly.mirror();
        let written = self.sides.enemy.multipliers.set_status(key, mirrored);
        if written {
            tracing::debug!(?friendly, ?mirrored, "mirrored engineering status");
        } else {
            tracing::debug!(?mirrored, "engineering mirror unchanged, skipped");
        }
        written
    }

    // === Confrontations ===

    /// Set one confrontation count and re-derive that domain's statuses
    pub fn set_confrontation_count(
        &mut self,
        domain: ConfrontationDomain,
        side: Side,
        unit: &str,
        count: u32,
    ) -> bool {
        if !self.counts.set(domain, side, unit, count) {
            return false;
        }
        self.propagate(domain);
        self.touch(true)
    }

    /// Run one confrontation
    pub fn confrontation(&self, domain: ConfrontationDomain) -> ConfrontationOutcome {
        let counts = self.counts.domain(domain);
        compute_confrontation(&self.dataset.confrontation, domain, &counts.friendly, &counts.enemy)
    }

    /// Write a domain's status pair into both selections where it differs
    fn propagate(&mut self, domain: ConfrontationDomain) -> bool {
        let outcome = self.confrontation(domain);
        let key = domain.multiplier_key();
        let mut written = false;
        for side in Side::all() {
            let status = outcome.statuses[*side];
            if self.sides[*side].multipliers.set_status(key, status) {
                tracing::debug!(?domain, ?side, ?status, "confrontation status written");
                written = true;
            } else {
                tracing::debug!(?domain, ?side, ?status, "confrontation status unchanged, skipped");
            }
        }
        written
    }

    // === Mission and degradation ===

    pub fn set_mission(&mut self, mission: &str) -> Result<bool, SelectionError> {
        if self.dataset.missions.get(mission).is_none() {
            return Err(SelectionError::UnknownMission(mission.to_string()));
        }
        let changed = self.mission != mission;
        if changed {
            self.mission = mission.to_string();
        }
        Ok(self.touch(changed))
    }

    pub fn set_profile(&mut self, profile: &str) -> Result<bool, SelectionError> {
        if self.dataset.degradation.get(profile).is_none() {
            return Err(SelectionError::UnknownProfile(profile.to_string()));
        }
        let changed = self.profile != profile;
        if changed {
            self.profile = profile.to_string();
        }
        Ok(self.touch(changed))
    }

    /// Set the elapsed hours, clamped to be non-negative
    pub fn set_hours(&mut self, hours: f64) -> bool {
        let hours = clamp_hours(hours);
        let changed = self.hours != hours;
        self.hours = hours;
        self.touch(changed)
    }

    pub fn set_attacker(&mut self, attacker: Side) -> bool {
        let changed = self.attacker != attacker;
        self.attacker = attacker;
        self.touch(changed)
    }

    // === Evaluation ===

    /// Score both sides and derive the ratio, requirement and projection
    pub fn evaluate(&self) -> EngagementReport {
        let breakdowns = self
            .sides
            .map(|side, input| ScoreBreakdown::compute(input, side, &self.dataset));
        let ratio = compute_ratio(breakdowns.friendly.score, breakdowns.enemy.score);

        let confrontations = ConfrontationDomain::all()
            .iter()
            .map(|domain| self.confrontation(*domain))
            .collect();

        let requirement = RequirementCheck {
            mission: self.mission.clone(),
            required: self.dataset.missions.get(&self.mission),
            meets: self.dataset.missions.meets_mission(ratio, &self.mission),
        };

        let profile = self.dataset.degradation.profile_or_none(&self.profile);
        let projection = project_degradation_with_attacker(
            breakdowns.friendly.score,
            breakdowns.enemy.score,
            &profile,
            self.hours,
            self.attacker,
        );

        tracing::debug!(revision = self.revision, ?ratio, meets = requirement.meets, "evaluated engagement");

        EngagementReport {
            revision: self.revision,
            breakdowns,
            confrontations,
            ratio,
            reading: RatioReading::of(ratio),
            requirement,
            profile: self.profile.clone(),
            attacker: self.attacker,
            projection,
        }
    }
}

impl Default for Engagement {
    fn default() -> Self {
        Engagement::new(Dataset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratio::RatioResult;
    use crate::types::Category;

    fn neutral(engagement: &mut Engagement, side: Side) {
        for (key, label) in [
            (MultiplierKey::Morale, "Normal"),
            (MultiplierKey::CombatExperience, "Inexperienced"),
            (MultiplierKey::Framing, "One echelon"),
            (MultiplierKey::Logistics, "Limited"),
            (MultiplierKey::Communications, "Limited"),
        ] {
            engagement.select_multiplier(side, key, label).unwrap();
        }
    }

    #[test]
    fn test_new_engagement_defaults() {
        let engagement = Engagement::default();
        assert_eq!(engagement.mission(), "Main attack");
        assert_eq!(engagement.profile(), "Attack 3:1");
        assert_eq!(engagement.hours(), 24.0);
        assert_eq!(engagement.attacker(), Side::Friendly);
        assert_eq!(engagement.revision(), 0);
        for side in Side::all() {
            let multipliers = &engagement.side(*side).multipliers;
            for key in [
                MultiplierKey::EngineeringStatus,
                MultiplierKey::ElectronicWarfareStatus,
                MultiplierKey::AirDefenseStatus,
            ] {
                assert_eq!(multipliers.status(key), Some(TriStatus::Equivalence));
            }
        }
    }

    #[test]
    fn test_reference_scenario_is_infinite() {
        let mut engagement = Engagement::default();
        neutral(&mut engagement, Side::Friendly);
        engagement.add_element(Side::Friendly, ElementEntry::new(Category::Large, "Bda Inf Mec").with_quantity(2));

        let report = engagement.evaluate();
        assert!((report.score(Side::Friendly) - 11.6).abs() < 1e-9);
        assert_eq!(report.score(Side::Enemy), 0.0);
        assert_eq!(report.ratio, RatioResult::Infinite);
        assert!(report.requirement.meets);
    }

    #[test]
    fn test_empty_engagement_is_undefined() {
        let report = Engagement::default().evaluate();
        assert_eq!(report.ratio, RatioResult::Undefined);
        assert_eq!(report.reading, RatioReading::Undetermined);
        assert!(!report.requirement.meets);
    }

    #[test]
    fn test_element_edits() {
        let mut engagement = Engagement::default();
        let index = engagement.add_element(Side::Enemy, ElementEntry::new(Category::Medium, "RCC"));
        assert_eq!(engagement.revision(), 1);

        assert_eq!(engagement.update_element(Side::Enemy, index, |e| e.set_strength(60.0)), Ok(true));
        assert_eq!(engagement.update_element(Side::Enemy, index, |e| e.set_strength(60.0)), Ok(false));
        assert_eq!(engagement.revision(), 2);
        assert_eq!(engagement.side(Side::Enemy).elements[0].strength_percent, 60);

        assert_eq!(
            engagement.update_element(Side::Friendly, 0, |e| e.quantity = 3),
            Err(SelectionError::UnknownElement { side: Side::Friendly, index: 0 })
        );

        let removed = engagement.remove_element(Side::Enemy, index).unwrap();
        assert_eq!(removed.coefficient_key, "RCC");
        assert!(engagement.side(Side::Enemy).elements.is_empty());
        assert!(engagement.remove_element(Side::Enemy, 0).is_err());
    }

    #[test]
    fn test_direct_strength_write_is_capped() {
        let mut engagement = Engagement::default();
        let index = engagement.add_element(Side::Friendly, ElementEntry::new(Category::Small, "Cia Fuz"));

        // Already at full strength, so an over-range write changes nothing
        assert_eq!(engagement.update_element(Side::Friendly, index, |e| e.strength_percent = 250), Ok(false));
        assert_eq!(engagement.side(Side::Friendly).elements[index].strength_percent, 100);
        assert_eq!(engagement.revision(), 1);

        engagement.update_element(Side::Friendly, index, |e| e.strength_percent = 40).unwrap();
        assert_eq!(engagement.update_element(Side::Friendly, index, |e| e.strength_percent = 200), Ok(true));
        assert_eq!(engagement.side(Side::Friendly).elements[index].strength_percent, 100);
    }

    #[test]
    fn test_replace_element() {
        let mut engagement = Engagement::default();
        let index = engagement.add_element(Side::Enemy, ElementEntry::new(Category::Medium, "RCC"));

        let replacement = ElementEntry::new(Category::Medium, "BI Mec").with_quantity(2);
        assert_eq!(engagement.replace_element(Side::Enemy, index, replacement.clone()), Ok(true));
        assert_eq!(engagement.replace_element(Side::Enemy, index, replacement), Ok(false));
        assert_eq!(engagement.side(Side::Enemy).elements[index].coefficient_key, "BI Mec");
        assert_eq!(engagement.revision(), 2);

        assert_eq!(
            engagement.replace_element(Side::Enemy, 5, ElementEntry::new(Category::Medium, "RCC")),
            Err(SelectionError::UnknownElement { side: Side::Enemy, index: 5 })
        );
    }

    #[test]
    fn test_engineering_mirror() {
        let mut engagement = Engagement::default();
        let key = MultiplierKey::EngineeringStatus;

        assert_eq!(engagement.set_engineering_status(TriStatus::Superiority), Ok(true));
        assert_eq!(engagement.side(Side::Enemy).multipliers.status(key), Some(TriStatus::Inferiority));
        assert_eq!(engagement.revision(), 1);

        // Same value again writes nothing
        assert_eq!(engagement.set_engineering_status(TriStatus::Superiority), Ok(false));
        assert_eq!(engagement.revision(), 1);

        assert_eq!(engagement.set_engineering_status(TriStatus::Equivalence), Ok(true));
        assert_eq!(engagement.side(Side::Enemy).multipliers.status(key), Some(TriStatus::Equivalence));
    }

    #[test]
    fn test_enemy_engineering_rejected() {
        let mut engagement = Engagement::default();
        let result = engagement.select_multiplier(Side::Enemy, MultiplierKey::EngineeringStatus, "Superiority");
        assert_eq!(
            result,
            Err(SelectionError::MirroredKey(MultiplierKey::EngineeringStatus, Side::Enemy))
        );
        assert_eq!(engagement.revision(), 0);
    }

    #[test]
    fn test_derived_keys_rejected() {
        let mut engagement = Engagement::default();
        for key in [MultiplierKey::ElectronicWarfareStatus, MultiplierKey::AirDefenseStatus] {
            for side in Side::all() {
                assert_eq!(
                    engagement.select_multiplier(*side, key, "Superiority"),
                    Err(SelectionError::DerivedKey(key))
                );
            }
        }
    }

    #[test]
    fn test_unknown_option_rejected() {
        let mut engagement = Engagement::default();
        let result = engagement.select_multiplier(Side::Friendly, MultiplierKey::Morale, "Ecstatic");
        assert!(matches!(result, Err(SelectionError::UnknownOption { .. })));
    }

    #[test]
    fn test_confrontation_propagates() {
        let mut engagement = Engagement::default();
        let ew = ConfrontationDomain::ElectronicWarfare;
        let key = MultiplierKey::ElectronicWarfareStatus;

        assert!(engagement.set_confrontation_count(ew, Side::Enemy, "BGE", 1));
        assert_eq!(engagement.side(Side::Friendly).multipliers.status(key), Some(TriStatus::Inferiority));
        assert_eq!(engagement.side(Side::Enemy).multipliers.status(key), Some(TriStatus::Superiority));

        // 1 × 3.0 vs 1 × 2.5
        assert!(engagement.set_confrontation_count(ew, Side::Friendly, "BGE", 1));
        assert_eq!(engagement.side(Side::Friendly).multipliers.status(key), Some(TriStatus::Superiority));

        let report = engagement.evaluate();
        let outcome = report.confrontations.iter().find(|c| c.domain == ew).unwrap();
        assert_eq!(outcome.statuses.friendly, TriStatus::Superiority);
    }

    #[test]
    fn test_repeated_count_is_idempotent() {
        let mut engagement = Engagement::default();
        let ad = ConfrontationDomain::AirDefense;
        assert!(engagement.set_confrontation_count(ad, Side::Friendly, "Bia AAAe", 3));
        let revision = engagement.revision();
        let snapshot = engagement.side(Side::Friendly).clone();

        assert!(!engagement.set_confrontation_count(ad, Side::Friendly, "Bia AAAe", 3));
        assert_eq!(engagement.revision(), revision);
        assert_eq!(engagement.side(Side::Friendly), &snapshot);
    }

    #[test]
    fn test_status_unchanged_by_count_change() {
        let mut engagement = Engagement::default();
        let ad = ConfrontationDomain::AirDefense;
        let key = MultiplierKey::AirDefenseStatus;
        engagement.set_confrontation_count(ad, Side::Friendly, "Bia AAAe", 3);
        engagement.set_confrontation_count(ad, Side::Friendly, "Bia AAAe", 4);
        assert_eq!(engagement.side(Side::Friendly).multipliers.status(key), Some(TriStatus::Superiority));
        assert_eq!(engagement.side(Side::Enemy).multipliers.status(key), Some(TriStatus::Inferiority));
    }

    #[test]
    fn test_mission_and_profile() {
        let mut engagement = Engagement::default();
        assert_eq!(engagement.set_mission("Defense"), Ok(true));
        assert_eq!(engagement.set_mission("Defense"), Ok(false));
        assert_eq!(
            engagement.set_mission("Raid"),
            Err(SelectionError::UnknownMission("Raid".to_string()))
        );
        assert_eq!(engagement.set_profile("Counterattack 2:1"), Ok(true));
        assert!(engagement.set_profile("Siege").is_err());
        assert_eq!(engagement.profile(), "Counterattack 2:1");
    }

    #[test]
    fn test_projection_uses_settings() {
        let mut engagement = Engagement::default();
        neutral(&mut engagement, Side::Friendly);
        neutral(&mut engagement, Side::Enemy);
        engagement.add_element(Side::Friendly, ElementEntry::new(Category::Medium, "BIB").with_quantity(10));
        engagement.add_element(Side::Enemy, ElementEntry::new(Category::Medium, "BIB").with_quantity(5));
        assert!(engagement.set_hours(12.0));
        assert!(!engagement.set_hours(12.0));

        // Attack 3:1 over 12h: 0.125 friendly, 0.10 enemy
        let report = engagement.evaluate();
        assert!((report.projection.effective_reduction_friendly - 0.125).abs() < 1e-12);
        assert!((report.projection.effective_reduction_enemy - 0.10).abs() < 1e-12);

        assert!(engagement.set_attacker(Side::Enemy));
        let report = engagement.evaluate();
        assert!((report.projection.effective_reduction_friendly - 0.10).abs() < 1e-12);
        assert!((report.projection.effective_reduction_enemy - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_negative_hours_clamped() {
        let mut engagement = Engagement::default();
        engagement.set_hours(-6.0);
        assert_eq!(engagement.hours(), 0.0);
        let report = engagement.evaluate();
        assert_eq!(report.projection.effective_reduction_friendly, 0.0);
    }

    #[test]
    fn test_support_fire_revision() {
        let mut engagement = Engagement::default();
        assert!(engagement.set_support_fire(Side::Friendly, "GMF", 1));
        assert!(!engagement.set_support_fire(Side::Friendly, "GMF", 1));
        assert_eq!(engagement.revision(), 1);
    }
}
