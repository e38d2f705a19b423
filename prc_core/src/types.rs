//! Core types shared by every stage of the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the two opposing forces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Friendly,
    Enemy,
}

impl Side {
    /// Both sides, friendly first
    pub fn all() -> &'static [Side] {
        &[Side::Friendly, Side::Enemy]
    }

    /// The opposing side
    pub fn opposite(self) -> Side {
        match self {
            Side::Friendly => Side::Enemy,
            Side::Enemy => Side::Friendly,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Friendly => "Friendly",
            Side::Enemy => "Enemy",
        }
    }
}

/// A value held once per side with identical structure on both
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerSide<T> {
    pub friendly: T,
    pub enemy: T,
}

impl<T> PerSide<T> {
    pub fn new(friendly: T, enemy: T) -> Self {
        PerSide { friendly, enemy }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Friendly => &self.friendly,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Friendly => &mut self.friendly,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Apply the same function to both sides
    pub fn map<U>(&self, mut f: impl FnMut(Side, &T) -> U) -> PerSide<U> {
        PerSide {
            friendly: f(Side::Friendly, &self.friendly),
            enemy: f(Side::Enemy, &self.enemy),
        }
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}

/// Echelon of a maneuver element, selects the coefficient table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Brigade-level formations
    Large,
    /// Battalion/regiment-level units
    Medium,
    /// Company/squadron-level subunits
    Small,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Category::Large, Category::Medium, Category::Small]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Large => "Large unit",
            Category::Medium => "Unit",
            Category::Small => "Subunit",
        }
    }
}

/// Whether an element is counted with its offensive or defensive coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Posture {
    #[default]
    Offensive,
    Defensive,
}

/// Visibility condition for one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Day,
    NightWithNightVision,
    NightWithoutNightVision,
}

impl Visibility {
    pub fn all() -> &'static [Visibility] {
        &[
            Visibility::Day,
            Visibility::NightWithNightVision,
            Visibility::NightWithoutNightVision,
        ]
    }

    pub fn factor(&self) -> f64 {
        match self {
            Visibility::Day => 1.0,
            Visibility::NightWithNightVision => 1.0,
            Visibility::NightWithoutNightVision => 0.25,
        }
    }
}

/// Terrain and vegetation condition for one element
///
/// `Trained` means the element is specifically prepared for the terrain, in
/// which case no penalty applies whatever the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    #[default]
    Trained,
    UntrainedPlain,
    UntrainedRolling,
    UntrainedHilly,
    UntrainedMountainous,
    UntrainedDesert,
}

impl Terrain {
    pub fn all() -> &'static [Terrain] {
        &[
            Terrain::Trained,
            Terrain::UntrainedPlain,
            Terrain::UntrainedRolling,
            Terrain::UntrainedHilly,
            Terrain::UntrainedMountainous,
            Terrain::UntrainedDesert,
        ]
    }

    pub fn factor(&self) -> f64 {
        match self {
            Terrain::Trained => 1.0,
            Terrain::UntrainedPlain => 0.75,
            Terrain::UntrainedRolling => 0.5,
            Terrain::UntrainedHilly => 0.25,
            Terrain::UntrainedMountainous => 0.1,
            Terrain::UntrainedDesert => 0.5,
        }
    }
}

/// Pairwise qualitative status between the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriStatus {
    Superiority,
    Equivalence,
    Inferiority,
}

impl TriStatus {
    pub fn all() -> &'static [TriStatus] {
        &[
            TriStatus::Superiority,
            TriStatus::Equivalence,
            TriStatus::Inferiority,
        ]
    }

    /// The status the opposing side holds when this side holds `self`
    pub fn mirror(self) -> TriStatus {
        match self {
            TriStatus::Superiority => TriStatus::Inferiority,
            TriStatus::Equivalence => TriStatus::Equivalence,
            TriStatus::Inferiority => TriStatus::Superiority,
        }
    }

    /// Option label used in the multiplier catalog
    pub fn label(&self) -> &'static str {
        match self {
            TriStatus::Superiority => "Superiority",
            TriStatus::Equivalence => "Equivalence",
            TriStatus::Inferiority => "Inferiority",
        }
    }
}

impl fmt::Display for TriStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TriStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TriStatus::all()
            .iter()
            .copied()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown status '{}'", s))
    }
}

/// Support domain whose opposing unit counts decide a multiplier status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfrontationDomain {
    ElectronicWarfare,
    AirDefense,
}

impl ConfrontationDomain {
    pub fn all() -> &'static [ConfrontationDomain] {
        &[
            ConfrontationDomain::ElectronicWarfare,
            ConfrontationDomain::AirDefense,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfrontationDomain::ElectronicWarfare => "Electronic warfare",
            ConfrontationDomain::AirDefense => "Air defense",
        }
    }
}

/// The nine qualitative factors averaged into a side's multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierKey {
    Morale,
    ProfessionalStrength,
    CombatExperience,
    Framing,
    Logistics,
    Communications,
    /// Set on the friendly side, mirrored on the enemy side
    EngineeringStatus,
    /// Derived from the electronic-warfare confrontation
    ElectronicWarfareStatus,
    /// Derived from the air-defense confrontation
    AirDefenseStatus,
}

impl MultiplierKey {
    pub fn all() -> &'static [MultiplierKey] {
        &[
            MultiplierKey::Morale,
            MultiplierKey::ProfessionalStrength,
            MultiplierKey::CombatExperience,
            MultiplierKey::Framing,
            MultiplierKey::Logistics,
            MultiplierKey::Communications,
            MultiplierKey::EngineeringStatus,
            MultiplierKey::ElectronicWarfareStatus,
            MultiplierKey::AirDefenseStatus,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MultiplierKey::Morale => "Morale",
            MultiplierKey::ProfessionalStrength => "Professional strength",
            MultiplierKey::CombatExperience => "Combat experience",
            MultiplierKey::Framing => "Framing",
            MultiplierKey::Logistics => "Logistic capacity",
            MultiplierKey::Communications => "Communications capacity",
            MultiplierKey::EngineeringStatus => "Engineering support status",
            MultiplierKey::ElectronicWarfareStatus => "Electronic warfare status",
            MultiplierKey::AirDefenseStatus => "Air defense status",
        }
    }

    /// Key as written in configuration and scenario files
    pub fn key(&self) -> &'static str {
        match self {
            MultiplierKey::Morale => "morale",
            MultiplierKey::ProfessionalStrength => "professional_strength",
            MultiplierKey::CombatExperience => "combat_experience",
            MultiplierKey::Framing => "framing",
            MultiplierKey::Logistics => "logistics",
            MultiplierKey::Communications => "communications",
            MultiplierKey::EngineeringStatus => "engineering_status",
            MultiplierKey::ElectronicWarfareStatus => "electronic_warfare_status",
            MultiplierKey::AirDefenseStatus => "air_defense_status",
        }
    }

    /// The confrontation domain that owns this key, if any
    pub fn derived_from(&self) -> Option<ConfrontationDomain> {
        match self {
            MultiplierKey::ElectronicWarfareStatus => Some(ConfrontationDomain::ElectronicWarfare),
            MultiplierKey::AirDefenseStatus => Some(ConfrontationDomain::AirDefense),
            _ => None,
        }
    }

    /// Whether options of this key are tri-state status labels
    pub fn is_status(&self) -> bool {
        matches!(
            self,
            MultiplierKey::EngineeringStatus
                | MultiplierKey::ElectronicWarfareStatus
                | MultiplierKey::AirDefenseStatus
        )
    }
}

impl FromStr for MultiplierKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MultiplierKey::all()
            .iter()
            .copied()
            .find(|key| key.key() == s.trim())
            .ok_or_else(|| format!("unknown multiplier '{}'", s))
    }
}

impl ConfrontationDomain {
    /// Multiplier key written by this domain's confrontation
    pub fn multiplier_key(&self) -> MultiplierKey {
        match self {
            ConfrontationDomain::ElectronicWarfare => MultiplierKey::ElectronicWarfareStatus,
            ConfrontationDomain::AirDefense => MultiplierKey::AirDefenseStatus,
        }
    }
}
