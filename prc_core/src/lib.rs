//! prc_core - Combat power ratio calculation for two opposing forces
//!
//! This library provides:
//! - Dataset: coefficient tables, multiplier catalog, missions, degradation
//!   profiles and confrontation weights, loaded from TOML
//! - Score aggregation: one combat power per side from its elements, support
//!   fire and qualitative multipliers
//! - Confrontation: electronic-warfare and air-defense status pairs
//! - Ratio and requirement: friendly/enemy ratio checked against a mission
//! - Degradation: projected scores and ratio after a number of hours
//! - Engagement: the editable state tying all of the above together

pub mod config;
pub mod confrontation;
pub mod degradation;
pub mod engagement;
pub mod prelude;
pub mod ratio;
pub mod sanitize;
pub mod scenario;
pub mod score;
pub mod side;
pub mod types;

// Re-export core types for convenience
pub use config::{ConfigError, Dataset};
pub use confrontation::{compute_confrontation, ConfrontationOutcome, UnitCounts};
pub use degradation::{
    project_degradation, project_degradation_with_attacker, DegradationProfile, DegradationProjection,
};
pub use engagement::{Engagement, EngagementReport, SelectionError};
pub use ratio::{compute_ratio, RatioReading, RatioResult, RequiredRatio};
pub use scenario::{load_engagement, load_scenario, parse_scenario, ScenarioError, ScenarioFile};
pub use score::{compute_score, ScoreBreakdown, ScoreSource};
pub use side::{ElementEntry, MultiplierSelection, SideInput, SupportFireCount};
pub use types::{
    Category, ConfrontationDomain, MultiplierKey, PerSide, Posture, Side, Terrain, TriStatus, Visibility,
};
