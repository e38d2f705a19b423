//! Prelude module for convenient imports
//!
//! ```rust
//! use prc_core::prelude::*;
//! ```

// Core types
pub use crate::types::{
    Category, ConfrontationDomain, MultiplierKey, PerSide, Posture, Side, Terrain, TriStatus, Visibility,
};

// Inputs
pub use crate::side::{ElementEntry, MultiplierSelection, SideInput, SupportFireCount};

// Pipeline
pub use crate::confrontation::compute_confrontation;
pub use crate::degradation::{project_degradation, DegradationProfile};
pub use crate::ratio::{compute_ratio, RatioReading, RatioResult, RequiredRatio};
pub use crate::score::{compute_score, ScoreBreakdown};

// State
pub use crate::engagement::{Engagement, EngagementReport, SelectionError};

// Config
pub use crate::config::{ConfigError, Dataset};
