//! Rejected edits on an engagement

use crate::types::{MultiplierKey, Side};
use thiserror::Error;

/// A manual edit the engagement refused to apply
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("unknown multiplier '{0}'")]
    UnknownKey(String),
    #[error("{0:?} is derived from its confrontation and cannot be set by hand")]
    DerivedKey(MultiplierKey),
    #[error("{0:?} on the {1:?} side mirrors the other side and cannot be set by hand")]
    MirroredKey(MultiplierKey, Side),
    #[error("'{label}' is not an option of {key:?}")]
    UnknownOption { key: MultiplierKey, label: String },
    #[error("{side:?} side has no element at index {index}")]
    UnknownElement { side: Side, index: usize },
    #[error("unknown mission '{0}'")]
    UnknownMission(String),
    #[error("unknown degradation profile '{0}'")]
    UnknownProfile(String),
}
