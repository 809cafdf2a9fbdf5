//! Error types
//!
//! Only configuration problems are surfaced as errors. Everything on the
//! pointer hot path degrades to a silent no-op instead.

use crate::relation::ElementId;

/// Invalid controller configuration
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Threshold fraction must lie in `[0, 1]`.
    #[error("threshold fraction must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    /// A state class name is empty.
    #[error("state class `{field}` must not be empty")]
    EmptyClass { field: &'static str },

    /// Neither transform nor CSS properties are tracked.
    #[error("no transform or CSS properties are tracked")]
    NothingTracked,

    /// The driving transform channel is not among the tracked ones.
    #[error("driving property `{0}` is not tracked")]
    DrivingNotTracked(String),

    /// Hysteresis band is negative or not finite.
    #[error("hysteresis must be a finite non-negative number, got {0}")]
    InvalidHysteresis(f64),

    /// Options could not be parsed.
    #[error("invalid options: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Broken declarative relationship between elements
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RelationError {
    /// A buddy identity does not resolve to any declared element.
    #[error("element `{element}` lists unknown buddy `{buddy}`")]
    UnknownBuddy { element: ElementId, buddy: ElementId },

    /// A controls reference does not resolve.
    #[error("element `{element}` controls unknown element `{target}`")]
    UnknownControlled { element: ElementId, target: ElementId },

    /// A closes reference does not resolve.
    #[error("element `{element}` closes unknown element `{target}`")]
    UnknownClosed { element: ElementId, target: ElementId },

    /// An element lists itself as its own buddy.
    #[error("element `{0}` lists itself as a buddy")]
    SelfBuddy(ElementId),

    /// The same identity is declared twice.
    #[error("element `{0}` is declared more than once")]
    Duplicate(ElementId),
}
