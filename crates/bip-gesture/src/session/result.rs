//! Gesture handling result type

use serde::Serialize;

/// Why an input was ignored
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IgnoreReason {
    /// Input did not start on a gesture zone
    OutsideZone,
    /// Input started inside an ignore zone
    IgnoreZone,
    /// No unambiguous target
    Unresolved,
    /// Target is still settling from a previous toggle
    Transitioning,
    /// Target has no driving geometry to follow
    NoGeometry,
    /// No gesture is in progress
    NoSession,
    /// Input came from a different pointer stream than the gesture
    SourceMismatch,
    /// Mouse drags are disabled
    PointerDragDisabled,
}

/// Result of gesture input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GestureResult {
    /// Input was consumed by the active gesture
    Handled,
    /// Input was not handled (pass through)
    Ignored { reason: IgnoreReason },
    /// The pointer lifted and the gesture settles
    Settled {
        /// Whether the toggle committed or reverted
        committed: bool,
    },
    /// A programmatic toggle flipped the target
    Toggled,
}

impl GestureResult {
    pub(crate) fn ignored(reason: IgnoreReason) -> Self {
        GestureResult::Ignored { reason }
    }

    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, GestureResult::Ignored { .. })
    }

    /// Check if the gesture committed a toggle
    #[inline]
    pub fn is_committed(&self) -> bool {
        matches!(
            self,
            GestureResult::Settled { committed: true } | GestureResult::Toggled
        )
    }

    /// Reason the input was ignored, if it was
    pub fn ignore_reason(&self) -> Option<IgnoreReason> {
        match self {
            GestureResult::Ignored { reason } => Some(*reason),
            _ => None,
        }
    }
}
