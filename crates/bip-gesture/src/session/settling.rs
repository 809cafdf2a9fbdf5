//! Settling bookkeeping after pointer-up

use crate::relation::ElementId;

/// A target transitioning toward its committed or reverted state
///
/// Ends when the target reports transition end or, failing that, once the
/// deadline passes. Either path removes the record, so the other one finds
/// nothing left to do.
#[derive(Clone, Debug, PartialEq)]
pub struct Settling {
    pub target: ElementId,
    /// Participants whose inline styling is still in place
    pub pending: Vec<ElementId>,
    /// Fallback deadline on the injected clock
    pub deadline_ms: f64,
}

impl Settling {
    pub fn new(target: ElementId, pending: Vec<ElementId>, deadline_ms: f64) -> Self {
        Self {
            target,
            pending,
            deadline_ms,
        }
    }

    /// Drop `element` from the pending set, returning whether it was there
    pub fn release(&mut self, element: &ElementId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|id| id != element);
        self.pending.len() != before
    }

    /// Whether the target itself has not finished yet
    #[inline]
    pub fn target_pending(&self) -> bool {
        self.pending.contains(&self.target)
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether the fallback deadline has passed
    #[inline]
    pub fn expired(&self, now_ms: f64) -> bool {
        now_ms >= self.deadline_ms
    }
}
