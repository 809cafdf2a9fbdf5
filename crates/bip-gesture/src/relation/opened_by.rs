//! Opened-by multiplicity tracking for shared buddies

use std::collections::{BTreeSet, HashMap};

use super::ElementId;

/// Which targets currently hold each buddy open
///
/// A buddy shared by several targets only closes once its last opener
/// closes.
#[derive(Clone, Debug, Default)]
pub struct OpenedBy {
    openers: HashMap<ElementId, BTreeSet<ElementId>>,
}

impl OpenedBy {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `opener` opened `buddy`
    pub fn open(&mut self, buddy: &ElementId, opener: &ElementId) {
        self.openers
            .entry(buddy.clone())
            .or_default()
            .insert(opener.clone());
    }

    /// Drop `opener`'s hold on `buddy`, returning how many openers remain
    pub fn close(&mut self, buddy: &ElementId, opener: &ElementId) -> usize {
        let remaining = match self.openers.get_mut(buddy) {
            Some(set) => {
                set.remove(opener);
                set.len()
            }
            None => 0,
        };
        if remaining == 0 {
            self.openers.remove(buddy);
        }
        remaining
    }

    /// Number of targets holding `buddy` open
    pub fn count(&self, buddy: &ElementId) -> usize {
        self.openers.get(buddy).map_or(0, BTreeSet::len)
    }

    /// Check if `opener` holds `buddy` open
    pub fn is_opened_by(&self, buddy: &ElementId, opener: &ElementId) -> bool {
        self.openers
            .get(buddy)
            .is_some_and(|set| set.contains(opener))
    }

    /// Whether a drag on `target` may move `buddy`: nobody else holds it open
    pub fn may_follow(&self, buddy: &ElementId, target: &ElementId) -> bool {
        match self.count(buddy) {
            0 => true,
            1 => self.is_opened_by(buddy, target),
            _ => false,
        }
    }
}
