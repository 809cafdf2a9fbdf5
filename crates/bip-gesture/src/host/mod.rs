//! Collaborator interfaces the gesture core runs against
//!
//! The core never reaches into a document itself. Reads of rendered
//! geometry go through [`TransformProvider`]; class flags, inline styles
//! and notifications go through [`Host`].

mod memory;

pub use memory::{MemoryHost, StyleRule};

use crate::event::BipEvent;
use crate::geometry::TransitionLists;
use crate::math::Matrix2d;
use crate::relation::ElementId;

/// Source of resolved (computed) styling for elements
pub trait TransformProvider {
    /// Currently rendered transform matrix, `None` when no transform applies
    fn transform(&self, element: &ElementId) -> Option<Matrix2d>;

    /// Computed value of a plain CSS property
    fn css_value(&self, element: &ElementId, property: &str) -> Option<String>;

    /// Computed transition lists
    fn transition(&self, element: &ElementId) -> TransitionLists;
}

/// Mutable element layer the controller drives
pub trait Host: TransformProvider {
    /// Check a class flag
    fn has_class(&self, element: &ElementId, class: &str) -> bool;

    /// Set or clear a class flag
    fn set_class(&mut self, element: &ElementId, class: &str, enabled: bool);

    /// Flip a class flag
    fn toggle_class(&mut self, element: &ElementId, class: &str) {
        let enabled = !self.has_class(element, class);
        self.set_class(element, class, enabled);
    }

    /// Write one inline style declaration
    fn set_style(&mut self, element: &ElementId, property: &str, value: &str);

    /// Drop all inline styling, returning the element to its stylesheet state
    fn clear_style(&mut self, element: &ElementId);

    /// Lock or release document scrolling
    fn set_scroll_locked(&mut self, locked: bool);

    /// Update a controller's expanded-state indicator
    fn set_expanded(&mut self, controller: &ElementId, expanded: bool);

    /// Deliver a domain event to external listeners
    fn emit(&mut self, event: &BipEvent) {
        let _ = event;
    }
}
