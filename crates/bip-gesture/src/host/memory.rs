//! In-memory host
//!
//! Models each element as a set of class flags, an inline style map and a
//! list of class-conditional style rules. Computed values resolve from the
//! rules only; inline declarations are recorded for inspection, except
//! `transition: none` which disables the computed transition lists.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{Host, TransformProvider};
use crate::event::BipEvent;
use crate::geometry::TransitionLists;
use crate::math::Matrix2d;
use crate::relation::ElementId;

/// Stylesheet rule applying while `class` is set (always, when `None`)
#[derive(Clone, Debug, Default)]
pub struct StyleRule {
    pub class: Option<String>,
    pub transform: Option<Matrix2d>,
    pub css: BTreeMap<String, String>,
    pub transition: Option<TransitionLists>,
}

impl StyleRule {
    /// Rule that always applies
    pub fn base() -> Self {
        Self::default()
    }

    /// Rule that applies while `class` is set
    pub fn when(class: &str) -> Self {
        Self {
            class: Some(class.to_string()),
            ..Self::default()
        }
    }

    pub fn transform(mut self, matrix: Matrix2d) -> Self {
        self.transform = Some(matrix);
        self
    }

    pub fn css(mut self, property: &str, value: &str) -> Self {
        self.css.insert(property.to_string(), value.to_string());
        self
    }

    pub fn transition(mut self, lists: TransitionLists) -> Self {
        self.transition = Some(lists);
        self
    }
}

#[derive(Clone, Debug, Default)]
struct MemoryElement {
    classes: BTreeSet<String>,
    inline: BTreeMap<String, String>,
    rules: Vec<StyleRule>,
}

impl MemoryElement {
    fn active_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter().filter(|rule| match &rule.class {
            Some(class) => self.classes.contains(class),
            None => true,
        })
    }
}

/// Host backed by plain maps, usable without a browser
#[derive(Debug, Default)]
pub struct MemoryHost {
    elements: HashMap<ElementId, MemoryElement>,
    scroll_locked: bool,
    expanded: HashMap<ElementId, bool>,
    events: Vec<BipEvent>,
}

impl MemoryHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with its style rules
    pub fn insert(&mut self, id: impl Into<ElementId>, rules: Vec<StyleRule>) -> ElementId {
        let id = id.into();
        self.elements.insert(
            id.clone(),
            MemoryElement {
                rules,
                ..MemoryElement::default()
            },
        );
        id
    }

    /// Remove an element, as if it left the document
    pub fn remove(&mut self, id: &ElementId) {
        self.elements.remove(id);
    }

    /// Check if an element exists
    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Inline declaration currently set on an element
    pub fn inline_style(&self, id: &ElementId, property: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|el| el.inline.get(property))
            .map(String::as_str)
    }

    /// Whether an element carries any inline styling
    pub fn has_inline_style(&self, id: &ElementId) -> bool {
        self.elements.get(id).is_some_and(|el| !el.inline.is_empty())
    }

    /// Current scroll lock state
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Last expanded-state written for a controller
    pub fn expanded(&self, controller: &ElementId) -> Option<bool> {
        self.expanded.get(controller).copied()
    }

    /// Events emitted so far
    pub fn events(&self) -> &[BipEvent] {
        &self.events
    }

    /// Drain emitted events
    pub fn take_events(&mut self) -> Vec<BipEvent> {
        std::mem::take(&mut self.events)
    }
}

impl TransformProvider for MemoryHost {
    fn transform(&self, element: &ElementId) -> Option<Matrix2d> {
        let el = self.elements.get(element)?;
        el.active_rules().filter_map(|rule| rule.transform).last()
    }

    fn css_value(&self, element: &ElementId, property: &str) -> Option<String> {
        let el = self.elements.get(element)?;
        el.active_rules()
            .filter_map(|rule| rule.css.get(property))
            .last()
            .cloned()
    }

    fn transition(&self, element: &ElementId) -> TransitionLists {
        let el = match self.elements.get(element) {
            Some(el) => el,
            None => return TransitionLists::none(),
        };
        if el.inline.get("transition").is_some_and(|v| v == "none") {
            return TransitionLists::none();
        }
        el.active_rules()
            .filter_map(|rule| rule.transition.as_ref())
            .last()
            .cloned()
            .unwrap_or_else(TransitionLists::none)
    }
}

impl Host for MemoryHost {
    fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.elements
            .get(element)
            .is_some_and(|el| el.classes.contains(class))
    }

    fn set_class(&mut self, element: &ElementId, class: &str, enabled: bool) {
        if let Some(el) = self.elements.get_mut(element) {
            if enabled {
                el.classes.insert(class.to_string());
            } else {
                el.classes.remove(class);
            }
        }
    }

    fn set_style(&mut self, element: &ElementId, property: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(element) {
            el.inline.insert(property.to_string(), value.to_string());
        }
    }

    fn clear_style(&mut self, element: &ElementId) {
        if let Some(el) = self.elements.get_mut(element) {
            el.inline.clear();
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_expanded(&mut self, controller: &ElementId, expanded: bool) {
        self.expanded.insert(controller.clone(), expanded);
    }

    fn emit(&mut self, event: &BipEvent) {
        self.events.push(event.clone());
    }
}
