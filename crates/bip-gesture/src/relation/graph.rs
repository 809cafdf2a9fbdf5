//! Declarative relationship graph and target resolution

use std::collections::BTreeMap;

use log::trace;
use serde::{Deserialize, Serialize};

use super::ElementId;
use crate::error::RelationError;
use crate::host::Host;

/// Relationships declared on one element
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementDecl {
    pub id: ElementId,
    /// Element is itself a draggable panel
    pub zone: bool,
    /// Element this one controls
    pub controls: Option<ElementId>,
    /// Elements this one closes
    pub closes: Vec<ElementId>,
    /// Elements that follow this one
    pub buddies: Vec<ElementId>,
}

impl ElementDecl {
    /// A draggable panel
    pub fn panel(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            zone: true,
            ..Self::default()
        }
    }

    /// An element controlling `target`
    pub fn controller(id: impl Into<ElementId>, target: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            controls: Some(target.into()),
            ..Self::default()
        }
    }

    /// An element closing any of `targets`
    pub fn closer<I, T>(id: impl Into<ElementId>, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ElementId>,
    {
        Self {
            id: id.into(),
            closes: targets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// A plain follower element
    pub fn follower(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Add buddies
    pub fn with_buddies<I, T>(mut self, buddies: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ElementId>,
    {
        self.buddies.extend(buddies.into_iter().map(Into::into));
        self
    }
}

/// Validated relationship graph
#[derive(Clone, Debug, Default)]
pub struct RelationGraph {
    elements: BTreeMap<ElementId, ElementDecl>,
}

impl RelationGraph {
    /// Build a graph, dropping references that do not resolve.
    ///
    /// Every dropped reference is reported once in the returned errors.
    pub fn build(decls: Vec<ElementDecl>) -> (RelationGraph, Vec<RelationError>) {
        let mut errors = Vec::new();
        let mut elements = BTreeMap::new();

        for decl in decls {
            if elements.contains_key(&decl.id) {
                errors.push(RelationError::Duplicate(decl.id.clone()));
                continue;
            }
            elements.insert(decl.id.clone(), decl);
        }

        let known: Vec<ElementId> = elements.keys().cloned().collect();
        let exists = |id: &ElementId| known.binary_search(id).is_ok();

        for decl in elements.values_mut() {
            let id = decl.id.clone();

            decl.buddies.retain(|buddy| {
                if *buddy == id {
                    errors.push(RelationError::SelfBuddy(id.clone()));
                    false
                } else if !exists(buddy) {
                    errors.push(RelationError::UnknownBuddy {
                        element: id.clone(),
                        buddy: buddy.clone(),
                    });
                    false
                } else {
                    true
                }
            });

            if let Some(target) = decl.controls.take() {
                if exists(&target) {
                    decl.controls = Some(target);
                } else {
                    errors.push(RelationError::UnknownControlled { element: id.clone(), target });
                }
            }

            decl.closes.retain(|target| {
                let ok = exists(target);
                if !ok {
                    errors.push(RelationError::UnknownClosed {
                        element: id.clone(),
                        target: target.clone(),
                    });
                }
                ok
            });
        }

        (RelationGraph { elements }, errors)
    }

    /// Declaration of an element
    pub fn get(&self, id: &ElementId) -> Option<&ElementDecl> {
        self.elements.get(id)
    }

    /// Check if an element is declared
    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// All declarations, ordered by identity
    pub fn iter(&self) -> impl Iterator<Item = &ElementDecl> {
        self.elements.values()
    }

    /// Draggable panels
    pub fn panels(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.values().filter(|d| d.zone).map(|d| &d.id)
    }

    /// Elements declaring that they control `target`
    pub fn controllers_of<'a>(&'a self, target: &'a ElementId) -> impl Iterator<Item = &'a ElementId> + 'a {
        self.elements
            .values()
            .filter(move |d| d.controls.as_ref() == Some(target))
            .map(|d| &d.id)
    }

    /// Resolve the primary target of a gesture starting on `zone`.
    ///
    /// A closer resolves to the single currently open element it closes and
    /// to nothing when zero or several of them are open. A controller
    /// resolves to the element it controls; anything else to itself.
    pub fn resolve_target<H: Host + ?Sized>(
        &self,
        zone: &ElementId,
        host: &H,
        open_class: &str,
    ) -> Option<ElementId> {
        let decl = self.get(zone)?;

        if !decl.closes.is_empty() {
            let mut open = decl
                .closes
                .iter()
                .filter(|id| host.has_class(id, open_class));
            return match (open.next(), open.next()) {
                (Some(only), None) => Some(only.clone()),
                (None, _) => {
                    trace!("{}: nothing open to close", zone);
                    None
                }
                (Some(_), Some(_)) => {
                    trace!("{}: several open elements, target is ambiguous", zone);
                    None
                }
            };
        }

        match &decl.controls {
            Some(target) => Some(target.clone()),
            None => Some(zone.clone()),
        }
    }

    /// The target followed by its declared buddies, without repeats
    pub fn buddies_of(&self, target: &ElementId) -> Vec<ElementId> {
        let mut buddies = vec![target.clone()];
        if let Some(decl) = self.get(target) {
            for buddy in &decl.buddies {
                if !buddies.contains(buddy) {
                    buddies.push(buddy.clone());
                }
            }
        }
        buddies
    }
}
