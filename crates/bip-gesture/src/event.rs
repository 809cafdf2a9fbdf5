//! Domain events delivered to external listeners

use serde::Serialize;

use crate::relation::ElementId;

/// Kind of domain event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BipEventKind {
    /// A gesture armed on a target
    DragStart,
    /// The pointer lifted and the target started settling
    DragMoveSettled,
    /// A target's open state flipped
    ToggleCommitted,
}

impl BipEventKind {
    /// Event name as seen by listeners
    pub fn name(&self) -> &'static str {
        match self {
            BipEventKind::DragStart => "drag-start",
            BipEventKind::DragMoveSettled => "drag-move-settled",
            BipEventKind::ToggleCommitted => "toggle-committed",
        }
    }
}

/// Event carrying the element it concerns
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BipEvent {
    pub kind: BipEventKind,
    pub target: ElementId,
}

impl BipEvent {
    pub fn new(kind: BipEventKind, target: &ElementId) -> Self {
        Self {
            kind,
            target: target.clone(),
        }
    }
}
