//! Gesture controller coordinating all components
//!
//! This module is split into focused submodules:
//! - `pointer`: pointer-down, move and up handling
//! - `toggle`: the commit path shared by gestures and programmatic toggles
//! - `settle`: transition-end and fallback deadline handling

mod pointer;
mod settle;
mod toggle;

use log::warn;

use crate::config::BipConfig;
use crate::error::ConfigError;
use crate::event::{BipEvent, BipEventKind};
use crate::host::Host;
use crate::relation::{ElementDecl, ElementId, OpenedBy, RelationGraph};
use crate::session::{GestureSession, Phase, Settling};

/// Gesture controller driving one set of declared elements
///
/// Owns the relationship graph, the opened-by ledger, the active gesture
/// session and the settling targets. Every handler takes the host
/// explicitly; time is injected as `now_ms`.
#[derive(Debug)]
pub struct GestureController {
    pub(crate) config: BipConfig,
    pub(crate) graph: RelationGraph,
    pub(crate) opened_by: OpenedBy,
    /// Active gesture
    pub(crate) session: Option<GestureSession>,
    /// Targets settling after pointer-up
    pub(crate) settling: Vec<Settling>,
}

impl GestureController {
    /// Create a controller for the declared elements.
    ///
    /// Broken relationships are logged once and dropped. Controllers'
    /// expanded indicators are synced with their panels' current state.
    pub fn new<H: Host + ?Sized>(
        config: BipConfig,
        decls: Vec<ElementDecl>,
        host: &mut H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let (graph, errors) = RelationGraph::build(decls);
        for error in &errors {
            warn!("{}", error);
        }

        let controller = Self {
            config,
            graph,
            opened_by: OpenedBy::new(),
            session: None,
            settling: Vec::new(),
        };
        controller.sync_expanded(host);
        Ok(controller)
    }

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &BipConfig {
        &self.config
    }

    /// Validated relationship graph
    #[inline]
    pub fn graph(&self) -> &RelationGraph {
        &self.graph
    }

    /// Opened-by ledger of shared buddies
    #[inline]
    pub fn opened_by(&self) -> &OpenedBy {
        &self.opened_by
    }

    /// Active gesture, if any
    #[inline]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Targets still settling
    #[inline]
    pub fn settling(&self) -> &[Settling] {
        &self.settling
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        match &self.session {
            Some(session) => session.phase,
            None if !self.settling.is_empty() => Phase::Settling,
            None => Phase::Idle,
        }
    }

    /// Check if an element is open
    pub fn is_open<H: Host + ?Sized>(&self, host: &H, element: &ElementId) -> bool {
        host.has_class(element, &self.config.open_state_class)
    }

    /// Set every controller's expanded indicator from its panel's state
    pub fn sync_expanded<H: Host + ?Sized>(&self, host: &mut H) {
        for decl in self.graph.iter() {
            if let Some(target) = &decl.controls {
                let expanded = host.has_class(target, &self.config.open_state_class);
                host.set_expanded(&decl.id, expanded);
            }
        }
    }

    pub(crate) fn is_transitioning<H: Host + ?Sized>(&self, host: &H, element: &ElementId) -> bool {
        host.has_class(element, &self.config.transitioning_state_class)
    }

    pub(crate) fn emit<H: Host + ?Sized>(&self, host: &mut H, kind: BipEventKind, target: &ElementId) {
        if self.config.emit_events {
            host.emit(&BipEvent::new(kind, target));
        }
    }
}
