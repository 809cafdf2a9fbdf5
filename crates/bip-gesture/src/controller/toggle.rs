//! Commit path shared by gestures and programmatic toggles

use log::debug;

use super::GestureController;
use crate::event::BipEventKind;
use crate::host::Host;
use crate::relation::ElementId;
use crate::session::{GestureResult, GestureSession, IgnoreReason};
use crate::style::{apply, StyleFrame, StyleMode};

impl GestureController {
    /// Toggle `target` outside of any gesture
    pub fn toggle<H: Host + ?Sized>(&mut self, host: &mut H, target: &ElementId) -> GestureResult {
        if !self.graph.contains(target) {
            debug!("{}: toggle of undeclared element", target);
            return GestureResult::ignored(IgnoreReason::Unresolved);
        }
        if self.is_transitioning(&*host, target) {
            return GestureResult::ignored(IgnoreReason::Transitioning);
        }
        if self.session.as_ref().is_some_and(|s| &s.target == target) {
            self.abort_session(host);
        }

        self.commit_toggle(host, target, None);
        GestureResult::Toggled
    }

    /// Close every open panel, returning how many were closed
    pub fn close_all<H: Host + ?Sized>(&mut self, host: &mut H) -> usize {
        let open: Vec<ElementId> = self
            .graph
            .panels()
            .filter(|id| self.is_open(&*host, id) && !self.is_transitioning(&*host, id))
            .cloned()
            .collect();

        for id in &open {
            self.commit_toggle(host, id, None);
        }
        open.len()
    }

    /// Flip `target`'s open state, carrying its buddies along.
    ///
    /// A shared buddy opens with its first opener and closes with its last.
    /// With a session the participants get completing transition timing.
    pub(crate) fn commit_toggle<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        target: &ElementId,
        session: Option<&GestureSession>,
    ) {
        let open_class = self.config.open_state_class.clone();
        let opening = !host.has_class(target, &open_class);
        host.set_class(target, &open_class, opening);

        let mut flipped = vec![target.clone()];
        for buddy in self.graph.buddies_of(target).into_iter().skip(1) {
            if opening {
                self.opened_by.open(&buddy, target);
                if !host.has_class(&buddy, &open_class) {
                    host.set_class(&buddy, &open_class, true);
                    flipped.push(buddy);
                }
            } else if self.opened_by.close(&buddy, target) == 0 {
                if host.has_class(&buddy, &open_class) {
                    host.set_class(&buddy, &open_class, false);
                    flipped.push(buddy);
                }
            } else {
                debug!("{}: still held open by {} other(s)", buddy, self.opened_by.count(&buddy));
            }
        }

        if let Some(session) = session {
            let driving = self.config.driving_property;
            for set in &session.participants {
                let frame = if flipped.contains(&set.element) {
                    apply(
                        set,
                        &session.drive,
                        session.moved,
                        driving,
                        StyleMode::Settle { completing: true },
                    )
                } else {
                    StyleFrame::Reset
                };
                frame.write_to(host, &set.element);
            }
        }

        let controllers: Vec<ElementId> = self.graph.controllers_of(target).cloned().collect();
        for controller in &controllers {
            host.set_expanded(controller, opening);
        }

        debug!("{}: {}", target, if opening { "opened" } else { "closed" });
        self.emit(host, BipEventKind::ToggleCommitted, target);
    }
}
