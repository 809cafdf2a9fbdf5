//! Pointer handling for gesture sessions

use log::{debug, trace};

use super::GestureController;
use crate::diff::ElementDiffSet;
use crate::event::BipEventKind;
use crate::geometry::{capture, CaptureState, PropertyKind};
use crate::host::Host;
use crate::math::Point;
use crate::progress::PrimaryDrive;
use crate::relation::ElementId;
use crate::session::{
    DragDirection, GestureResult, GestureSession, IgnoreReason, Phase, PointerSource, ZoneHit,
};
use crate::style::{apply, StyleFrame, StyleMode};

impl GestureController {
    /// Handle pointer down on the gesture zone `hit`
    pub fn pointer_down<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        hit: Option<ZoneHit>,
        point: Point,
        source: PointerSource,
    ) -> GestureResult {
        if self.session.is_some() {
            self.abort_session(host);
        }

        let hit = match hit {
            Some(hit) => hit,
            None => return GestureResult::ignored(IgnoreReason::OutsideZone),
        };
        if hit.ignored {
            trace!("{}: pointer down inside ignore zone", hit.zone);
            return GestureResult::ignored(IgnoreReason::IgnoreZone);
        }

        let target = match self
            .graph
            .resolve_target(&hit.zone, &*host, &self.config.open_state_class)
        {
            Some(target) => target,
            None => {
                debug!("{}: no gesture target", hit.zone);
                return GestureResult::ignored(IgnoreReason::Unresolved);
            }
        };

        if self.is_transitioning(&*host, &target) {
            debug!("{}: still transitioning", target);
            return GestureResult::ignored(IgnoreReason::Transitioning);
        }

        let session = match self.build_session(host, target, point, source) {
            Some(session) => session,
            None => return GestureResult::ignored(IgnoreReason::NoGeometry),
        };

        self.release_from_settling(&session);

        host.set_scroll_locked(true);
        host.set_class(&session.target, &self.config.dragging_state_class, true);
        for id in session.element_ids() {
            host.set_style(id, "transition", "none");
        }
        self.emit(host, BipEventKind::DragStart, &session.target);

        debug!(
            "{}: armed along {:?}, {} participant(s)",
            session.target,
            session.drive.axis,
            session.participants.len()
        );
        self.session = Some(session);
        GestureResult::Handled
    }

    /// Handle pointer move
    ///
    /// Styling is recomputed from the absolute pointer position, so repeated
    /// or missed moves never accumulate error.
    pub fn pointer_move<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        point: Point,
        source: PointerSource,
    ) -> GestureResult {
        let allow_pointer_drag = self.config.allow_pointer_drag;
        let band = self.config.hysteresis;

        let session = match self.session.as_mut() {
            Some(session) => session,
            None => return GestureResult::ignored(IgnoreReason::NoSession),
        };
        if session.source != source {
            return GestureResult::ignored(IgnoreReason::SourceMismatch);
        }
        if source == PointerSource::Mouse && !allow_pointer_drag {
            return GestureResult::ignored(IgnoreReason::PointerDragDisabled);
        }
        if host.has_class(&session.target, &self.config.transitioning_state_class) {
            return GestureResult::ignored(IgnoreReason::Transitioning);
        }

        session.phase = Phase::Dragging;

        let progress = session.progress(point);
        let in_range = session.in_range(point);
        session.track_direction(progress, band, in_range);

        if !in_range {
            trace!("{}: {} outside travel range", session.target, progress);
            return GestureResult::Handled;
        }
        session.moved = progress;

        let driving = self.config.driving_property;
        for set in &session.participants {
            if !self.opened_by.may_follow(&set.element, &session.target) {
                continue;
            }
            apply(set, &session.drive, progress, driving, StyleMode::Live).write_to(host, &set.element);
        }

        GestureResult::Handled
    }

    /// Handle pointer up, committing or reverting the gesture
    pub fn pointer_up<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        point: Point,
        source: PointerSource,
        now_ms: f64,
    ) -> GestureResult {
        match &self.session {
            None => return GestureResult::ignored(IgnoreReason::NoSession),
            Some(session) if session.source != source => {
                return GestureResult::ignored(IgnoreReason::SourceMismatch)
            }
            Some(_) => {}
        }
        let session = match self.session.take() {
            Some(session) => session,
            None => return GestureResult::ignored(IgnoreReason::NoSession),
        };

        let moved = point.distance_along(session.start, session.drive.axis);
        let threshold = session.drive.threshold(self.config.threshold_fraction);
        let followed = source == PointerSource::Touch || self.config.allow_pointer_drag;
        let committed = moved == 0.0
            || (followed && moved >= threshold && session.direction == DragDirection::Forward);

        host.set_class(&session.target, &self.config.transitioning_state_class, true);

        if committed {
            self.commit_toggle(host, &session.target, Some(&session));
        } else {
            let driving = self.config.driving_property;
            for set in &session.participants {
                let frame = if self.opened_by.may_follow(&set.element, &session.target) {
                    apply(
                        set,
                        &session.drive,
                        session.moved,
                        driving,
                        StyleMode::Settle { completing: false },
                    )
                } else {
                    StyleFrame::Reset
                };
                frame.write_to(host, &set.element);
            }
        }

        host.set_scroll_locked(false);
        host.set_class(&session.target, &self.config.dragging_state_class, false);

        debug!(
            "{}: released after {} of {} ({})",
            session.target,
            moved,
            threshold,
            if committed { "commit" } else { "revert" }
        );

        self.begin_settling(host, &session, now_ms);
        self.emit(host, BipEventKind::DragMoveSettled, &session.target);

        GestureResult::Settled { committed }
    }

    /// Capture and diff the target and its buddies
    fn build_session<H: Host + ?Sized>(
        &self,
        host: &mut H,
        target: ElementId,
        point: Point,
        source: PointerSource,
    ) -> Option<GestureSession> {
        let mut participants = Vec::new();
        for id in self.graph.buddies_of(&target) {
            let from = capture(host, &id, &self.config, CaptureState::Current);
            let to = capture(host, &id, &self.config, CaptureState::Toggled);
            let set = ElementDiffSet::build(&id, &from, &to, &self.config);
            if id == target || !set.is_empty() {
                participants.push(set);
            }
        }

        let target_set = participants.first()?;
        let drive = match target_set.drive {
            Some(drive) => drive,
            None => {
                debug!("{}: no {} travel", target, self.config.driving_property.name());
                return None;
            }
        };
        let timing = target_set
            .get(&PropertyKind::Transform(self.config.driving_property))
            .map(|d| d.timing)
            .unwrap_or_default();

        Some(GestureSession::new(
            target,
            participants,
            PrimaryDrive::new(drive, timing),
            point,
            source,
        ))
    }

    /// Drop an unfinished session, restoring stylesheet state
    pub(crate) fn abort_session<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(session) = self.session.take() {
            debug!("{}: aborting stale gesture", session.target);
            for id in session.element_ids() {
                host.clear_style(id);
            }
            host.set_scroll_locked(false);
            host.set_class(&session.target, &self.config.dragging_state_class, false);
        }
    }
}
