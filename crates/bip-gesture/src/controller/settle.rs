//! Settling after pointer-up

use log::{debug, trace};

use super::GestureController;
use crate::host::Host;
use crate::relation::ElementId;
use crate::session::{GestureSession, Settling};

impl GestureController {
    /// Start waiting for the target's transition to finish
    pub(crate) fn begin_settling<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        session: &GestureSession,
        now_ms: f64,
    ) {
        let pending: Vec<ElementId> = session.element_ids().cloned().collect();
        let total = session.drive.total_duration_ms();
        let mut settling = Settling::new(session.target.clone(), pending, now_ms + total);

        if total <= 0.0 {
            self.finish(host, &mut settling);
            return;
        }
        self.settling.push(settling);
    }

    /// Handle the end of an element's transition.
    ///
    /// Returns whether the element was settling.
    pub fn transition_end<H: Host + ?Sized>(&mut self, host: &mut H, element: &ElementId) -> bool {
        let mut found = false;
        for settling in &mut self.settling {
            if !settling.release(element) {
                continue;
            }
            found = true;
            host.clear_style(element);
            if *element == settling.target {
                host.set_class(element, &self.config.transitioning_state_class, false);
                trace!("{}: transition ended", element);
            }
        }
        self.settling.retain(|s| !s.is_done());
        found
    }

    /// Advance the fallback clock, finishing settles whose deadline passed.
    ///
    /// Returns whether anything finished.
    pub fn tick<H: Host + ?Sized>(&mut self, host: &mut H, now_ms: f64) -> bool {
        let (expired, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.settling)
            .into_iter()
            .partition(|s| s.expired(now_ms));
        self.settling = waiting;

        let finished = !expired.is_empty();
        for mut settling in expired {
            debug!("{}: no transition end before deadline", settling.target);
            self.finish(host, &mut settling);
        }
        finished
    }

    /// Stop tracking elements a new gesture takes over
    pub(crate) fn release_from_settling(&mut self, session: &GestureSession) {
        for settling in &mut self.settling {
            for id in session.element_ids() {
                if *id != settling.target {
                    settling.release(id);
                }
            }
        }
        self.settling.retain(|s| !s.is_done());
    }

    fn finish<H: Host + ?Sized>(&self, host: &mut H, settling: &mut Settling) {
        if settling.target_pending() {
            host.set_class(&settling.target, &self.config.transitioning_state_class, false);
        }
        for id in settling.pending.drain(..) {
            host.clear_style(&id);
        }
    }
}
