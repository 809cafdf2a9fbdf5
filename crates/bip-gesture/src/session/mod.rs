//! Gesture session state
//!
//! A [`GestureSession`] holds everything one gesture needs between
//! pointer-down and pointer-up. It is owned by the controller and passed
//! explicitly into every handler.

mod result;
mod settling;

pub use result::{GestureResult, IgnoreReason};
pub use settling::Settling;

use serde::{Deserialize, Serialize};

use crate::diff::ElementDiffSet;
use crate::math::{between, Point};
use crate::progress::PrimaryDrive;
use crate::relation::ElementId;

/// Lifecycle phase of the controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    /// Pointer is down on a target, no move yet
    Armed,
    /// Pointer is moving
    Dragging,
    /// Waiting for the committed or reverted transition to finish
    Settling,
}

/// Pointer stream a gesture was started from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    Touch,
    Mouse,
}

/// Direction of the latest significant movement
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragDirection {
    /// Toward the toggled state
    #[default]
    Forward,
    /// Back toward the starting state
    Backward,
}

/// Gesture zone a pointer-down landed in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneHit {
    /// Closest element that can start a gesture
    pub zone: ElementId,
    /// Pointer is inside an ignore zone within it
    pub ignored: bool,
}

impl ZoneHit {
    pub fn new(zone: impl Into<ElementId>) -> Self {
        Self {
            zone: zone.into(),
            ignored: false,
        }
    }

    /// Hit inside an ignore zone
    pub fn ignored(zone: impl Into<ElementId>) -> Self {
        Self {
            zone: zone.into(),
            ignored: true,
        }
    }
}

/// One active gesture
#[derive(Clone, Debug)]
pub struct GestureSession {
    pub target: ElementId,
    /// Diff sets of the target followed by its moving buddies
    pub participants: Vec<ElementDiffSet>,
    pub drive: PrimaryDrive,
    /// Pointer position at pointer-down
    pub start: Point,
    pub source: PointerSource,
    pub phase: Phase,
    pub direction: DragDirection,
    /// Progress last seen within range
    pub moved: f64,
    /// Progress at the last direction decision
    anchor: Option<f64>,
}

impl GestureSession {
    /// Arm a session at `start`
    pub fn new(
        target: ElementId,
        participants: Vec<ElementDiffSet>,
        drive: PrimaryDrive,
        start: Point,
        source: PointerSource,
    ) -> Self {
        Self {
            target,
            participants,
            drive,
            start,
            source,
            phase: Phase::Armed,
            direction: DragDirection::default(),
            moved: 0.0,
            anchor: None,
        }
    }

    /// Signed pointer displacement along the axis since pointer-down
    #[inline]
    pub fn displacement(&self, point: Point) -> f64 {
        (point - self.start).along(self.drive.axis)
    }

    /// Displacement measured toward the toggled state
    pub fn progress(&self, point: Point) -> f64 {
        let displacement = self.displacement(point);
        if self.drive.to < self.drive.from {
            -displacement
        } else {
            displacement
        }
    }

    /// Whether the live position stays within the travel range
    pub fn in_range(&self, point: Point) -> bool {
        let translated = self.drive.from + self.displacement(point);
        between(translated, self.drive.from, self.drive.to, true)
    }

    /// Update the drag direction once progress leaves the hysteresis band
    pub fn track_direction(&mut self, progress: f64, band: f64, in_range: bool) {
        let anchor = match self.anchor {
            Some(anchor) => anchor,
            None => {
                self.anchor = Some(progress);
                return;
            }
        };

        if (progress - anchor).abs() > band {
            if in_range {
                self.direction = if progress > anchor {
                    DragDirection::Forward
                } else {
                    DragDirection::Backward
                };
            }
            self.anchor = Some(progress);
        }
    }

    /// Element ids taking part, target first
    pub fn element_ids(&self) -> impl Iterator<Item = &ElementId> {
        self.participants.iter().map(|set| &set.element)
    }
}
