//! Drag progress mapping
//!
//! Converts pointer displacement into a per-property progress factor. A
//! property's own transition window `[delay, delay + duration]` is laid
//! over the driving property's total duration, so a property with a later
//! delay starts moving only once the drag has covered that share of the
//! driving distance. Progress follows distance, not wall-clock time, which
//! keeps it reversible.

use serde::Serialize;

use crate::diff::{DriveAxis, PropertyDiff};
use crate::geometry::Timing;
use crate::math::Axis;

/// Geometry and timing of the gesture target's driving property
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PrimaryDrive {
    pub axis: Axis,
    /// Driving coordinate at gesture start
    pub from: f64,
    /// Driving coordinate in the toggled state
    pub to: f64,
    /// Total driving distance
    pub magnitude: f64,
    pub timing: Timing,
}

impl PrimaryDrive {
    /// Combine the target's travel with its driving property timing
    pub fn new(drive: DriveAxis, timing: Timing) -> Self {
        Self {
            axis: drive.axis,
            from: drive.from,
            to: drive.to,
            magnitude: drive.magnitude,
            timing,
        }
    }

    /// Delay plus duration of the driving property
    #[inline]
    pub fn total_duration_ms(&self) -> f64 {
        self.timing.total_ms()
    }

    /// Share of the driving distance covered by `moved`, unclamped
    #[inline]
    pub fn drive_fraction(&self, moved: f64) -> f64 {
        (moved / (self.magnitude / 100.0)) / 100.0
    }

    /// Distance a drag must cover to commit
    #[inline]
    pub fn threshold(&self, fraction: f64) -> f64 {
        self.magnitude * fraction
    }
}

/// Progress of one property after the pointer moved `moved` units, in `[0, 1]`
pub fn factor(diff: &PropertyDiff, drive: &PrimaryDrive, moved: f64) -> f64 {
    factor_for_timing(diff.timing, drive, moved)
}

/// Progress for a property with the given timing, in `[0, 1]`
pub fn factor_for_timing(timing: Timing, drive: &PrimaryDrive, moved: f64) -> f64 {
    let fraction = drive.drive_fraction(moved);
    let total = drive.total_duration_ms();
    let timing = timing.or(drive.timing);

    let x = if total <= 0.0 || timing.duration_ms <= 0.0 {
        fraction
    } else {
        let delay_factor = timing.delay_ms / total;
        let duration_factor = timing.duration_ms / total;
        (fraction - delay_factor)
            * ((total / (timing.duration_ms * duration_factor)) * duration_factor)
    };

    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}
