//! Per-property state difference

use serde::Serialize;

use crate::geometry::{GeometrySnapshot, PropertyKind, SnapshotValue, Timing};
use crate::math::difference;

/// Direction a value moves in when going from `from` to `to`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Movement of a single component
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisDelta {
    pub direction: Direction,
    /// Absolute scalar delta
    pub magnitude: f64,
}

impl AxisDelta {
    /// Delta between two scalars
    pub fn between(from: f64, to: f64) -> Self {
        Self {
            direction: if from < to { Direction::Up } else { Direction::Down },
            magnitude: difference(to, from),
        }
    }

    /// Value reached after covering `factor` of the delta
    #[inline]
    pub fn interpolate(&self, from: f64, factor: f64) -> f64 {
        match self.direction {
            Direction::Up => from + self.magnitude * factor,
            Direction::Down => from - self.magnitude * factor,
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }
}

/// Difference of one property between two class states
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PropertyDiff {
    pub property: PropertyKind,
    pub from: SnapshotValue,
    pub to: SnapshotValue,
    pub unit: String,
    pub x: AxisDelta,
    /// Present for planar values only
    pub y: Option<AxisDelta>,
    /// Open-state timing, falling back to closed-state timing per field
    pub timing: Timing,
}

impl PropertyDiff {
    /// Value after covering `factor` of the difference on every axis
    pub fn value_at(&self, factor: f64) -> SnapshotValue {
        match (self.from, self.y) {
            (SnapshotValue::Planar { x, y }, Some(dy)) => SnapshotValue::Planar {
                x: self.x.interpolate(x, factor),
                y: dy.interpolate(y, factor),
            },
            (from, _) => SnapshotValue::Linear(self.x.interpolate(from.x(), factor)),
        }
    }

    #[inline]
    pub fn delay_ms(&self) -> f64 {
        self.timing.delay_ms
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.timing.duration_ms
    }
}

/// Diff two snapshots of the same property.
///
/// Returns `None` when the snapshots are equivalent, when they describe
/// different properties or value shapes, or when nothing moves on any axis.
pub fn diff(from: &GeometrySnapshot, to: &GeometrySnapshot) -> Option<PropertyDiff> {
    if from.property != to.property || from.equivalent(to) {
        return None;
    }

    let (x, y) = match (from.value, to.value) {
        (SnapshotValue::Linear(a), SnapshotValue::Linear(b)) => {
            let x = AxisDelta::between(a, b);
            if x.is_zero() {
                return None;
            }
            (x, None)
        }
        (SnapshotValue::Planar { x: ax, y: ay }, SnapshotValue::Planar { x: bx, y: by }) => {
            let x = AxisDelta::between(ax, bx);
            let y = AxisDelta::between(ay, by);
            if x.is_zero() && y.is_zero() {
                return None;
            }
            (x, Some(y))
        }
        _ => return None,
    };

    Some(PropertyDiff {
        property: to.property.clone(),
        from: from.value,
        to: to.value,
        unit: to.unit.clone(),
        x,
        y,
        timing: to.timing.or(from.timing),
    })
}
