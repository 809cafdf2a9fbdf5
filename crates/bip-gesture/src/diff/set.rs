//! Diff sets for the elements taking part in a gesture

use serde::Serialize;

use super::{diff, PropertyDiff};
use crate::config::BipConfig;
use crate::geometry::{ElementCapture, PropertyKind, SnapshotValue};
use crate::math::{difference, Axis};
use crate::relation::ElementId;

/// Screen axis an element travels along and how far
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DriveAxis {
    pub axis: Axis,
    pub from: f64,
    pub to: f64,
    pub magnitude: f64,
}

impl DriveAxis {
    /// Derive the travel axis from the driving property's diff.
    ///
    /// `x` wins when it changes, otherwise `y`.
    pub fn from_diff(diff: &PropertyDiff) -> Option<DriveAxis> {
        let (axis, from, to) = match (diff.from, diff.to) {
            (SnapshotValue::Planar { x: fx, y: fy }, SnapshotValue::Planar { x: tx, y: ty }) => {
                if fx != tx {
                    (Axis::X, fx, tx)
                } else {
                    (Axis::Y, fy, ty)
                }
            }
            (from, to) => (Axis::X, from.x(), to.x()),
        };

        let magnitude = difference(to, from);
        if magnitude == 0.0 || !magnitude.is_finite() {
            return None;
        }
        Some(DriveAxis { axis, from, to, magnitude })
    }
}

/// Every moving property of one element, in configured order
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementDiffSet {
    pub element: ElementId,
    pub diffs: Vec<PropertyDiff>,
    /// Travel of the element's own driving property, if it moves
    pub drive: Option<DriveAxis>,
}

impl ElementDiffSet {
    /// Build the diff set between two captures of `element`
    pub fn build(
        element: &ElementId,
        from: &ElementCapture,
        to: &ElementCapture,
        config: &BipConfig,
    ) -> ElementDiffSet {
        let mut diffs = Vec::new();

        for function in &config.tracked_transform_properties {
            let property = PropertyKind::Transform(*function);
            if let (Some(a), Some(b)) = (from.get(&property), to.get(&property)) {
                diffs.extend(diff(a, b));
            }
        }

        for name in &config.tracked_css_properties {
            let property = PropertyKind::Css(name.clone());
            if let (Some(a), Some(b)) = (from.get(&property), to.get(&property)) {
                if !a.equivalent(b) {
                    diffs.extend(diff(a, b));
                }
            }
        }

        let driving = PropertyKind::Transform(config.driving_property);
        let drive = diffs
            .iter()
            .find(|d| d.property == driving)
            .and_then(DriveAxis::from_diff);

        ElementDiffSet {
            element: element.clone(),
            diffs,
            drive,
        }
    }

    /// Diff for a property, if it moves
    pub fn get(&self, property: &PropertyKind) -> Option<&PropertyDiff> {
        self.diffs.iter().find(|d| &d.property == property)
    }

    /// Whether nothing on the element moves
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }
}
