//! Style application
//!
//! Styling is computed into a [`StyleFrame`] first and written to the host
//! in one pass, so the transform of an element is always assigned with a
//! single write.

use serde::Serialize;

use crate::diff::ElementDiffSet;
use crate::geometry::{PropertyKind, SnapshotValue, TransformFn};
use crate::host::Host;
use crate::progress::{factor, PrimaryDrive};
use crate::relation::ElementId;

/// How a diff set is turned into styling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleMode {
    /// Follow the pointer
    Live,
    /// Drop inline overrides
    Reset,
    /// Hand over to the stylesheet transition for the remaining distance.
    /// `completing` is true when the toggle commits, false when reverting.
    Settle { completing: bool },
}

/// One interpolated transform function
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransformPart {
    pub function: TransformFn,
    pub value: SnapshotValue,
    pub unit: String,
}

impl TransformPart {
    /// CSS transform function, e.g. `translate(-150px, 0px)`
    pub fn to_css(&self) -> String {
        match self.value {
            SnapshotValue::Planar { x, y } => format!(
                "{}({}{unit}, {}{unit})",
                self.function.name(),
                x,
                y,
                unit = self.unit
            ),
            SnapshotValue::Linear(v) => format!("{}({}{})", self.function.name(), v, self.unit),
        }
    }
}

/// One interpolated CSS property
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CssPart {
    pub property: String,
    pub value: f64,
    pub unit: String,
}

/// Styling to write to one element
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum StyleFrame {
    Live {
        transform: Vec<TransformPart>,
        css: Vec<CssPart>,
    },
    Reset,
    Settle {
        properties: Vec<String>,
        durations_ms: Vec<f64>,
    },
}

impl StyleFrame {
    /// Composed transform value, `None` when no transform function moves
    pub fn transform_css(&self) -> Option<String> {
        match self {
            StyleFrame::Live { transform, .. } if !transform.is_empty() => Some(
                transform
                    .iter()
                    .map(TransformPart::to_css)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            _ => None,
        }
    }

    /// Inline declarations this frame sets, in write order
    pub fn declarations(&self) -> Vec<(String, String)> {
        match self {
            StyleFrame::Live { css, .. } => {
                let mut out = vec![("transition".to_string(), "none".to_string())];
                if let Some(transform) = self.transform_css() {
                    out.push(("transform".to_string(), transform));
                }
                out.extend(
                    css.iter()
                        .map(|part| (part.property.clone(), format!("{}{}", part.value, part.unit))),
                );
                out
            }
            StyleFrame::Reset => Vec::new(),
            StyleFrame::Settle { properties, durations_ms } => {
                if properties.is_empty() {
                    return Vec::new();
                }
                let durations = durations_ms
                    .iter()
                    .map(|ms| format!("{}ms", ms))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![
                    ("transition-property".to_string(), properties.join(", ")),
                    ("transition-duration".to_string(), durations),
                ]
            }
        }
    }

    /// Write the frame to an element
    pub fn write_to<H: Host + ?Sized>(&self, host: &mut H, element: &ElementId) {
        if !matches!(self, StyleFrame::Live { .. }) {
            host.clear_style(element);
        }
        for (property, value) in self.declarations() {
            host.set_style(element, &property, &value);
        }
    }
}

/// Compute the styling of one element for `moved` units of drag
pub fn apply(
    set: &ElementDiffSet,
    drive: &PrimaryDrive,
    moved: f64,
    driving: TransformFn,
    mode: StyleMode,
) -> StyleFrame {
    match mode {
        StyleMode::Reset => StyleFrame::Reset,
        StyleMode::Live => {
            let mut transform = Vec::new();
            let mut css = Vec::new();
            for d in &set.diffs {
                let f = factor(d, drive, moved);
                match &d.property {
                    PropertyKind::Transform(function) => transform.push(TransformPart {
                        function: *function,
                        value: d.value_at(f),
                        unit: d.unit.clone(),
                    }),
                    PropertyKind::Css(name) => css.push(CssPart {
                        property: name.clone(),
                        value: d.value_at(f).x(),
                        unit: d.unit.clone(),
                    }),
                }
            }
            StyleFrame::Live { transform, css }
        }
        StyleMode::Settle { completing } => {
            let total = drive.total_duration_ms();
            let remaining = |f: f64| if completing { total * (1.0 - f) } else { total * f };

            let mut properties = Vec::new();
            let mut durations_ms = Vec::new();

            let transform_diff = set
                .get(&PropertyKind::Transform(driving))
                .or_else(|| set.diffs.iter().find(|d| d.property.is_transform()));
            if let Some(d) = transform_diff {
                properties.push("transform".to_string());
                durations_ms.push(remaining(factor(d, drive, moved)));
            }

            for d in set.diffs.iter().filter(|d| !d.property.is_transform()) {
                properties.push(d.property.name().to_string());
                durations_ms.push(remaining(factor(d, drive, moved)));
            }

            StyleFrame::Settle { properties, durations_ms }
        }
    }
}
