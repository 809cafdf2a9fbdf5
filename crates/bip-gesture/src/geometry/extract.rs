//! Geometry extraction from rendered element state

use log::trace;

use super::{parse_css_number, GeometrySnapshot, PropertyKind, SnapshotValue, Timing, TransformFn};
use crate::config::BipConfig;
use crate::host::{Host, TransformProvider};
use crate::relation::ElementId;

/// Which class state of an element to measure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureState {
    /// The element as it currently is
    Current,
    /// The element with its open class flipped
    Toggled,
}

/// All tracked properties of one element at one class state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementCapture {
    /// Snapshots in configured order; unmeasurable properties are absent
    pub snapshots: Vec<GeometrySnapshot>,
}

impl ElementCapture {
    /// Snapshot for a property, if it was measurable
    pub fn get(&self, property: &PropertyKind) -> Option<&GeometrySnapshot> {
        self.snapshots.iter().find(|s| &s.property == property)
    }
}

/// Read one property with a known timing, without touching the element
pub fn read<P: TransformProvider + ?Sized>(
    provider: &P,
    element: &ElementId,
    property: &PropertyKind,
    timing: Timing,
) -> Option<GeometrySnapshot> {
    let (value, unit) = match property {
        PropertyKind::Transform(function) => {
            let m = provider.transform(element)?.decompose();
            match function {
                TransformFn::Translate => (
                    SnapshotValue::Planar { x: m.translate_x, y: m.translate_y },
                    "px",
                ),
                TransformFn::Scale => (SnapshotValue::Planar { x: m.scale_x, y: m.scale_y }, ""),
                TransformFn::Rotate => (SnapshotValue::Linear(m.angle), "deg"),
                TransformFn::Skew => (SnapshotValue::Planar { x: m.skew_x, y: m.skew_y }, "deg"),
            }
        }
        PropertyKind::Css(name) => {
            let raw = provider.css_value(element, name)?;
            let (number, unit) = parse_css_number(&raw)?;
            return Some(GeometrySnapshot {
                property: property.clone(),
                value: SnapshotValue::Linear(number),
                unit,
                timing,
            });
        }
    };

    Some(GeometrySnapshot {
        property: property.clone(),
        value,
        unit: unit.to_string(),
        timing,
    })
}

/// Measure one property in the element's current class state.
///
/// Timing is read with inline styling cleared; the value is read with
/// transitions disabled so a running transition cannot leak a midway value.
/// No inline styling is left behind.
pub fn extract<H: Host + ?Sized>(
    host: &mut H,
    element: &ElementId,
    property: &PropertyKind,
) -> Option<GeometrySnapshot> {
    host.clear_style(element);
    let timing = host.transition(element).timing_for(property.channel());
    host.set_style(element, "transition", "none");
    let snapshot = read(&*host, element, property, timing);
    host.clear_style(element);
    snapshot
}

/// Measure every tracked property of an element in the requested state
pub fn capture<H: Host + ?Sized>(
    host: &mut H,
    element: &ElementId,
    config: &BipConfig,
    state: CaptureState,
) -> ElementCapture {
    let toggled = state == CaptureState::Toggled;
    if toggled {
        host.toggle_class(element, &config.open_state_class);
    }

    host.clear_style(element);
    let transition = host.transition(element);
    host.set_style(element, "transition", "none");

    let properties = config
        .tracked_transform_properties
        .iter()
        .map(|f| PropertyKind::Transform(*f))
        .chain(config.tracked_css_properties.iter().cloned().map(PropertyKind::Css));

    let mut snapshots = Vec::new();
    for property in properties {
        let timing = transition.timing_for(property.channel());
        match read(&*host, element, &property, timing) {
            Some(snapshot) => snapshots.push(snapshot),
            None => trace!("{}: no {} geometry", element, property.name()),
        }
    }

    host.clear_style(element);
    if toggled {
        host.toggle_class(element, &config.open_state_class);
    }

    ElementCapture { snapshots }
}
