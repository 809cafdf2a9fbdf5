//! Geometry snapshot types

use serde::{Deserialize, Serialize};

use super::Timing;

/// Transform function tracked on an element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformFn {
    Translate,
    Scale,
    Rotate,
    Skew,
}

impl TransformFn {
    /// All transform functions in default composition order
    pub const ALL: [TransformFn; 4] = [
        TransformFn::Translate,
        TransformFn::Scale,
        TransformFn::Rotate,
        TransformFn::Skew,
    ];

    /// CSS function name
    pub fn name(&self) -> &'static str {
        match self {
            TransformFn::Translate => "translate",
            TransformFn::Scale => "scale",
            TransformFn::Rotate => "rotate",
            TransformFn::Skew => "skew",
        }
    }

    /// Whether the function carries independent x and y components
    #[inline]
    pub fn is_planar(&self) -> bool {
        !matches!(self, TransformFn::Rotate)
    }
}

/// A property whose value is tracked across open/closed states
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "name", rename_all = "lowercase")]
pub enum PropertyKind {
    /// Component of the element's transform matrix
    Transform(TransformFn),
    /// Plain numeric CSS property
    Css(String),
}

impl PropertyKind {
    /// Property name as written in styles
    pub fn name(&self) -> &str {
        match self {
            PropertyKind::Transform(function) => function.name(),
            PropertyKind::Css(name) => name,
        }
    }

    /// Transition channel the property animates on
    pub fn channel(&self) -> &str {
        match self {
            PropertyKind::Transform(_) => "transform",
            PropertyKind::Css(name) => name,
        }
    }

    #[inline]
    pub fn is_transform(&self) -> bool {
        matches!(self, PropertyKind::Transform(_))
    }
}

/// Measured value of a property
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotValue {
    /// Two independent components (translate, scale, skew)
    Planar { x: f64, y: f64 },
    /// Single component (rotate, CSS properties)
    Linear(f64),
}

impl SnapshotValue {
    /// Primary component
    #[inline]
    pub fn x(&self) -> f64 {
        match *self {
            SnapshotValue::Planar { x, .. } => x,
            SnapshotValue::Linear(v) => v,
        }
    }

    /// Secondary component, if any
    #[inline]
    pub fn y(&self) -> Option<f64> {
        match *self {
            SnapshotValue::Planar { y, .. } => Some(y),
            SnapshotValue::Linear(_) => None,
        }
    }
}

/// A property value captured at one class state of an element
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometrySnapshot {
    pub property: PropertyKind,
    pub value: SnapshotValue,
    pub unit: String,
    pub timing: Timing,
}

impl GeometrySnapshot {
    /// Transition delay in milliseconds
    #[inline]
    pub fn delay_ms(&self) -> f64 {
        self.timing.delay_ms
    }

    /// Transition duration in milliseconds
    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.timing.duration_ms
    }

    /// Strict field-by-field equality, no tolerance
    #[inline]
    pub fn equivalent(&self, other: &GeometrySnapshot) -> bool {
        self == other
    }
}

/// Split a computed CSS value like `0.5`, `-12.5px` or `1e-05` into number and unit
pub fn parse_css_number(value: &str) -> Option<(f64, String)> {
    let value = value.trim();
    let bytes = value.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .map_or(bytes.len(), |n| start + n)
    };

    let mut end = match bytes.first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };
    end = digits_from(end);
    if bytes.get(end) == Some(&b'.') {
        end = digits_from(end + 1);
    }

    // Exponent only when digits follow, so `1em` keeps its unit
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'-') | Some(b'+')) {
            exp += 1;
        }
        if bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            end = digits_from(exp);
        }
    }

    let number = value[..end].parse::<f64>().ok()?;
    Some((number, value[end..].trim().to_string()))
}
