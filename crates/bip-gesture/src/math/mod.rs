//! Core geometry types

mod matrix;
mod point;

pub use matrix::{Decomposed, Matrix2d};
pub use point::Point;

use serde::{Deserialize, Serialize};

/// Screen axis a gesture is tracked along
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
}

/// Absolute difference between two scalars
#[inline]
pub fn difference(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// Check if `value` lies between `a` and `b` (order independent)
#[inline]
pub fn between(value: f64, a: f64, b: f64, inclusive: bool) -> bool {
    let (min, max) = if a <= b { (a, b) } else { (b, a) };
    if inclusive {
        value >= min && value <= max
    } else {
        value > min && value < max
    }
}
