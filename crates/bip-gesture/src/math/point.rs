//! 2D point type for pointer positions and offsets

use serde::{Deserialize, Serialize};

use super::Axis;

/// 2D point in screen space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component along an axis
    #[inline]
    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Absolute distance to another point along a single axis
    #[inline]
    pub fn distance_along(self, other: Point, axis: Axis) -> f64 {
        (self.along(axis) - other.along(axis)).abs()
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}
