//! State diff calculation
//!
//! Compares the snapshots of an element's current and toggled class states
//! and keeps only the properties that actually move.

mod property;
mod set;

pub use property::{diff, AxisDelta, Direction, PropertyDiff};
pub use set::{DriveAxis, ElementDiffSet};
