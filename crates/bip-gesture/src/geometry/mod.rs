//! Geometry extraction
//!
//! Turns rendered element state (transform matrix, computed CSS values,
//! transition lists) into immutable [`GeometrySnapshot`]s.

mod extract;
mod snapshot;
mod timing;

pub use extract::{capture, extract, read, CaptureState, ElementCapture};
pub use snapshot::{parse_css_number, GeometrySnapshot, PropertyKind, SnapshotValue, TransformFn};
pub use timing::{parse_time_ms, Timing, TransitionLists};
