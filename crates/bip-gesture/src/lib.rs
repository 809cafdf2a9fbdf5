//! Gesture-driven panel toggling
//!
//! This crate provides the core of a drag-to-open panel system:
//! - Geometry extraction from rendered element state
//! - Diffs between an element's current and toggled states
//! - Distance-driven, delay-aware progress mapping
//! - The gesture session state machine (arm, drag, settle)
//! - Relationships between panels, controllers, closers and buddies
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Point`, `Matrix2d`, `Axis`)
//! - [`geometry`]: Snapshots of transform functions and CSS properties
//! - [`diff`]: Per-property and per-element diffs
//! - [`progress`]: Pointer displacement to progress factor
//! - [`style`]: Style frames written back to elements
//! - [`relation`]: Target resolution and opened-by tracking
//! - [`session`]: Gesture session state and results
//! - [`host`]: The element layer the core runs against
//!
//! ## Example
//!
//! ```rust
//! use bip_gesture::{BipConfig, ElementDecl, GestureController, MemoryHost, Point, PointerSource, StyleRule, ZoneHit};
//! use bip_gesture::{Matrix2d, TransitionLists};
//!
//! let mut host = MemoryHost::new();
//! host.insert("drawer", vec![
//!     StyleRule::base()
//!         .transform(Matrix2d::translate(-300.0, 0.0))
//!         .transition(TransitionLists::from_entries(&[("transform", 0.0, 300.0)])),
//!     StyleRule::when("is-open").transform(Matrix2d::IDENTITY),
//! ]);
//!
//! let mut controller =
//!     GestureController::new(BipConfig::default(), vec![ElementDecl::panel("drawer")], &mut host).unwrap();
//!
//! controller.pointer_down(&mut host, Some(ZoneHit::new("drawer")), Point::new(0.0, 0.0), PointerSource::Touch);
//! controller.pointer_move(&mut host, Point::new(120.0, 0.0), PointerSource::Touch);
//! let result = controller.pointer_up(&mut host, Point::new(120.0, 0.0), PointerSource::Touch, 0.0);
//! assert!(result.is_committed());
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Settling uses an injected clock for deterministic testing
//! 3. **Explicit Session**: Gesture state is a value owned by one controller instance

pub mod config;
pub mod diff;
pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod math;
pub mod progress;
pub mod relation;
pub mod session;
pub mod style;

mod controller;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::{BipConfig, DEFAULT_HYSTERESIS, DEFAULT_THRESHOLD};
pub use controller::GestureController;
pub use diff::{diff, DriveAxis, ElementDiffSet, PropertyDiff};
pub use error::{ConfigError, RelationError};
pub use event::{BipEvent, BipEventKind};
pub use geometry::{GeometrySnapshot, PropertyKind, SnapshotValue, Timing, TransformFn, TransitionLists};
pub use host::{Host, MemoryHost, StyleRule, TransformProvider};
pub use math::{Axis, Matrix2d, Point};
pub use progress::PrimaryDrive;
pub use relation::{ElementDecl, ElementId, OpenedBy, RelationGraph};
pub use session::{DragDirection, GestureResult, GestureSession, IgnoreReason, Phase, PointerSource, ZoneHit};
pub use style::{StyleFrame, StyleMode};
