//! Controller configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::TransformFn;

/// Default threshold as a fraction of the driving distance
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Default direction hysteresis band in screen units
pub const DEFAULT_HYSTERESIS: f64 = 10.0;

/// Options recognized by the gesture controller
///
/// Deserializes from camelCase JSON; every field is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BipConfig {
    /// Gesture-zone matcher
    pub selector: String,
    /// Matcher for elements that control another element
    pub controls_selector: String,
    /// Matcher for elements that close one or more elements
    pub closes_selector: String,
    /// Matcher for zones in which gestures are ignored
    pub ignore_selector: String,
    /// Transform channel defining the primary axis
    pub driving_property: TransformFn,
    /// Fraction of the driving distance a drag must cover to commit
    pub threshold_fraction: f64,
    pub open_state_class: String,
    pub transitioning_state_class: String,
    pub dragging_state_class: String,
    /// Transform functions, in the order they are composed
    pub tracked_transform_properties: Vec<TransformFn>,
    /// Plain CSS properties interpolated alongside the transform
    pub tracked_css_properties: Vec<String>,
    /// Follow mouse drags in addition to touch
    pub allow_pointer_drag: bool,
    pub emit_events: bool,
    /// Minimum displacement change before the drag direction flips
    pub hysteresis: f64,
}

impl Default for BipConfig {
    fn default() -> Self {
        Self {
            selector: "[data-touch]".to_string(),
            controls_selector: "[data-touch-controls]".to_string(),
            closes_selector: "[data-touch-closes]".to_string(),
            ignore_selector: "[data-touch-ignore]".to_string(),
            driving_property: TransformFn::Translate,
            threshold_fraction: DEFAULT_THRESHOLD,
            open_state_class: "is-open".to_string(),
            transitioning_state_class: "is-transitioning".to_string(),
            dragging_state_class: "is-touchmove".to_string(),
            tracked_transform_properties: TransformFn::ALL.to_vec(),
            tracked_css_properties: vec!["opacity".to_string()],
            allow_pointer_drag: true,
            emit_events: true,
            hysteresis: DEFAULT_HYSTERESIS,
        }
    }
}

impl BipConfig {
    /// Parse options from JSON, filling unspecified fields with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BipConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Combined matcher for every element that can start a gesture
    pub fn gesture_zones(&self) -> String {
        format!(
            "{},{},{}",
            self.selector, self.controls_selector, self.closes_selector
        )
    }

    /// Check the configuration for values the controller cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold_fraction) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold_fraction));
        }
        if !self.hysteresis.is_finite() || self.hysteresis < 0.0 {
            return Err(ConfigError::InvalidHysteresis(self.hysteresis));
        }

        let classes = [
            ("openStateClass", &self.open_state_class),
            ("transitioningStateClass", &self.transitioning_state_class),
            ("draggingStateClass", &self.dragging_state_class),
        ];
        for (field, class) in classes {
            if class.trim().is_empty() {
                return Err(ConfigError::EmptyClass { field });
            }
        }

        if self.tracked_transform_properties.is_empty() && self.tracked_css_properties.is_empty() {
            return Err(ConfigError::NothingTracked);
        }
        if !self.tracked_transform_properties.contains(&self.driving_property) {
            return Err(ConfigError::DrivingNotTracked(
                self.driving_property.name().to_string(),
            ));
        }

        Ok(())
    }
}
