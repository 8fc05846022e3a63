//! Persisted visual settings
//!
//! The host stores settings as a JSON object and replays it on every
//! update. Only the options the transform and renderer consume are
//! modeled here; each falls back to a fixed default when missing.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Options consumed by the geometry layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisualSettings {
    /// Left margin reserved for category labels, in pixels
    pub y_axis_width: f32,

    /// Font size for category labels
    pub y_axis_font_size: f32,

    /// Font size for value-axis tick labels
    pub x_axis_font_size: f32,

    /// Radius of each outlier dot, in pixels
    pub outlier_dot_radius: f32,

    /// Fill color for outlier dots
    pub outlier_color: Color,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            y_axis_width: 60.0,
            y_axis_font_size: 12.0,
            x_axis_font_size: 12.0,
            outlier_dot_radius: 3.0,
            outlier_color: Color::firebrick(),
        }
    }
}

impl VisualSettings {
    /// Parse the persisted settings object.
    ///
    /// Unrecognized keys are ignored; a missing or unparseable object
    /// falls back to the defaults rather than failing the update.
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}
