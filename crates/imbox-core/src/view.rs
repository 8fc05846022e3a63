//! Render-ready view model
//!
//! One `CategorySummary` per category, built in a single construction from
//! already-computed statistics, plus the shared maximum used to place every
//! box on one value scale. The model is rebuilt from scratch on every
//! update and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A value classified as lying strictly outside the whisker fences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    /// The offending measure value
    pub value: f64,

    /// The category it came from
    pub category: String,
}

/// Fixed presentation attributes attached for the drawing layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxStyle {
    /// Box fill color
    pub fill: Color,

    /// Box and whisker stroke color
    pub stroke: Color,

    /// Stroke width in pixels
    pub stroke_width: f32,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Color::steel_blue(),
            stroke: Color::black(),
            stroke_width: 1.0,
        }
    }
}

/// Robust summary of one category's sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// Grouping key, unique within the view model
    pub category: String,

    /// Sample minimum
    pub min: f64,

    /// Sample maximum
    pub max: f64,

    /// 50th-percentile order statistic
    pub median: f64,

    /// 25th-percentile order statistic
    pub q1: f64,

    /// 75th-percentile order statistic
    pub q3: f64,

    /// `max(min, q1 - 1.5 IQR)`
    pub lower_fence: f64,

    /// `min(max, q3 + 1.5 IQR)`
    pub upper_fence: f64,

    /// Values strictly outside the fences, in row order
    pub outliers: Vec<Outlier>,

    /// Retained sample in row order, kept for re-rendering and inspection
    pub raw_sample: Vec<f64>,

    /// Presentation defaults for the drawing layer
    pub style: BoxStyle,
}

/// The transform output: summaries in first-seen category order plus the
/// shared maximum for the common value scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    /// One summary per category with at least one retained value
    pub summaries: Vec<CategorySummary>,

    /// Maximum `max` across all summaries; 0 when there are none
    pub global_max: f64,
}

impl ViewModel {
    /// The "render nothing" model: no summaries, zero maximum
    pub fn empty() -> Self {
        Self {
            summaries: Vec::new(),
            global_max: 0.0,
        }
    }

    /// Whether there is anything to draw
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::empty()
    }
}
