//! Scene primitives handed to the host's drawing layer
//!
//! A scene is the full geometry for one update: per category a box over
//! `[q1, q3]`, a median line, two whisker lines with fence caps, and one
//! dot per outlier, plus axis labels. Categories run top to bottom in
//! view-model order; values run left to right on the shared
//! `[0, global_max]` scale.

use serde::{Deserialize, Serialize};

use imbox_core::{Color, ViewModel, Viewport, VisualSettings};

use crate::scale::{BandScale, LinearScale};

/// Outer margin kept clear of marks, in pixels
pub const MARGIN: f32 = 10.0;

/// Fixed padding between category bands, in pixels
pub const BAND_PADDING: f32 = 8.0;

/// A filled, stroked rectangle (the interquartile box)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxMark {
    pub x0: f32,
    pub x1: f32,
    pub y0: f32,
    pub y1: f32,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
}

/// A stroked line segment (median, whiskers, fence caps)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineMark {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub stroke: Color,
    pub width: f32,
}

/// A filled dot (one per outlier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMark {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

/// An axis text label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMark {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font_size: f32,
}

/// Flat collection of draw primitives for one update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub boxes: Vec<BoxMark>,
    pub lines: Vec<LineMark>,
    pub points: Vec<PointMark>,
    pub labels: Vec<TextMark>,
}

impl Scene {
    /// Whether the scene draws anything at all
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
            && self.lines.is_empty()
            && self.points.is_empty()
            && self.labels.is_empty()
    }
}

/// Map the view model into pixel-space primitives.
///
/// An empty view model yields an empty scene.
pub fn build_scene(model: &ViewModel, viewport: Viewport, settings: &VisualSettings) -> Scene {
    if model.is_empty() {
        return Scene::default();
    }

    let value_scale = LinearScale::new(
        (0.0, model.global_max),
        (settings.y_axis_width, viewport.width - MARGIN),
    );
    let band_scale = BandScale::new(
        model.summaries.len(),
        (0.0, viewport.height - settings.x_axis_font_size - MARGIN),
        BAND_PADDING,
    );

    let mut scene = Scene::default();

    for (i, summary) in model.summaries.iter().enumerate() {
        let (band_start, band_width) = band_scale.band(i);
        let band_end = band_start + band_width;
        let center = band_scale.center(i);
        let style = &summary.style;

        let q1_x = value_scale.map(summary.q1);
        let q3_x = value_scale.map(summary.q3);
        let median_x = value_scale.map(summary.median);
        let lower_x = value_scale.map(summary.lower_fence);
        let upper_x = value_scale.map(summary.upper_fence);

        // interquartile box spanning the full band
        scene.boxes.push(BoxMark {
            x0: q1_x,
            x1: q3_x,
            y0: band_start,
            y1: band_end,
            fill: style.fill,
            stroke: style.stroke,
            stroke_width: style.stroke_width,
        });

        // median line across the band
        scene.lines.push(LineMark {
            x0: median_x,
            y0: band_start,
            x1: median_x,
            y1: band_end,
            stroke: style.stroke,
            width: style.stroke_width,
        });

        // whiskers from the box out to each fence
        scene.lines.push(LineMark {
            x0: lower_x,
            y0: center,
            x1: q1_x,
            y1: center,
            stroke: style.stroke,
            width: style.stroke_width,
        });
        scene.lines.push(LineMark {
            x0: q3_x,
            y0: center,
            x1: upper_x,
            y1: center,
            stroke: style.stroke,
            width: style.stroke_width,
        });

        // fence caps
        let cap = band_width / 4.0;
        for fence_x in [lower_x, upper_x] {
            scene.lines.push(LineMark {
                x0: fence_x,
                y0: center - cap,
                x1: fence_x,
                y1: center + cap,
                stroke: style.stroke,
                width: style.stroke_width,
            });
        }

        // outlier dots at the band center line
        for outlier in &summary.outliers {
            scene.points.push(PointMark {
                x: value_scale.map(outlier.value),
                y: center,
                radius: settings.outlier_dot_radius,
                color: settings.outlier_color,
            });
        }

        // category label in the reserved left margin
        scene.labels.push(TextMark {
            x: 0.0,
            y: center,
            text: summary.category.clone(),
            font_size: settings.y_axis_font_size,
        });
    }

    // value-axis tick labels along the bottom edge
    for tick in value_scale.ticks(5) {
        scene.labels.push(TextMark {
            x: value_scale.map(tick),
            y: viewport.height - MARGIN,
            text: format_tick(tick),
            font_size: settings.x_axis_font_size,
        });
    }

    scene
}

/// Format a tick value for display
fn format_tick(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 10000.0 || value.abs() < 0.01 {
        format!("{:.2e}", value)
    } else if value.fract().abs() < 1e-10 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
