//! Host-facing update surface
//!
//! The host constructs the visual once and delivers serialized update
//! events (data refresh or viewport resize). Each update re-parses the
//! persisted settings and rebuilds the view model and scene from scratch;
//! there is no incremental state between invocations.

use serde::{Deserialize, Serialize};

use imbox_core::{build_view_model, DataTable, Viewport, VisualSettings};

use crate::scene::{build_scene, Scene};

/// One host update event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptions {
    /// Current table, if the host has one bound
    pub table: Option<DataTable>,

    /// Drawing surface size
    pub viewport: Viewport,

    /// Persisted settings object, as stored by the host
    pub settings: Option<serde_json::Value>,
}

/// Box-and-whisker rendering extension driven by host update events
#[derive(Debug, Default)]
pub struct BoxWhiskerVisual {
    settings: VisualSettings,
    scene: Scene,
}

impl BoxWhiskerVisual {
    /// Create the visual with default settings and nothing to draw
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the scene for an update event.
    ///
    /// Identical inputs produce identical scenes; there is no caching
    /// across invocations.
    pub fn update(&mut self, options: &UpdateOptions) -> &Scene {
        self.settings = options
            .settings
            .as_ref()
            .map(VisualSettings::from_value)
            .unwrap_or_default();

        let model = build_view_model(options.table.as_ref());
        if model.is_empty() {
            tracing::debug!("no usable data, rendering nothing");
        } else {
            tracing::debug!(
                "rebuilt view model: {} categories, max {}",
                model.summaries.len(),
                model.global_max
            );
        }

        self.scene = build_scene(&model, options.viewport, &self.settings);
        &self.scene
    }

    /// The scene computed by the most recent update
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The settings resolved by the most recent update
    pub fn settings(&self) -> &VisualSettings {
        &self.settings
    }
}
