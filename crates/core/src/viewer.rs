//! Per-model viewer configuration.
//!
//! Field names are camelCase on the wire because the embed page hands them
//! straight to the `<model-viewer>` custom element.

use serde::{Deserialize, Serialize};

/// Rendering options applied to the embedded viewer for a single model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    pub auto_rotate: bool,
    pub camera_controls: bool,
    pub shadow_intensity: f64,
    pub exposure: f64,
    /// Whether AR mode is offered at all. The embed page additionally gates
    /// AR on a secure context and device capability.
    pub ar: bool,
    /// Space-separated AR mode preference list understood by the viewer
    /// element.
    pub ar_modes: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            camera_controls: true,
            shadow_intensity: 1.0,
            exposure: 1.0,
            ar: true,
            ar_modes: "webxr scene-viewer quick-look".to_string(),
        }
    }
}

/// Partial overlay for [`ViewerConfig`]: every present field replaces the
/// corresponding field, absent fields are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerConfigPatch {
    pub auto_rotate: Option<bool>,
    pub camera_controls: Option<bool>,
    pub shadow_intensity: Option<f64>,
    pub exposure: Option<f64>,
    pub ar: Option<bool>,
    pub ar_modes: Option<String>,
}

impl ViewerConfigPatch {
    /// Apply this patch to `config`, field by field.
    pub fn apply(&self, config: &mut ViewerConfig) {
        if let Some(v) = self.auto_rotate {
            config.auto_rotate = v;
        }
        if let Some(v) = self.camera_controls {
            config.camera_controls = v;
        }
        if let Some(v) = self.shadow_intensity {
            config.shadow_intensity = v;
        }
        if let Some(v) = self.exposure {
            config.exposure = v;
        }
        if let Some(v) = self.ar {
            config.ar = v;
        }
        if let Some(v) = &self.ar_modes {
            config.ar_modes = v.clone();
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
