//! 3D model asset records and their update semantics.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{EntityKey, Timestamp};
use crate::viewer::{ViewerConfig, ViewerConfigPatch};

/// A managed 3D model asset. The asset itself lives at `url` (and optionally
/// `poster_url`) on external storage; only metadata is persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model3D {
    pub id: EntityKey,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    pub created_at: Timestamp,
    pub config: ViewerConfig,
    /// Human readable size, e.g. `"2.5MB"`. `"Pending"` until measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl Model3D {
    /// Build a new record from validated create input: server-generated
    /// UUID, current timestamp, default viewer config.
    pub fn new(input: CreateModel) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            url: input.url,
            poster_url: input.poster_url,
            created_at: Utc::now(),
            config: ViewerConfig::default(),
            size: Some("Pending".to_string()),
        }
    }
}

/// Validated input for creating a model. `title` and `url` are required
/// non-empty strings; trimming happens during validation at the route layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModel {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Partial update for a model. Scalar fields shallow-merge; `config`
/// deep-merges through [`ViewerConfigPatch`]. `id` and `created_at` are
/// immutable and deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelUpdate {
    pub title: Option<String>,
    pub url: Option<String>,
    pub poster_url: Option<String>,
    pub size: Option<String>,
    pub config: Option<ViewerConfigPatch>,
}

impl ModelUpdate {
    /// Merge this update into `model`.
    pub fn apply(&self, model: &mut Model3D) {
        if let Some(v) = &self.title {
            model.title = v.clone();
        }
        if let Some(v) = &self.url {
            model.url = v.clone();
        }
        if let Some(v) = &self.poster_url {
            model.poster_url = Some(v.clone());
        }
        if let Some(v) = &self.size {
            model.size = Some(v.clone());
        }
        if let Some(patch) = &self.config {
            patch.apply(&mut model.config);
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
