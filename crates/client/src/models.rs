//! Model collection mirror with optimistic mutations.

use std::sync::Arc;

use serde_json::json;

use meshdeck_core::model::{Model3D, ModelUpdate};

use crate::error::ClientError;
use crate::notice::NoticeBus;
use crate::transport::Transport;

/// In-memory mirror of the server's model list, newest first.
///
/// `update` and `delete` are optimistic: local state mutates immediately and
/// a failed call restores the exact pre-mutation snapshot. A stale `fetch`
/// racing an in-flight optimistic edit can overwrite it — an accepted race
/// in the single-admin deployment this targets.
pub struct ModelStore {
    transport: Arc<dyn Transport>,
    bus: NoticeBus,
    pub models: Vec<Model3D>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ModelStore {
    pub fn new(transport: Arc<dyn Transport>, bus: NoticeBus) -> Self {
        Self {
            transport,
            bus,
            models: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Replace the collection from `GET /api/models`. On failure the current
    /// collection is left untouched.
    pub async fn fetch(&mut self) {
        self.loading = true;
        self.error = None;

        match self.transport.get("/api/models").await {
            Ok(data) => match serde_json::from_value::<Vec<Model3D>>(data) {
                Ok(models) => {
                    self.models = models;
                    self.loading = false;
                }
                Err(err) => self.fail_fetch(ClientError::Decode(err)),
            },
            Err(err) => self.fail_fetch(err),
        }
    }

    fn fail_fetch(&mut self, err: ClientError) {
        let message = err.to_string();
        tracing::warn!(error = %message, "Model fetch failed");
        self.loading = false;
        self.error = Some(message.clone());
        self.bus.error(message);
    }

    /// Create a model and prepend it (server list order is newest first).
    pub async fn add(&mut self, title: &str, url: &str) {
        let body = json!({ "title": title, "url": url });

        match self.transport.post("/api/models", body).await {
            Ok(data) => match serde_json::from_value::<Model3D>(data) {
                Ok(model) => {
                    self.bus
                        .success(format!("Model \"{}\" added successfully.", model.title));
                    self.models.insert(0, model);
                }
                Err(err) => self.bus.error(ClientError::Decode(err).to_string()),
            },
            Err(err) => self.bus.error(err.to_string()),
        }
    }

    /// Optimistically delete, rolling the collection back on failure.
    pub async fn delete(&mut self, id: &str) {
        let snapshot = self.models.clone();
        self.models.retain(|m| m.id != id);
        self.bus.warning("Deleting model...");

        match self.transport.delete(&format!("/api/models/{id}")).await {
            Ok(_) => self.bus.success("Model deleted successfully."),
            Err(err) => {
                self.models = snapshot;
                self.bus.error(err.to_string());
            }
        }
    }

    /// Optimistically apply a typed update, then reconcile with the server's
    /// merged record; roll back on failure.
    pub async fn update(&mut self, id: &str, update: ModelUpdate) {
        let snapshot = self.models.clone();
        if let Some(model) = self.models.iter_mut().find(|m| m.id == id) {
            update.apply(model);
        }

        let body = match serde_json::to_value(&update) {
            Ok(body) => body,
            Err(err) => {
                self.models = snapshot;
                self.bus.error(ClientError::Decode(err).to_string());
                return;
            }
        };

        match self.transport.patch(&format!("/api/models/{id}"), body).await {
            Ok(data) => {
                if let Ok(confirmed) = serde_json::from_value::<Model3D>(data) {
                    if let Some(model) = self.models.iter_mut().find(|m| m.id == id) {
                        *model = confirmed;
                    }
                }
                self.bus.success("Model updated.");
            }
            Err(err) => {
                self.models = snapshot;
                self.bus.error(err.to_string());
            }
        }
    }

    /// Local lookup; does not hit the network.
    pub fn get(&self, id: &str) -> Option<&Model3D> {
        self.models.iter().find(|m| m.id == id)
    }
}
