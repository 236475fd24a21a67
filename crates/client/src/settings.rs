//! Settings singleton mirror.

use std::sync::Arc;

use meshdeck_core::settings::{Settings, SettingsUpdate};

use crate::notice::NoticeBus;
use crate::transport::Transport;

/// Mirror of the global settings record. Starts at the built-in defaults so
/// the UI has sensible values before (or despite) the first fetch.
pub struct SettingsStore {
    transport: Arc<dyn Transport>,
    bus: NoticeBus,
    pub settings: Settings,
}

impl SettingsStore {
    pub fn new(transport: Arc<dyn Transport>, bus: NoticeBus) -> Self {
        Self {
            transport,
            bus,
            settings: Settings::default(),
        }
    }

    /// Refresh from the server; a failed fetch leaves the in-memory values
    /// unchanged.
    pub async fn fetch(&mut self) {
        match self.transport.get("/api/settings").await {
            Ok(data) => {
                if let Ok(settings) = serde_json::from_value::<Settings>(data) {
                    self.settings = settings;
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Settings fetch failed");
                self.bus.error(err.to_string());
            }
        }
    }

    /// Optimistic shallow-merge update with rollback.
    pub async fn update(&mut self, update: SettingsUpdate) {
        let snapshot = self.settings.clone();
        update.apply(&mut self.settings);

        let body = match serde_json::to_value(&update) {
            Ok(body) => body,
            Err(err) => {
                self.settings = snapshot;
                self.bus.error(err.to_string());
                return;
            }
        };

        match self.transport.patch("/api/settings", body).await {
            Ok(data) => {
                if let Ok(confirmed) = serde_json::from_value::<Settings>(data) {
                    self.settings = confirmed;
                }
                self.bus.success("Settings saved.");
            }
            Err(err) => {
                self.settings = snapshot;
                self.bus.error(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_failure_keeps_prior_defaults() {
        let transport = Arc::new(MockTransport::new());
        transport.push_err("offline");

        let mut store = SettingsStore::new(transport, NoticeBus::default());
        store.fetch().await;

        assert_eq!(store.settings.theme, "dark");
        assert!(store.settings.ar_default);
        assert_eq!(store.settings.upload_limit, 50);
    }

    #[tokio::test]
    async fn fetch_replaces_with_server_values() {
        let transport = Arc::new(MockTransport::new());
        transport.push_ok(json!({ "theme": "light", "arDefault": false, "uploadLimit": 10 }));

        let mut store = SettingsStore::new(transport, NoticeBus::default());
        store.fetch().await;

        assert_eq!(store.settings.theme, "light");
        assert!(!store.settings.ar_default);
        assert_eq!(store.settings.upload_limit, 10);
    }

    #[tokio::test]
    async fn failed_update_rolls_back() {
        let transport = Arc::new(MockTransport::new());
        transport.push_err("nope");

        let mut store = SettingsStore::new(transport, NoticeBus::default());
        store
            .update(SettingsUpdate {
                theme: Some("light".into()),
                ..Default::default()
            })
            .await;

        assert_eq!(store.settings, Settings::default());
    }
}
