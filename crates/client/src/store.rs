//! Composition root for the client state container.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::models::ModelStore;
use crate::notice::{Notice, NoticeBus};
use crate::session::SessionStore;
use crate::settings::SettingsStore;
use crate::transport::Transport;
use crate::users::UserStore;

/// The application state container: session, models, users, and settings
/// mirrors sharing one transport and one notice bus.
///
/// Constructed explicitly (no global singleton) so tests can inject a
/// scripted transport and hosts can scope one store per window or session.
pub struct AppStore {
    bus: NoticeBus,
    pub session: SessionStore,
    pub models: ModelStore,
    pub users: UserStore,
    pub settings: SettingsStore,
}

impl AppStore {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let bus = NoticeBus::default();
        Self {
            session: SessionStore::new(transport.clone(), bus.clone()),
            models: ModelStore::new(transport.clone(), bus.clone()),
            users: UserStore::new(transport.clone(), bus.clone()),
            settings: SettingsStore::new(transport, bus.clone()),
            bus,
        }
    }

    /// Subscribe to user-facing notifications.
    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.bus.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;
    use crate::transport::mock::MockTransport;

    #[tokio::test]
    async fn store_modules_share_the_notice_bus() {
        let transport = Arc::new(MockTransport::new());
        transport.push_err("store offline");

        let mut app = AppStore::new(transport);
        let mut notices = app.notices();

        app.models.fetch().await;

        let notice = notices.recv().await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("store offline"));
    }
}
