//! User-facing notifications (the toast surface).
//!
//! Store modules publish [`Notice`]s to a `tokio::sync::broadcast` channel;
//! whatever UI hosts the store subscribes and renders them. Publishing with
//! no subscribers is fine — the notice is simply dropped.

use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Broadcast hub for notices. Cheap to clone; all clones share the channel.
#[derive(Clone)]
pub struct NoticeBus {
    tx: broadcast::Sender<Notice>,
}

impl NoticeBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    fn publish(&self, level: NoticeLevel, message: impl Into<String>) {
        let notice = Notice {
            level,
            message: message.into(),
        };
        // Send only fails with zero subscribers; headless use is fine.
        let _ = self.tx.send(notice);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.publish(NoticeLevel::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.publish(NoticeLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(NoticeLevel::Error, message);
    }
}

impl Default for NoticeBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_notices() {
        let bus = NoticeBus::default();
        let mut rx = bus.subscribe();

        bus.success("saved");

        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "saved");
    }

    #[test]
    fn publishing_without_subscribers_does_not_panic() {
        NoticeBus::default().error("nobody listening");
    }
}
