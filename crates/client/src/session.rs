//! Auth/session state.

use std::sync::Arc;

use serde_json::json;

use meshdeck_core::user::User;

use crate::notice::NoticeBus;
use crate::transport::Transport;

/// Login state. The bearer token lives both here (for inspection) and on the
/// transport (where it is attached to requests).
pub struct SessionStore {
    transport: Arc<dyn Transport>,
    bus: NoticeBus,
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionStore {
    pub fn new(transport: Arc<dyn Transport>, bus: NoticeBus) -> Self {
        Self {
            transport,
            bus,
            token: None,
            user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Authenticate against `POST /api/auth/login`. On failure no auth state
    /// is ever set and the existing session (if any) is left untouched.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        let body = json!({ "username": username, "password": password });

        match self.transport.post("/api/auth/login", body).await {
            Ok(data) => {
                let token = data
                    .get("token")
                    .and_then(|v| v.as_str())
                    .map(String::from);
                let user = data
                    .get("user")
                    .cloned()
                    .and_then(|v| serde_json::from_value::<User>(v).ok());

                match (token, user) {
                    (Some(token), Some(user)) => {
                        self.transport.set_token(Some(token.clone()));
                        self.token = Some(token);
                        self.user = Some(user);
                        self.bus.success("Logged in.");
                        true
                    }
                    _ => {
                        self.bus.error("Login response was malformed.");
                        false
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Login failed");
                self.bus.error(err.to_string());
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.transport.set_token(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;
    use serde_json::json;

    fn store(transport: Arc<MockTransport>) -> SessionStore {
        SessionStore::new(transport, NoticeBus::default())
    }

    #[tokio::test]
    async fn successful_login_sets_token_and_user() {
        let transport = Arc::new(MockTransport::new());
        transport.push_ok(json!({
            "token": "demo-token",
            "user": { "id": "u1", "name": "Admin User",
                      "email": "admin@meshdeck.io", "role": "admin" }
        }));

        let mut session = store(transport.clone());
        assert!(session.login("admin", "pw").await);

        assert_eq!(session.token.as_deref(), Some("demo-token"));
        assert_eq!(session.user.as_ref().unwrap().id, "u1");
        // Token installed on the transport for subsequent requests.
        assert_eq!(transport.token.lock().unwrap().as_deref(), Some("demo-token"));
    }

    #[tokio::test]
    async fn failed_login_never_sets_auth_state() {
        let transport = Arc::new(MockTransport::new());
        transport.push_err("Invalid username or password");

        let mut session = store(transport.clone());
        assert!(!session.login("admin", "wrong").await);

        assert!(session.token.is_none());
        assert!(session.user.is_none());
        assert!(transport.token.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn logout_clears_session_and_transport_token() {
        let transport = Arc::new(MockTransport::new());
        transport.push_ok(json!({
            "token": "demo-token",
            "user": { "id": "u1", "name": "A", "email": "a@b.c", "role": "admin" }
        }));

        let mut session = store(transport.clone());
        session.login("admin", "pw").await;
        session.logout();

        assert!(!session.is_authenticated());
        assert!(transport.token.lock().unwrap().is_none());
    }
}
