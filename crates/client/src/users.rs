//! User list mirror.

use std::sync::Arc;

use serde_json::json;

use meshdeck_core::user::User;

use crate::notice::NoticeBus;
use crate::transport::Transport;

pub struct UserStore {
    transport: Arc<dyn Transport>,
    bus: NoticeBus,
    pub users: Vec<User>,
    pub loading: bool,
}

impl UserStore {
    pub fn new(transport: Arc<dyn Transport>, bus: NoticeBus) -> Self {
        Self {
            transport,
            bus,
            users: Vec::new(),
            loading: false,
        }
    }

    pub async fn fetch(&mut self) {
        self.loading = true;
        match self.transport.get("/api/users").await {
            Ok(data) => {
                if let Ok(users) = serde_json::from_value::<Vec<User>>(data) {
                    self.users = users;
                }
                self.loading = false;
            }
            Err(err) => {
                self.loading = false;
                self.bus.error(err.to_string());
            }
        }
    }

    pub async fn add(&mut self, name: &str, email: &str) {
        let body = json!({ "name": name, "email": email });
        match self.transport.post("/api/users", body).await {
            Ok(data) => {
                if let Ok(user) = serde_json::from_value::<User>(data) {
                    self.bus.success(format!("User \"{}\" added.", user.name));
                    self.users.push(user);
                }
            }
            Err(err) => self.bus.error(err.to_string()),
        }
    }
}
