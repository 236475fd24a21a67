//! Dashboard user records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::EntityKey;

/// Access level of a dashboard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityKey,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn new(input: CreateUser) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            role: input.role.unwrap_or(Role::User),
            avatar_url: input.avatar_url,
        }
    }
}

/// Input for creating a user. `name` and `email` are required non-empty
/// strings; `role` defaults to [`Role::User`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
