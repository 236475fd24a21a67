//! Storage bindings and seed data for the domain record types.

use chrono::{Duration, Utc};
use meshdeck_core::model::Model3D;
use meshdeck_core::settings::Settings;
use meshdeck_core::user::{Role, User};
use meshdeck_core::viewer::ViewerConfig;

impl crate::EntityKind for User {
    const KIND: &'static str = "user";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn seed() -> Vec<Self> {
        vec![User {
            id: "u1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@meshdeck.io".to_string(),
            role: Role::Admin,
            avatar_url: None,
        }]
    }
}

impl crate::EntityKind for Model3D {
    const KIND: &'static str = "model";

    fn key(&self) -> String {
        self.id.clone()
    }

    /// Three demo models pointing at the public modelviewer.dev sample
    /// assets. `created_at` is staggered so the newest-first listing has a
    /// deterministic order from the first request on.
    fn seed() -> Vec<Self> {
        let now = Utc::now();
        vec![
            Model3D {
                id: "m1".to_string(),
                title: "Astronaut".to_string(),
                url: "https://modelviewer.dev/shared-assets/models/Astronaut.glb".to_string(),
                poster_url: Some(
                    "https://modelviewer.dev/shared-assets/models/Astronaut.webp".to_string(),
                ),
                created_at: now,
                config: ViewerConfig::default(),
                size: Some("2.5MB".to_string()),
            },
            Model3D {
                id: "m2".to_string(),
                title: "Neil Armstrong Spacesuit".to_string(),
                url: "https://modelviewer.dev/shared-assets/models/NeilArmstrong.glb".to_string(),
                poster_url: None,
                created_at: now - Duration::seconds(100),
                config: ViewerConfig {
                    auto_rotate: false,
                    ..ViewerConfig::default()
                },
                size: Some("5.1MB".to_string()),
            },
            Model3D {
                id: "m3".to_string(),
                title: "Canoe".to_string(),
                url: "https://modelviewer.dev/shared-assets/models/Canoe.glb".to_string(),
                poster_url: None,
                created_at: now - Duration::seconds(200),
                config: ViewerConfig::default(),
                size: Some("8.2MB".to_string()),
            },
        ]
    }
}

impl crate::EntityKind for Settings {
    const KIND: &'static str = "settings";

    // Singleton: always keyed "global".
    fn key(&self) -> String {
        Settings::GLOBAL_KEY.to_string()
    }

    fn seed() -> Vec<Self> {
        vec![Settings::default()]
    }
}
