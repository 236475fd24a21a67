//! Global dashboard settings (singleton record).

use serde::{Deserialize, Serialize};

/// Dashboard-wide settings. Exactly one record exists, keyed `"global"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: String,
    pub ar_default: bool,
    pub upload_limit: u32,
}

impl Settings {
    /// Storage key of the singleton record.
    pub const GLOBAL_KEY: &'static str = "global";
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            ar_default: true,
            upload_limit: 50,
        }
    }
}

/// Shallow-merge update for [`Settings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsUpdate {
    pub theme: Option<String>,
    pub ar_default: Option<bool>,
    pub upload_limit: Option<u32>,
}

impl SettingsUpdate {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(v) = &self.theme {
            settings.theme = v.clone();
        }
        if let Some(v) = self.ar_default {
            settings.ar_default = v;
        }
        if let Some(v) = self.upload_limit {
            settings.upload_limit = v;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
