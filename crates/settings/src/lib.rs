mod error;
mod service;
mod store;

pub use error::SettingsError;
pub use service::SettingsService;
pub use store::{SettingsStore, SqliteSettingsStore};

use platewise_shared::Language;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-user preferences kept by the backend.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default)]
    pub has_shown_first_success: bool,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial update; `None` fields and absent extra keys are left untouched.
#[derive(Clone, Debug, Default)]
pub struct SettingsPatch {
    pub has_shown_first_success: Option<bool>,
    pub language: Option<Language>,
    pub extra: Map<String, Value>,
}

impl SettingsPatch {
    pub fn language(language: Language) -> Self {
        Self {
            language: Some(language),
            ..Default::default()
        }
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn apply(self, settings: &mut UserSettings) {
        if let Some(shown) = self.has_shown_first_success {
            settings.has_shown_first_success = shown;
        }

        if let Some(language) = self.language {
            settings.language = Some(language);
        }

        settings.extra.extend(self.extra);
    }
}
