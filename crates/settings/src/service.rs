use platewise_shared::Language;

use crate::{SettingsError, SettingsPatch, SettingsStore, UserSettings};

/// Settings of the current session.
///
/// Signed-in sessions are backed by the store; anonymous ones live in memory
/// and never reach it. Updates are applied locally first and kept even when
/// persisting them fails.
pub struct SettingsService<S> {
    store: S,
    user_id: Option<String>,
    settings: UserSettings,
}

impl<S: SettingsStore> SettingsService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            user_id: None,
            settings: UserSettings::default(),
        }
    }

    /// Switch to `user_id` (or an anonymous session) and load its settings.
    ///
    /// On a load failure the previous session, user and settings alike, stays
    /// in place.
    pub async fn start_session(&mut self, user_id: Option<String>) -> Result<(), SettingsError> {
        let Some(user_id) = user_id else {
            self.user_id = None;
            self.settings = UserSettings::default();
            return Ok(());
        };

        match self.store.load(&user_id).await {
            Ok(settings) => {
                tracing::debug!(user_id, "settings loaded");
                self.settings = settings.unwrap_or_default();
                self.user_id = Some(user_id);
                Ok(())
            }
            Err(err) => {
                tracing::error!(user_id, %err, "failed to load settings");
                Err(err)
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn language(&self) -> Option<Language> {
        self.settings.language
    }

    pub async fn update(&mut self, patch: SettingsPatch) -> Result<(), SettingsError> {
        patch.apply(&mut self.settings);

        let Some(user_id) = self.user_id.as_deref() else {
            return Ok(());
        };

        if let Err(err) = self.store.upsert(user_id, &self.settings).await {
            tracing::error!(user_id, %err, "failed to save settings");
            return Err(err);
        }

        Ok(())
    }

    pub async fn mark_first_success_shown(&mut self) -> Result<(), SettingsError> {
        self.update(SettingsPatch {
            has_shown_first_success: Some(true),
            ..Default::default()
        })
        .await
    }

    pub fn end_session(&mut self) {
        self.user_id = None;
        self.settings = UserSettings::default();
    }
}
