use std::str::FromStr;

use platewise_db::table::UserSettings as UserSettingsTable;
use platewise_shared::Language;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde_json::{Map, Value};
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

use crate::{SettingsError, UserSettings};

/// Backend persistence for per-user settings.
#[async_trait::async_trait]
pub trait SettingsStore: Send + Sync {
    /// Stored settings of `user_id`, `None` when the user has none yet.
    async fn load(&self, user_id: &str) -> Result<Option<UserSettings>, SettingsError>;

    async fn upsert(&self, user_id: &str, settings: &UserSettings) -> Result<(), SettingsError>;
}

#[derive(FromRow)]
struct SettingsRow {
    has_shown_first_success: bool,
    language: Option<String>,
    extra: String,
}

impl SettingsRow {
    fn into_settings(self, user_id: &str) -> Result<UserSettings, SettingsError> {
        let language = match self.language {
            Some(code) => match Language::from_str(&code) {
                Ok(language) => Some(language),
                Err(_) => {
                    tracing::warn!(user_id, code, "ignoring unsupported stored language");
                    None
                }
            },
            None => None,
        };

        let extra: Map<String, Value> = serde_json::from_str(&self.extra)?;

        Ok(UserSettings {
            has_shown_first_success: self.has_shown_first_success,
            language,
            extra,
        })
    }
}

#[derive(Clone)]
pub struct SqliteSettingsStore {
    pool: SqlitePool,
}

impl SqliteSettingsStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SettingsStore for SqliteSettingsStore {
    #[tracing::instrument(skip(self))]
    async fn load(&self, user_id: &str) -> Result<Option<UserSettings>, SettingsError> {
        let statement = Query::select()
            .columns([
                UserSettingsTable::HasShownFirstSuccess,
                UserSettingsTable::Language,
                UserSettingsTable::Extra,
            ])
            .from(UserSettingsTable::Table)
            .and_where(Expr::col(UserSettingsTable::UserId).eq(user_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, SettingsRow, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| row.into_settings(user_id)).transpose()
    }

    #[tracing::instrument(skip(self, settings))]
    async fn upsert(&self, user_id: &str, settings: &UserSettings) -> Result<(), SettingsError> {
        let extra = serde_json::to_string(&settings.extra)?;
        let language = settings.language.map(|language| language.code().to_owned());
        let updated_at = OffsetDateTime::now_utc().unix_timestamp();

        let statement = Query::insert()
            .into_table(UserSettingsTable::Table)
            .columns([
                UserSettingsTable::UserId,
                UserSettingsTable::HasShownFirstSuccess,
                UserSettingsTable::Language,
                UserSettingsTable::Extra,
                UserSettingsTable::UpdatedAt,
            ])
            .values_panic([
                user_id.into(),
                settings.has_shown_first_success.into(),
                language.into(),
                extra.into(),
                updated_at.into(),
            ])
            .on_conflict(
                OnConflict::column(UserSettingsTable::UserId)
                    .update_columns([
                        UserSettingsTable::HasShownFirstSuccess,
                        UserSettingsTable::Language,
                        UserSettingsTable::Extra,
                        UserSettingsTable::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        tracing::debug!(user_id, "settings saved");

        Ok(())
    }
}
