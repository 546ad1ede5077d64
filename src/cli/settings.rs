use std::io::Write;

use platewise_settings::{SettingsPatch, SettingsService, SqliteSettingsStore};
use serde_json::Value;

use super::SettingsCommand;
use crate::{AppError, config::Config};

/// Parse `key=value`; the value is JSON when it parses as such, a string
/// otherwise.
pub fn parse_extra(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in {raw:?}"));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));

    Ok((key.to_owned(), value))
}

pub async fn run(
    command: SettingsCommand,
    config: &Config,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let pool =
        crate::db::create_pool(&config.database.url, config.database.max_connections).await?;
    crate::db::migrate(&pool).await?;

    let mut service = SettingsService::new(SqliteSettingsStore::new(pool));

    match command {
        SettingsCommand::Show { user } => {
            service.start_session(Some(user)).await?;
        }
        SettingsCommand::Set {
            user,
            language,
            first_success,
            extra,
        } => {
            service.start_session(Some(user)).await?;
            service
                .update(SettingsPatch {
                    has_shown_first_success: first_success.then_some(true),
                    language,
                    extra: extra.into_iter().collect(),
                })
                .await?;
        }
    }

    writeln!(out, "{}", serde_json::to_string_pretty(service.settings())?)?;

    Ok(())
}
