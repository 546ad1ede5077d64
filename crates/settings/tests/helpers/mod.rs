use std::{
    path::PathBuf,
    str::FromStr,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use platewise_db::{Migrate, Plan};
use platewise_settings::{SettingsError, SettingsStore, SqliteSettingsStore, UserSettings};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub async fn setup_test_store(path: PathBuf) -> anyhow::Result<(SqlitePool, SqliteSettingsStore)> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    platewise_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok((pool.clone(), SqliteSettingsStore::new(pool)))
}

/// Store whose every call fails, counting the attempts.
#[derive(Default)]
#[allow(dead_code)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

#[async_trait::async_trait]
impl SettingsStore for FailingStore {
    async fn load(&self, _user_id: &str) -> Result<Option<UserSettings>, SettingsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SettingsError::Database(sqlx::Error::PoolClosed))
    }

    async fn upsert(&self, _user_id: &str, _settings: &UserSettings) -> Result<(), SettingsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SettingsError::Database(sqlx::Error::PoolClosed))
    }
}

/// SQLite store whose loads fail while `fail_loads` is set.
#[allow(dead_code)]
pub struct FlakyStore {
    pub inner: SqliteSettingsStore,
    pub fail_loads: AtomicBool,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn new(inner: SqliteSettingsStore) -> Self {
        Self {
            inner,
            fail_loads: AtomicBool::new(false),
        }
    }
}

#[async_trait::async_trait]
impl SettingsStore for FlakyStore {
    async fn load(&self, user_id: &str) -> Result<Option<UserSettings>, SettingsError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(SettingsError::Database(sqlx::Error::PoolClosed));
        }

        self.inner.load(user_id).await
    }

    async fn upsert(&self, user_id: &str, settings: &UserSettings) -> Result<(), SettingsError> {
        self.inner.upsert(user_id, settings).await
    }
}
