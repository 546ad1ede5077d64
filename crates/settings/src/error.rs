#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("settings migration error: {0}")]
    Migration(#[from] sqlx_migrator::Error),

    #[error("invalid settings payload: {0}")]
    Serialization(#[from] serde_json::Error),
}
