use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx_migrator::Error),

    #[error("Settings error: {0}")]
    SettingsError(#[from] platewise_settings::SettingsError),

    #[error("Meal plan error: {0}")]
    MealPlanError(#[from] platewise_mealplan::MealPlanError),

    #[error("Clipboard error: {0}")]
    ClipboardError(#[from] platewise_shopping::ClipboardError),

    #[error("Share error: {0}")]
    ShareError(#[from] platewise_shopping::ShareError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
