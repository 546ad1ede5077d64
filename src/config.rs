use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use platewise_shared::Language;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    #[serde(default)]
    pub shopping: ShoppingConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShoppingConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Leave items the user already has out of exported lists
    #[serde(default = "default_only_unowned")]
    pub only_unowned: bool,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            only_unowned: default_only_unowned(),
        }
    }
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

fn default_only_unowned() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct I18nConfig {
    /// Forced UI language; detected from the environment when unset
    #[serde(default)]
    pub default_language: Option<Language>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, PLATEWISE_API_URL)
    /// 2. Environment variables (PLATEWISE__DATABASE__URL, etc.)
    /// 3. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("database.url", "sqlite:platewise.db")?
            .set_default("database.max_connections", 5)?
            .set_default("api.base_url", "http://localhost:8080/api")?
            .set_default("api.timeout_secs", 30)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PLATEWISE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(api_url) = env::var("PLATEWISE_API_URL") {
            builder = builder.set_override("api.base_url", api_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if let Err(err) = url::Url::parse(&self.api.base_url) {
            return Err(format!("API base_url is not a valid URL: {err}"));
        }
        if self.api.timeout_secs == 0 {
            return Err("API timeout_secs must be greater than 0".to_string());
        }
        if self.shopping.currency_symbol.trim().is_empty() {
            return Err("Shopping currency_symbol must not be empty".to_string());
        }
        Ok(())
    }
}
