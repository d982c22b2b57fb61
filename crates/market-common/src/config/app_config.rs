//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).
//! Every setting has a default, so an empty environment yields a working config.

use std::env;
use std::path::PathBuf;

use market_core::Snowflake;

/// Main application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub snowflake: SnowflakeConfig,
    pub notification: NotificationConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: Environment::default(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Default)]
pub struct SnowflakeConfig {
    pub worker_id: u16,
}

/// Simulated push delivery configuration
#[derive(Debug, Clone, Default)]
pub struct NotificationConfig {
    /// When set, every push is also appended to this file
    pub log_file: Option<PathBuf>,
}

fn default_app_name() -> String {
    "marketplace".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to a value that cannot be used
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if a variable is set to a value that cannot be used
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Unknown environments fall back to development
        let env = var("APP_ENV")
            .and_then(|raw| Environment::parse(&raw))
            .unwrap_or_default();

        let worker_id = match var("WORKER_ID") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|id| *id <= Snowflake::MAX_WORKER_ID)
                .ok_or_else(|| ConfigError::InvalidValue("WORKER_ID", raw))?,
            None => 0,
        };

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            snowflake: SnowflakeConfig { worker_id },
            notification: NotificationConfig {
                log_file: var("NOTIFICATION_LOG_FILE")
                    .filter(|s| !s.trim().is_empty())
                    .map(PathBuf::from),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
