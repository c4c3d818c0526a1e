//! Global application configuration.
//!
//! `AppConfig` is loaded once from environment variables (and `.env`, if present)
//! and stored in a process-wide singleton. Free accessor functions at the bottom
//! of this module read from that singleton so callers never need to thread the
//! config through by hand.

use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: u64,
}

/// Upper bound for `JWT_DURATION_MINUTES` (one year).
pub const MAX_JWT_DURATION_MINUTES: u64 = 525_600;

static CONFIG_INSTANCE: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` is a thin
    /// wrapper around this; tests feed it a map instead of the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            env: or("APP_ENV", "development"),
            project_name: or("PROJECT_NAME", "classroom-api"),
            log_level: or("LOG_LEVEL", "api=info"),
            log_file: or("LOG_FILE", "api.log"),
            log_to_stdout: or("LOG_TO_STDOUT", "false") == "true",
            database_path: or("DATABASE_PATH", "data/classroom.db"),
            host: or("HOST", "127.0.0.1"),
            port: parse("PORT", &or("PORT", "3000"))?,
            jwt_secret,
            jwt_duration_minutes: parse_in_range(
                "JWT_DURATION_MINUTES",
                &or("JWT_DURATION_MINUTES", "60"),
                1..=MAX_JWT_DURATION_MINUTES,
            )?,
        })
    }

    /// Loads the configuration and installs it as the global instance.
    ///
    /// Calling this more than once keeps the first successfully installed config.
    pub fn init() -> Result<&'static AppConfig, ConfigError> {
        if let Some(cfg) = CONFIG_INSTANCE.get() {
            return Ok(cfg);
        }
        let cfg = Self::from_env()?;
        Ok(CONFIG_INSTANCE.get_or_init(|| cfg))
    }

    /// Returns the global configuration.
    ///
    /// # Panics
    /// Panics if [`AppConfig::init`] has not been called yet.
    pub fn global() -> &'static AppConfig {
        CONFIG_INSTANCE
            .get()
            .expect("AppConfig::init must be called before reading configuration")
    }
}

fn parse<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}

fn parse_in_range(
    name: &'static str,
    value: &str,
    range: RangeInclusive<u64>,
) -> Result<u64, ConfigError> {
    let parsed: u64 = parse(name, value)?;
    if range.contains(&parsed) {
        Ok(parsed)
    } else {
        Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        })
    }
}

// --- Accessors ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}
