//! Application configuration management.
//!
//! Configuration is read once at startup from environment variables, with
//! `.env` support through `dotenvy`. Parsing is written against a lookup
//! function so it can be exercised without touching the process environment.
//!
//! # Environment Variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DATABASE_URL` | unset | PostgreSQL URL; unset selects in-memory storage |
//! | `DATABASE_MAX_CONNECTIONS` | `5` | Connection pool size |
//! | `APP_HOST` | `0.0.0.0` | Bind host |
//! | `APP_PORT` | `8080` | Bind port |
//! | `LOG_FORMAT` | `pretty` | `pretty` or `json` |
//! | `DEMO_API_TOKEN` | unset | In-memory mode only: seeds a demo user and customer |

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// PostgreSQL connection URL. `None` runs the service on in-memory storage.
    pub database_url: Option<String>,
    /// Maximum size of the PostgreSQL connection pool.
    pub database_max_connections: u32,
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
    /// Log output format.
    pub log_format: LogFormat,
    /// Token of the demo user seeded in in-memory mode.
    pub demo_api_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            app_host: DEFAULT_HOST.to_string(),
            app_port: DEFAULT_PORT,
            log_format: LogFormat::Pretty,
            demo_api_token: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables, reading `.env` first
    /// if one exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value cannot be parsed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loyalty_points::infrastructure::AppConfig;
    ///
    /// let config = AppConfig::from_lookup(|key| match key {
    ///     "APP_PORT" => Some("3000".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.app_port, 3000);
    /// assert!(config.database_url.is_none());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            database_url: lookup("DATABASE_URL"),
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                lookup("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
            app_host: lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            app_port: parse_or("APP_PORT", lookup("APP_PORT"), DEFAULT_PORT)?,
            log_format: parse_or("LOG_FORMAT", lookup("LOG_FORMAT"), LogFormat::Pretty)?,
            demo_api_token: lookup("DEMO_API_TOKEN"),
        })
    }

    /// Returns `host:port` for binding the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

/// Parses `value` when present, falling back to `default`.
fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|error: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
    })
}
