//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults.
//! `Config::from_env` validates numeric values so a typo fails at startup
//! instead of producing a zero timeout.

use std::env;
use thiserror::Error;

use crate::fetcher::{BROWSER_USER_AGENT, FetcherOptions};

/// Environment variable names. Public so tests and deployment tooling can
/// refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_USER_AGENT: &str = "CRAWLER_USER_AGENT";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "CRAWLER_CONNECT_TIMEOUT_SECS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "CRAWLER_REQUEST_TIMEOUT_SECS";
pub const ENV_MAX_BODY_BYTES: &str = "CRAWLER_MAX_BODY_BYTES";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_BODY_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    fetcher: FetcherOptions,
    log_format: LogFormat,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(bind_addr: impl Into<String>, fetcher: FetcherOptions, log_format: LogFormat) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            fetcher,
            log_format,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let user_agent =
            env::var(ENV_USER_AGENT).unwrap_or_else(|_| BROWSER_USER_AGENT.to_string());

        let fetcher = FetcherOptions {
            user_agent,
            connect_timeout_secs: positive_from_env(
                ENV_CONNECT_TIMEOUT_SECS,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            request_timeout_secs: positive_from_env(
                ENV_REQUEST_TIMEOUT_SECS,
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            max_body_bytes: positive_from_env(ENV_MAX_BODY_BYTES, DEFAULT_MAX_BODY_BYTES)?,
        };

        let log_format = match env::var(ENV_LOG_FORMAT) {
            Err(_) => LogFormat::Text,
            Ok(value) => match value.to_lowercase().as_str() {
                "" | "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => {
                    return Err(ConfigError::InvalidValue {
                        field: ENV_LOG_FORMAT,
                        reason: format!("expected 'text' or 'json', got '{other}'"),
                    });
                }
            },
        };

        Ok(Self {
            bind_addr,
            fetcher,
            log_format,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Settings for the outbound HTTP client.
    pub fn fetcher(&self) -> &FetcherOptions {
        &self.fetcher
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BIND_ADDR, FetcherOptions::default(), LogFormat::Text)
    }
}

fn positive_from_env(field: &'static str, default: u64) -> Result<u64, ConfigError> {
    let Ok(raw) = env::var(field) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(value) => Ok(value),
        Err(e) => Err(ConfigError::InvalidValue {
            field,
            reason: format!("'{raw}' is not a number: {e}"),
        }),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
