//! Configuration management for the contact manager.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default simulated network delay for the initial contact load.
pub const DEFAULT_LOAD_DELAY_MS: u64 = 800;

/// Configuration for the contact manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// Simulated delay before the seed contacts arrive, in milliseconds (default: 800)
    pub load_delay_ms: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_LOAD_DELAY_MS`: Initial load delay in milliseconds (default: 800)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let load_delay_ms = Self::parse_env_u64("CONTACTS_LOAD_DELAY_MS", DEFAULT_LOAD_DELAY_MS)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            load_delay_ms,
            log_level,
        })
    }

    /// The initial load delay as a `Duration`.
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            log_level: "error".to_string(),
        }
    }
}
