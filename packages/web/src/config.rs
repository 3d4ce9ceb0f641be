//! Web shell configuration.
//!
//! `LOG_LEVEL` is read at run time by the server. `SITE_BASE_URL` is read
//! at build time so the server-rendered head and the hydrated client agree.

// Only the server build reads the runtime settings.
#![cfg_attr(not(feature = "server"), allow(dead_code))]

use listing_core::DEFAULT_BASE_URL;
use thiserror::Error;
use tracing::Level;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid LOG_LEVEL {0:?}: expected trace, debug, info, warn or error")]
    InvalidLogLevel(String),
}

/// Public URL baked into this build.
pub fn base_url() -> &'static str {
    option_env!("SITE_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Settings for the server process.
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub log_level: Level,
    pub base_url: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            base_url: base_url().to_string(),
        }
    }
}

impl WebConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_level = parse_log_level(std::env::var("LOG_LEVEL").ok().as_deref())?;
        Ok(Self {
            log_level,
            ..Default::default()
        })
    }
}

fn parse_log_level(value: Option<&str>) -> Result<Level, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(Level::INFO),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(parse_log_level(None), Ok(Level::INFO));
        assert_eq!(parse_log_level(Some("  ")), Ok(Level::INFO));
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        assert_eq!(parse_log_level(Some("DEBUG")), Ok(Level::DEBUG));
        assert_eq!(parse_log_level(Some("warn")), Ok(Level::WARN));
    }

    #[test]
    fn log_level_rejects_garbage() {
        assert_eq!(
            parse_log_level(Some("loud")),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }
}
