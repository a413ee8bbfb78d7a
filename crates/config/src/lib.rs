//! Configuration management
//!
//! Supports loading configuration from:
//! - TOML/YAML/JSON files (`config/default.*`, `config/{env}.*`)
//! - Environment variables (`ARABIC__` prefix, `__` separator)
//! - Validation on load ([`Settings::validate`])

pub mod settings;

pub use settings::{
    load_settings, load_settings_from, CalendarSettings, DigitSettings, Settings, SpellerSettings,
    MAX_DECIMALS,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(path) => ConfigError::FileNotFound(path),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}

impl From<ConfigError> for arabic_core::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidValue { field, message } => {
                arabic_core::Error::InvalidConfiguration {
                    field,
                    value: message,
                }
            }
            other => arabic_core::Error::InvalidConfiguration {
                field: "settings".to_string(),
                value: other.to_string(),
            },
        }
    }
}
