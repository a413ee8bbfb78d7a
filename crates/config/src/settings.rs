//! Main settings module

use arabic_core::{Gender, GrammaticalCase, NumberMode, SpellerConfig};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

/// Upper bound on fixed decimals when formatting floats
pub const MAX_DECIMALS: usize = 20;

/// Settings for the whole workspace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Default grammar for spelled numbers
    #[serde(default)]
    pub speller: SpellerSettings,

    /// Float layout for Arabic-Indic digit rendering
    #[serde(default)]
    pub digits: DigitSettings,

    /// Gregorian to Hijri conversion
    #[serde(default)]
    pub calendar: CalendarSettings,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_digits()?;
        Ok(())
    }

    fn validate_digits(&self) -> Result<(), ConfigError> {
        let digits = &self.digits;

        if digits.decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidValue {
                field: "digits.decimals".to_string(),
                message: format!("Must be at most {}, got {}", MAX_DECIMALS, digits.decimals),
            });
        }

        if digits.decimal_mark.chars().count() != 1 {
            return Err(ConfigError::InvalidValue {
                field: "digits.decimal_mark".to_string(),
                message: format!(
                    "Must be a single character, got {:?}",
                    digits.decimal_mark
                ),
            });
        }

        if digits.thousands_mark.chars().count() > 1 {
            return Err(ConfigError::InvalidValue {
                field: "digits.thousands_mark".to_string(),
                message: format!(
                    "Must be empty or a single character, got {:?}",
                    digits.thousands_mark
                ),
            });
        }

        if digits.decimal_mark == digits.thousands_mark {
            return Err(ConfigError::InvalidValue {
                field: "digits.thousands_mark".to_string(),
                message: "Must differ from the decimal mark".to_string(),
            });
        }

        Ok(())
    }
}

/// Default grammar applied when a caller does not pick one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellerSettings {
    #[serde(default)]
    pub gender: Gender,

    #[serde(default)]
    pub case: GrammaticalCase,

    #[serde(default)]
    pub mode: NumberMode,
}

impl SpellerSettings {
    pub fn config(&self) -> SpellerConfig {
        SpellerConfig::new(self.gender, self.case, self.mode)
    }
}

/// Float layout: fixed decimals, decimal mark, thousands separator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitSettings {
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    #[serde(default = "default_decimal_mark")]
    pub decimal_mark: String,

    #[serde(default = "default_thousands_mark")]
    pub thousands_mark: String,
}

fn default_decimals() -> usize {
    2
}

fn default_decimal_mark() -> String {
    ".".to_string()
}

fn default_thousands_mark() -> String {
    ",".to_string()
}

impl Default for DigitSettings {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            decimal_mark: default_decimal_mark(),
            thousands_mark: default_thousands_mark(),
        }
    }
}

/// Hijri conversion settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSettings {
    /// Reject Gregorian triples that are not real dates
    ///
    /// With `false` the converter keeps the legacy unchecked contract and
    /// returns an arithmetically derived result for any input.
    #[serde(default = "default_true")]
    pub strict: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            strict: default_true(),
        }
    }
}

/// Load settings from `config/` in the working directory and the environment
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings from a config directory and the environment
///
/// Sources, later ones winning: `{dir}/default.*`, `{dir}/{env}.*`,
/// then `ARABIC__SECTION__KEY` environment variables.
pub fn load_settings_from(dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    tracing::debug!(dir = %dir.display(), env = ?env, "Loading settings");

    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(
        File::with_name(&dir.join("default").to_string_lossy()).required(false),
    );

    // Load environment-specific config
    if let Some(env_name) = env {
        builder = builder
            .add_source(File::with_name(&dir.join(env_name).to_string_lossy()).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("ARABIC")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    tracing::debug!(?settings, "Settings loaded");

    Ok(settings)
}
