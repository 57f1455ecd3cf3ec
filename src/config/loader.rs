use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use thiserror::Error;

use crate::config::types::Config;

/// Upper bound on the number of cells a field may have.
pub const MAX_LENGTH: usize = 64;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `dirs::config_dir()/pinfield/config.toml`, or the current directory
    /// when no config dir is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pinfield").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pin = &self.pin;

        if pin.length == 0 || pin.length > MAX_LENGTH {
            return Err(invalid(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH, pin.length
            )));
        }

        if let Some(index) = pin.initial_focus {
            if index >= pin.length {
                return Err(invalid(format!(
                    "initial_focus {} is outside a field of {} cells",
                    index, pin.length
                )));
            }
        }

        if pin.mask_char.is_whitespace() {
            return Err(invalid("mask_char must be visible".to_string()));
        }

        let placeholder_len = pin.placeholder.chars().count();
        if placeholder_len > pin.length {
            return Err(invalid(format!(
                "placeholder has {} characters but the field has {} cells",
                placeholder_len, pin.length
            )));
        }

        let style = &self.style;
        for (name, value) in [
            ("text_color", &style.text_color),
            ("border_color", &style.border_color),
            ("active_border_color", &style.active_border_color),
            ("error_color", &style.error_color),
        ] {
            if Color::from_str(value).is_err() {
                return Err(invalid(format!("{} '{}' is not a colour", name, value)));
            }
        }

        if style.cell_width < 3 {
            return Err(invalid("cell_width must be at least 3".to_string()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
