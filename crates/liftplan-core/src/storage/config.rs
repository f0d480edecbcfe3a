//! TOML-based application configuration.
//!
//! Stores user preferences: the title given to a fresh workout, whether
//! destructive operations prompt for confirmation, and the shell fields of
//! interval-format exports.
//!
//! Configuration is stored at `~/.config/liftplan/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::codec::zwo::ZwoOptions;
use crate::error::ConfigError;
use crate::workout::DEFAULT_TITLE;

/// Interval-format export shell fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalConfig {
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_sport_type")]
    pub sport_type: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/liftplan/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Title given to a freshly created workout.
    #[serde(default = "default_title")]
    pub default_title: String,
    /// Prompt before clear-all, multi-delete and import-overwrite.
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,
    #[serde(default)]
    pub interval: IntervalConfig,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_true() -> bool {
    true
}
fn default_author() -> String {
    "liftplan".to_string()
}
fn default_sport_type() -> String {
    "bike".to_string()
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            sport_type: default_sport_type(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            confirm_destructive: true,
            interval: IntervalConfig::default(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf, std::io::Error> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the default file on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("<data dir>"),
            message: e.to_string(),
        })?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let config = Self::default();
                config.save()?;
                Ok(config)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("<data dir>"),
            message: e.to_string(),
        })?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning the default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Set a known key from its string representation.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownKey`] for keys outside the schema and
    /// [`ConfigError::InvalidValue`] when the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "default_title" => self.default_title = value.to_string(),
            "confirm_destructive" => {
                self.confirm_destructive =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("expected true or false, got '{value}'"),
                    })?;
            }
            "interval.author" => self.interval.author = value.to_string(),
            "interval.sport_type" => self.interval.sport_type = value.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }

    /// Interval-export shell options from this config.
    pub fn zwo_options(&self) -> ZwoOptions {
        ZwoOptions {
            author: self.interval.author.clone(),
            sport_type: self.interval.sport_type.clone(),
        }
    }
}
