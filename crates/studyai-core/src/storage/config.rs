//! TOML-based application configuration.
//!
//! Stores user preferences for the planning tools:
//! - display locale for narrative and chat output
//! - optional fixed seed for reproducible schedules
//! - whether service calls simulate the remote latency
//!
//! Configuration is stored at `~/.config/studyai/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::locale::Locale;

fn default_true() -> bool {
    true
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyai/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display locale for narrative and chat strings.
    #[serde(default)]
    pub locale: Locale,
    /// Fixed seed for reproducible runs; unset draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Whether service calls sleep the simulated network latency.
    #[serde(default = "default_true")]
    pub simulated_latency: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            seed: None,
            simulated_latency: true,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be parsed, or if the
    /// default config cannot be written.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| {
                    ConfigError::LoadFailed {
                        path,
                        message: e.to_string(),
                    }
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Set a config value by key ("locale", "seed", "simulated_latency").
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be
    /// parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "locale" => {
                self.locale = Locale::parse(value).ok_or_else(|| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("unknown locale '{value}' (expected en or ja)"),
                })?;
            }
            "seed" => {
                self.seed = if value.is_empty() || value == "none" {
                    None
                } else {
                    Some(value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("expected an integer seed, got '{value}'"),
                    })?)
                };
            }
            "simulated_latency" => {
                self.simulated_latency =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("expected true or false, got '{value}'"),
                    })?;
            }
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "unknown configuration key".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}
