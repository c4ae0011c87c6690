//! # Configuration
//!
//! Client preferences, stored as `config.json` in the data directory next to the log.
//! Mirroring settings are not configuration: they belong to the store
//! (see [`crate::model::Settings`]).
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `currency` | `RM` | Label printed next to amounts |
//! | `mirror-timeout` | `10` | Seconds allowed for one mirror request, also the exit grace period |

use crate::error::{FuelogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "RM";
const DEFAULT_MIRROR_TIMEOUT_SECS: u64 = 10;

pub const CONFIG_KEYS: &[&str] = &["currency", "mirror-timeout"];

/// Configuration for fuelog, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FuelogConfig {
    /// Currency label for amounts (e.g., "RM", "EUR")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Timeout for mirror requests, in seconds
    #[serde(default = "default_mirror_timeout")]
    pub mirror_timeout_secs: u64,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_mirror_timeout() -> u64 {
    DEFAULT_MIRROR_TIMEOUT_SECS
}

impl Default for FuelogConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            mirror_timeout_secs: DEFAULT_MIRROR_TIMEOUT_SECS,
        }
    }
}

impl FuelogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FuelogError::Io)?;
        let config: FuelogConfig =
            serde_json::from_str(&content).map_err(FuelogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FuelogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FuelogError::Serialization)?;
        fs::write(config_path, content).map_err(FuelogError::Io)?;
        Ok(())
    }

    pub fn mirror_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.mirror_timeout_secs)
    }

    /// Read a value by its user-facing key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "currency" => Some(self.currency.clone()),
            "mirror-timeout" => Some(self.mirror_timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Set a value by its user-facing key.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "currency" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("currency cannot be empty".to_string());
                }
                self.currency = value.to_string();
                Ok(())
            }
            "mirror-timeout" => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("mirror-timeout must be whole seconds, got {}", value))?;
                if secs == 0 {
                    return Err("mirror-timeout must be at least 1 second".to_string());
                }
                self.mirror_timeout_secs = secs;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
