//! Runtime configuration.
//!
//! Values come from an optional TOML file named by `END_AUCTIONS_CONFIG`, then
//! individual `END_AUCTIONS_*` environment variables (a `.env` file is read
//! first if present). Anything unset keeps its default.
//!
//! ```toml
//! [scheduler]
//! interval_secs = 30
//! stop_on_error = true
//!
//! [messages]
//! store_name = "Curiosity Shop"
//! store_owner_email = "owner@curiosity.example"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "END_AUCTIONS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scheduler: SchedulerConfig,
    pub messages: MessageSettings,
}

/// How the end-auctions task is scheduled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub interval_secs: u64,
    pub enabled: bool,
    /// Stop the recurring loop after the first failed run.
    pub stop_on_error: bool,
}

impl SchedulerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_secs: 60,
            enabled: true,
            stop_on_error: false,
        }
    }
}

/// Store identity and languages used when queuing emails.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MessageSettings {
    pub store_name: String,
    pub store_owner_email: String,
    pub default_admin_language_id: String,
    pub default_language_id: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            store_name: "Store".to_string(),
            store_owner_email: "owner@store.local".to_string(),
            default_admin_language_id: "en".to_string(),
            default_language_id: "en".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `.env`, the optional config file, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::read_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Rejects settings that would make every store-owner email undeliverable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("messages.store_owner_email", &self.messages.store_owner_email),
            ("messages.default_admin_language_id", &self.messages.default_admin_language_id),
            ("messages.default_language_id", &self.messages.default_language_id),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Applies `END_AUCTIONS_*` overrides resolved through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(value) = lookup("END_AUCTIONS_INTERVAL_SECS") {
            self.scheduler.interval_secs = parse("END_AUCTIONS_INTERVAL_SECS", &value)?;
        }
        if let Some(value) = lookup("END_AUCTIONS_ENABLED") {
            self.scheduler.enabled = parse_bool("END_AUCTIONS_ENABLED", &value)?;
        }
        if let Some(value) = lookup("END_AUCTIONS_STOP_ON_ERROR") {
            self.scheduler.stop_on_error = parse_bool("END_AUCTIONS_STOP_ON_ERROR", &value)?;
        }
        if let Some(value) = lookup("END_AUCTIONS_ADMIN_LANGUAGE") {
            self.messages.default_admin_language_id = value;
        }
        if let Some(value) = lookup("END_AUCTIONS_DEFAULT_LANGUAGE") {
            self.messages.default_language_id = value;
        }
        if let Some(value) = lookup("END_AUCTIONS_STORE_OWNER_EMAIL") {
            self.messages.store_owner_email = value;
        }
        if let Some(value) = lookup("END_AUCTIONS_STORE_NAME") {
            self.messages.store_name = value;
        }
        self.validate()
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
