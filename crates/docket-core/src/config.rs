//! TOML-based application configuration.
//!
//! Stores the notification preferences the driving layer feeds into the
//! engine. Configuration lives at `~/.config/docket/config.toml`; set
//! `DOCKET_ENV=dev` to use `~/.config/docket-dev/` instead.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/docket[-dev]/` based on DOCKET_ENV.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DOCKET_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("docket-dev")
    } else {
        base_dir.join("docket")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Minutes before an event's start at which a reminder fires.
    /// Zero disables reminders.
    #[serde(default = "default_reminder_lead_minutes")]
    pub reminder_lead_minutes: u32,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Retention cap applied by `notify prune`.
    #[serde(default = "default_retention")]
    pub retention: usize,
}

fn default_reminder_lead_minutes() -> u32 {
    30
}

fn default_true() -> bool {
    true
}

fn default_retention() -> usize {
    200
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            reminder_lead_minutes: default_reminder_lead_minutes(),
            enabled: default_true(),
            retention: default_retention(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, creating the default file on first run.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if the default cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning default on error. Never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value cannot be
    /// parsed into the field's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()
    }
}

fn get_json_value_by_path<'a>(
    json: &'a serde_json::Value,
    path: &str,
) -> Option<&'a serde_json::Value> {
    path.split('.').try_fold(json, |acc, part| acc.get(part))
}

fn set_json_value_by_path(
    json: &mut serde_json::Value,
    path: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let parts: Vec<&str> = path.split('.').collect();
    let (leaf, parents) = parts
        .split_last()
        .ok_or_else(|| ConfigError::UnknownKey(path.to_string()))?;

    let mut current = json;
    for part in parents {
        current = current
            .get_mut(*part)
            .ok_or_else(|| ConfigError::UnknownKey(path.to_string()))?;
    }

    let slot = current
        .get_mut(*leaf)
        .ok_or_else(|| ConfigError::UnknownKey(path.to_string()))?;

    let parsed = match slot {
        serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse().map_err(|_| {
            ConfigError::InvalidValue {
                key: path.to_string(),
                message: format!("expected bool, got '{value}'"),
            }
        })?),
        serde_json::Value::Number(_) => {
            serde_json::Value::Number(value.parse::<i64>().map_err(|_| {
                ConfigError::InvalidValue {
                    key: path.to_string(),
                    message: format!("expected number, got '{value}'"),
                }
            })?.into())
        }
        serde_json::Value::String(_) => serde_json::Value::String(value.to_string()),
        _ => {
            return Err(ConfigError::InvalidValue {
                key: path.to_string(),
                message: "unsupported value type".to_string(),
            })
        }
    };
    *slot = parsed;
    Ok(())
}
