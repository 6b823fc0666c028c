//! TOML-based application configuration.
//!
//! Stores per-habit timer settings:
//! - Sitting: cap before the stand-up reminder
//! - Eating: cap plus the minimum-meal-length pace threshold
//! - Notification preferences
//!
//! Configuration is stored at `~/.config/habitclock/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::habit::{HabitKind, HabitProfile};

/// Sitting tracker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SittingConfig {
    #[serde(default = "default_sitting_max_secs")]
    pub max_secs: u32,
}

/// Eating tracker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EatingConfig {
    #[serde(default = "default_eating_max_secs")]
    pub max_secs: u32,
    /// Minimum wall-clock minutes a meal should last.
    #[serde(default = "default_pace_threshold_min")]
    pub pace_threshold_min: u32,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitclock/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sitting: SittingConfig,
    #[serde(default)]
    pub eating: EatingConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// Default functions
fn default_sitting_max_secs() -> u32 {
    60
}
fn default_eating_max_secs() -> u32 {
    20 * 60
}
fn default_pace_threshold_min() -> u32 {
    20
}
fn default_true() -> bool {
    true
}

impl Default for SittingConfig {
    fn default() -> Self {
        Self {
            max_secs: default_sitting_max_secs(),
        }
    }
}

impl Default for EatingConfig {
    fn default() -> Self {
        Self {
            max_secs: default_eating_max_secs(),
            pace_threshold_min: default_pace_threshold_min(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sitting: SittingConfig::default(),
            eating: EatingConfig::default(),
            notifications: NotificationsConfig::default(),
        }
    }
}

/// Returns `~/.config/habitclock[-dev]/` based on HABITCLOCK_ENV, creating
/// it if needed. HABITCLOCK_CONFIG_DIR overrides the location entirely.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let dir = if let Ok(dir) = std::env::var("HABITCLOCK_CONFIG_DIR") {
        PathBuf::from(dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("HABITCLOCK_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("habitclock-dev")
        } else {
            base_dir.join("habitclock")
        }
    };
    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DirFailed(e.to_string()))?;
    Ok(dir)
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
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

    /// Persist to disk.
    ///
    /// # Errors
    ///
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

    /// Build a habit profile with this config's caps and thresholds applied
    /// over the built-in labels and advisory text.
    pub fn profile(&self, kind: HabitKind) -> HabitProfile {
        let mut profile = HabitProfile::for_kind(kind);
        match kind {
            HabitKind::Sitting => {
                profile.max_secs = self.sitting.max_secs;
            }
            HabitKind::Eating => {
                profile.max_secs = self.eating.max_secs;
                profile.pace_threshold_min = Some(self.eating.pace_threshold_min);
            }
        }
        profile
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, preserving the existing
    /// value's type.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys or values that do not parse as the
    /// key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
                key: key.into(),
                message: e.to_string(),
            })?;

        let mut current = &mut json;
        let mut parts = key.split('.').peekable();
        while let Some(part) = parts.next() {
            let obj = current
                .as_object_mut()
                .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;
            if parts.peek().is_none() {
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;
                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                            key: key.into(),
                            message: e.to_string(),
                        })?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|e| ConfigError::InvalidValue {
                                key: key.into(),
                                message: e.to_string(),
                            })?
                            .into(),
                    ),
                    _ => serde_json::Value::String(value.into()),
                };
                obj.insert(part.to_string(), new_value);
                break;
            }
            current = obj
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;
        }

        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.into(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.sitting.max_secs, 60);
        assert_eq!(parsed.eating.max_secs, 1200);
        assert_eq!(parsed.eating.pace_threshold_min, 20);
        assert!(parsed.notifications.enabled);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("[sitting]\nmax_secs = 90\n").unwrap();
        assert_eq!(parsed.sitting.max_secs, 90);
        assert_eq!(parsed.eating.max_secs, 1200);
    }

    #[test]
    fn get_by_dot_path() {
        let cfg = Config::default();
        assert_eq!(cfg.get("eating.max_secs").unwrap(), "1200");
        assert_eq!(cfg.get("notifications.enabled").unwrap(), "true");
        assert!(cfg.get("eating.unknown").is_none());
    }

    #[test]
    fn set_by_dot_path_preserves_type() {
        let mut cfg = Config::default();
        cfg.set("sitting.max_secs", "1800").unwrap();
        assert_eq!(cfg.sitting.max_secs, 1800);

        cfg.set("notifications.enabled", "false").unwrap();
        assert!(!cfg.notifications.enabled);

        assert!(cfg.set("sitting.max_secs", "soon").is_err());
        assert!(cfg.set("nope.nope", "1").is_err());
    }

    #[test]
    fn profile_applies_configured_caps() {
        let mut cfg = Config::default();
        cfg.eating.max_secs = 1800;
        cfg.eating.pace_threshold_min = 30;
        let p = cfg.profile(HabitKind::Eating);
        assert_eq!(p.max_secs, 1800);
        assert_eq!(p.pace_threshold_min, Some(30));
        // Labels and messages come from the built-in profile.
        assert_eq!(p.pace_message, "You need to eat slower!");
    }

    #[test]
    fn save_and_load_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("HABITCLOCK_CONFIG_DIR", dir.path());

        let mut cfg = Config::default();
        cfg.sitting.max_secs = 300;
        cfg.save().unwrap();

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.sitting.max_secs, 300);

        std::env::remove_var("HABITCLOCK_CONFIG_DIR");
    }
}
