//! TOML-based application configuration.
//!
//! Stores rotation tuning:
//! - Hash multiplier and recency window size
//! - Per-stream offsets
//! - Daily AI reflection allowance
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;

/// Selector tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RotationConfig {
    /// Multiplier applied to the day ordinal before the modulo.
    #[serde(default = "default_prime")]
    pub prime: i64,
    /// How many recent ids each stream remembers.
    #[serde(default = "default_window_size")]
    pub window_size: usize,
}

/// Base offset per content stream. Must be pairwise distinct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OffsetConfig {
    #[serde(default)]
    pub verse: i64,
    #[serde(default = "default_supplication_offset")]
    pub supplication: i64,
    #[serde(default = "default_remembrance_offset")]
    pub remembrance: i64,
    #[serde(default = "default_prompt_offset")]
    pub prompt: i64,
}

/// AI reflection allowance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuotaConfig {
    #[serde(default = "default_free_daily_limit")]
    pub free_daily_limit: u32,
    #[serde(default)]
    pub premium: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub offsets: OffsetConfig,
    #[serde(default)]
    pub quota: QuotaConfig,
}

fn default_prime() -> i64 {
    7919
}
fn default_window_size() -> usize {
    5
}
fn default_supplication_offset() -> i64 {
    1000
}
fn default_remembrance_offset() -> i64 {
    2000
}
fn default_prompt_offset() -> i64 {
    42
}
fn default_free_daily_limit() -> u32 {
    3
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            prime: default_prime(),
            window_size: default_window_size(),
        }
    }
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self {
            verse: 0,
            supplication: default_supplication_offset(),
            remembrance: default_remembrance_offset(),
            prompt: default_prompt_offset(),
        }
    }
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            free_daily_limit: default_free_daily_limit(),
            premium: false,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current
                    .get_mut(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                continue;
            }

            let obj = current
                .as_object_mut()
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
            let existing = obj
                .get(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                ),
                serde_json::Value::Number(_) => serde_json::Value::Number(
                    value
                        .parse::<i64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as integer")))?
                        .into(),
                ),
                serde_json::Value::Object(_) => {
                    return Err(invalid("cannot replace a whole section".into()));
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// fails validation, or if the default config cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults there if it is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| {
                    ConfigError::LoadFailed {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    }
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("using default configuration: {e}");
                Self::default()
            }
        }
    }

    /// Reject values the selector cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.rotation.prime <= 0 {
            return Err(invalid("rotation.prime", "must be positive"));
        }
        if self.rotation.window_size == 0 {
            return Err(invalid("rotation.window_size", "must be at least 1"));
        }
        if self.offsets.prompt == 0 {
            return Err(invalid("offsets.prompt", "must be non-zero"));
        }

        let o = &self.offsets;
        let named = [
            ("offsets.verse", o.verse),
            ("offsets.supplication", o.supplication),
            ("offsets.remembrance", o.remembrance),
            ("offsets.prompt", o.prompt),
        ];
        for (i, (key, value)) in named.iter().enumerate() {
            if named[..i].iter().any(|(_, other)| other == value) {
                return Err(invalid(key, "must differ from the other stream offsets"));
            }
        }
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without persisting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting configuration is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| {
            ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            }
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_default_values() {
        let cfg = Config::default();
        assert_eq!(cfg.rotation.prime, 7919);
        assert_eq!(cfg.rotation.window_size, 5);
        assert_eq!(cfg.offsets.verse, 0);
        assert_eq!(cfg.offsets.supplication, 1000);
        assert_eq!(cfg.offsets.remembrance, 2000);
        assert_eq!(cfg.offsets.prompt, 42);
        assert_eq!(cfg.quota.free_daily_limit, 3);
        assert!(!cfg.quota.premium);
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("[rotation]\nwindow_size = 7\n").unwrap();
        assert_eq!(cfg.rotation.window_size, 7);
        assert_eq!(cfg.rotation.prime, 7919);
        assert_eq!(cfg.offsets.prompt, 42);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("rotation.prime").as_deref(), Some("7919"));
        assert_eq!(cfg.get("quota.premium").as_deref(), Some("false"));
        assert!(cfg.get("rotation.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_nested_values() {
        let mut cfg = Config::default();
        cfg.set("rotation.window_size", "8").unwrap();
        cfg.set("quota.premium", "true").unwrap();
        assert_eq!(cfg.rotation.window_size, 8);
        assert!(cfg.quota.premium);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        let err = cfg.set("rotation.nonexistent", "1").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(_)));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(cfg.set("quota.premium", "not_a_bool").is_err());
        assert!(cfg.set("rotation.prime", "abc").is_err());
        assert!(cfg.set("rotation", "1").is_err());
    }

    #[test]
    fn set_rejects_invalid_config() {
        let mut cfg = Config::default();
        assert!(cfg.set("rotation.window_size", "0").is_err());
        assert!(cfg.set("offsets.prompt", "0").is_err());
        assert!(cfg.set("offsets.supplication", "0").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_writes_defaults_then_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let mut cfg = cfg;
        cfg.set("quota.free_daily_limit", "5").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().quota.free_daily_limit, 5);
    }

    #[test]
    fn load_from_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "rotation = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
