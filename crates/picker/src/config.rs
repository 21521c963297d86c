//! Picker configuration.
//!
//! Loaded from JSON. Every field has a default, so an empty object (or a
//! missing file, via [`PickerConfig::load_or_default`]) yields the stock
//! behaviour.
//!
//! ```json
//! { "fallback_size": [100.0, 100.0] }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Size of the synthetic box used for entities with no pickable geometry.
pub const DEFAULT_FALLBACK_SIZE: Vec2 = Vec2::new(100.0, 100.0);

// ── Errors ──────────────────────────────────────────────────────────────

/// Errors that can occur while loading a [`PickerConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(String),
    /// The contents were not valid config JSON.
    Parse(String),
    /// A value parsed but makes no sense (e.g. a negative box size).
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "picker config read failed: {e}"),
            ConfigError::Parse(e) => write!(f, "picker config parse failed: {e}"),
            ConfigError::Invalid(e) => write!(f, "picker config invalid: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ── PickerConfig ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Width and height of the fallback box, in the entity's local units.
    pub fallback_size: Vec2,
}

impl PickerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded picker config from '{}'", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but logs the failure and falls back to the
    /// defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{e}. Using default picker config.");
            Self::default()
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let size = self.fallback_size;
        if !size.is_finite() || size.x < 0.0 || size.y < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fallback_size must be finite and non-negative, got [{}, {}]",
                size.x, size.y
            )));
        }
        Ok(())
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            fallback_size: DEFAULT_FALLBACK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = PickerConfig::from_json("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert_eq!(config.fallback_size, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn fallback_size_is_read_as_pair() {
        let config = PickerConfig::from_json(r#"{ "fallback_size": [32.0, 48.0] }"#).unwrap();
        assert_eq!(config.fallback_size, Vec2::new(32.0, 48.0));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PickerConfig::from_json("{ fallback_size").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("picker config parse failed"));
    }

    #[test]
    fn negative_size_is_rejected() {
        let err = PickerConfig::from_json(r#"{ "fallback_size": [-1.0, 10.0] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_is_io_error_and_defaults_on_request() {
        let path = std::env::temp_dir().join("picker-config-does-not-exist.json");
        assert!(matches!(PickerConfig::load(&path), Err(ConfigError::Io(_))));
        assert_eq!(PickerConfig::load_or_default(&path), PickerConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("picker-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "fallback_size": [10.0, 20.0] }"#).unwrap();
        let config = PickerConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.fallback_size, Vec2::new(10.0, 20.0));
    }
}
