//! Range configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default radius of the marker drawn for each shot, in pixels.
pub const DEFAULT_MARKER_RADIUS: f32 = 2.0;

/// Error type for loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings that shape how shots are recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Radius of shot markers.
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f32,
    /// Enables click-to-shoot on the canvas (Shift = red, Ctrl = green).
    #[serde(default)]
    pub debug_mode: bool,
}

fn default_marker_radius() -> f32 {
    DEFAULT_MARKER_RADIUS
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            marker_radius: DEFAULT_MARKER_RADIUS,
            debug_mode: false,
        }
    }
}

impl RangeConfig {
    /// Loads a configuration from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the configuration to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Loads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Loads a configuration file, falling back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("[config] {}: {}, using defaults", path.display(), err);
                Self::default()
            }
        }
    }
}
