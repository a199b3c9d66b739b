//! # Query Configuration
//!
//! Settings shared by the query helpers: which layers overlap queries see,
//! which layers raycasts see, and how far a line-of-sight ray travels.
//!
//! Configurations load from and save to TOML or RON, picked by file
//! extension.

use serde::{Deserialize, Serialize};

use crate::physics::CollisionLayers;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Check field values after loading
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

        let config: Self = if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        config.validate()?;
        log::debug!("Loaded configuration from {path}");
        Ok(config)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A field holds a value the helpers cannot use
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for overlap and raycast helpers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Layers visible to overlap queries
    pub layer_mask: u32,
    /// Layers visible to line-of-sight raycasts
    pub raycast_mask: u32,
    /// Maximum raycast distance (infinite by default)
    pub max_ray_distance: f32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            layer_mask: CollisionLayers::ALL,
            raycast_mask: CollisionLayers::DEFAULT_RAYCAST,
            max_ray_distance: f32::INFINITY,
        }
    }
}

impl QueryConfig {
    /// Restrict overlap queries to the given layers
    #[must_use]
    pub const fn with_layer_mask(mut self, mask: u32) -> Self {
        self.layer_mask = mask;
        self
    }

    /// Restrict raycasts to the given layers
    #[must_use]
    pub const fn with_raycast_mask(mut self, mask: u32) -> Self {
        self.raycast_mask = mask;
        self
    }

    /// Cap raycast distance
    #[must_use]
    pub const fn with_max_ray_distance(mut self, distance: f32) -> Self {
        self.max_ray_distance = distance;
        self
    }
}

impl Config for QueryConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_ray_distance.is_nan() || self.max_ray_distance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_ray_distance must be non-negative, got {}",
                self.max_ray_distance
            )));
        }
        Ok(())
    }
}
