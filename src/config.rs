//! Configuration persistence
//!
//! Stores user preferences in `~/.config/paper/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PaperError, Result};

/// Preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperConfig {
    /// Font size used by the heading format preset
    #[serde(default = "default_heading_font_size")]
    pub heading_font_size: f32,

    /// Width given to newly added images, as a fraction of the page width
    #[serde(default = "default_image_width")]
    pub default_image_width: f32,
}

fn default_heading_font_size() -> f32 {
    32.0
}

fn default_image_width() -> f32 {
    1.0
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            heading_font_size: default_heading_font_size(),
            default_image_width: default_image_width(),
        }
    }
}

impl PaperConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaperError::Config(format!(
                "Failed to read config at {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            PaperError::Config(format!(
                "Failed to parse config at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| PaperError::Config("No config directory available".to_string()))?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PaperError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| PaperError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            PaperError::Config(format!(
                "Failed to write config to {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
