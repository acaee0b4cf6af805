//! User configuration management
//!
//! App preferences (theme, window geometry, panel visibility) stored as JSON
//! under the platform config directory. Workflow definitions are not
//! persisted here; that belongs to the host system.

use crate::theme::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised when saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem failure while writing the config file
    #[error("failed to write config: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration could not be serialized
    #[error("failed to encode config: {0}")]
    Encode(#[from] serde_json::Error),
}

/// User configuration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// UI theme settings
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Window width in pixels
    #[serde(default)]
    pub window_width: Option<u32>,
    /// Window height in pixels
    #[serde(default)]
    pub window_height: Option<u32>,
    /// Show the node settings side panel
    #[serde(default = "default_true")]
    pub show_settings: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            window_width: None,
            window_height: None,
            show_settings: true,
        }
    }
}

impl UserConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("FlowDeck");
            p.push("config.json");
            p
        })
    }

    /// Load configuration from disk, falling back to defaults.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load configuration from an explicit path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        fs::read_to_string(path)
            .ok()
            .and_then(|content| match serde_json::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("ignoring malformed config {:?}: {}", path, e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Save configuration to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
