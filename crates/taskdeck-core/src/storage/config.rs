//! TOML-based application configuration.
//!
//! Stores user preferences for:
//! - Export output directory
//! - The project color palette offered to new projects
//!
//! Configuration is stored at `~/.config/taskdeck/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use super::registry::PROJECT_COLORS;
use crate::error::StorageError;

/// Calendar-export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory `.ics` exports are written to.
    #[serde(default = "default_export_directory")]
    pub directory: String,
}

/// Palette configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Colors cycled through when creating projects without an explicit
    /// color.
    #[serde(default = "default_palette")]
    pub colors: Vec<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/taskdeck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

// Default functions
fn default_export_directory() -> String {
    ".".to_string()
}
fn default_palette() -> Vec<String> {
    PROJECT_COLORS.iter().map(|c| c.to_string()).collect()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_palette(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: ExportConfig::default(),
            palette: PaletteConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, StorageError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, StorageError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| StorageError::SerializeFailed {
                    what: "config",
                    message: e.to_string(),
                })
            }
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
    pub fn save(&self) -> Result<(), StorageError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| StorageError::SerializeFailed {
            what: "config",
            message: e.to_string(),
        })?;
        std::fs::write(&path, content)
            .map_err(|source| StorageError::WriteFailed { path, source })?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Palette color for the `index`-th project, cycling.
    pub fn next_color(&self, index: usize) -> &str {
        if self.palette.colors.is_empty() {
            return "#6b7280";
        }
        &self.palette.colors[index % self.palette.colors.len()]
    }
}
