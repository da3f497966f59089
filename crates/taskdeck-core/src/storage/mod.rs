//! Persistence layer: JSON documents for projects and tasks, TOML for
//! application configuration. Every document is read and written whole;
//! last writer wins.

mod config;
pub mod registry;
pub mod tasks;

pub use config::{Config, ExportConfig, PaletteConfig};
pub use registry::{Project, ProjectRegistry, OTHER_KEY, PROJECT_COLORS};
pub use tasks::TaskStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/taskdeck[-dev]/` based on TASKDECK_ENV.
///
/// Set TASKDECK_ENV=dev to use the development data directory, or
/// TASKDECK_DATA_DIR to point somewhere else entirely (used by tests).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = if let Ok(dir) = std::env::var("TASKDECK_DATA_DIR") {
        PathBuf::from(dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("TASKDECK_ENV").unwrap_or_else(|_| "production".to_string());

        if env == "dev" {
            base_dir.join("taskdeck-dev")
        } else {
            base_dir.join("taskdeck")
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
