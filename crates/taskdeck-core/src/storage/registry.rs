//! Project registry persisted as one JSON document.
//!
//! The registry maps arbitrary string keys to display metadata. It is
//! an explicitly owned value handed to the operations that need it; no
//! process-wide state. Key `"other"` always resolves after any load so
//! dangling task references degrade to a display fallback, never an
//! error.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

use super::data_dir;
use crate::error::StorageError;

/// Key of the guaranteed fallback entry.
pub const OTHER_KEY: &str = "other";

/// Preset colors offered to newly created projects.
pub const PROJECT_COLORS: [&str; 15] = [
    "#3b82f6", "#ef4444", "#8b5cf6", "#f59e0b", "#10b981", "#ec4899", "#06b6d4", "#f97316",
    "#14b8a6", "#6366f1", "#84cc16", "#e11d48", "#0ea5e9", "#a855f7", "#22c55e",
];

/// Display metadata for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Hex color, e.g. `#3b82f6`
    pub color: String,
}

impl Project {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    fn other() -> Self {
        Self::new("Other", "#6b7280")
    }
}

/// The project map. Serializes transparently as a plain JSON object,
/// preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectRegistry {
    projects: IndexMap<String, Project>,
}

impl ProjectRegistry {
    /// The built-in seed set: four named projects plus "other".
    pub fn defaults() -> Self {
        let mut projects = IndexMap::new();
        projects.insert("HH bbyy".to_string(), Project::new("HH bbyy", "#3b82f6"));
        projects.insert(
            "EF Tracking".to_string(),
            Project::new("EF Tracking", "#ef4444"),
        );
        projects.insert("FCC 6Jets".to_string(), Project::new("FCC 6Jets", "#8b5cf6"));
        projects.insert(
            "misc-atlas".to_string(),
            Project::new("Misc. ATLAS", "#f59e0b"),
        );
        projects.insert(OTHER_KEY.to_string(), Project::other());
        Self { projects }
    }

    fn path() -> Result<PathBuf, StorageError> {
        Ok(data_dir()?.join("projects.json"))
    }

    /// Load from disk or fall back to the defaults.
    ///
    /// A missing file and an unparseable file are both treated as "no
    /// stored value". Whatever the source, `"other"` is ensured before
    /// returning.
    ///
    /// # Errors
    /// Returns an error only if the data directory cannot be prepared.
    pub fn load() -> Result<Self, StorageError> {
        let path = Self::path()?;
        let mut registry = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<IndexMap<String, Project>>(&content) {
                Ok(projects) => Self { projects },
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "stored project registry is unreadable, using defaults"
                    );
                    Self::defaults()
                }
            },
            Err(_) => Self::defaults(),
        };
        registry.ensure_other();
        Ok(registry)
    }

    /// Load from disk, returning the defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::defaults())
    }

    /// Persist the full map, overwriting the stored document.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<(), StorageError> {
        let path = Self::path()?;
        let content = serde_json::to_string_pretty(&self.projects).map_err(|e| {
            StorageError::SerializeFailed {
                what: "project registry",
                message: e.to_string(),
            }
        })?;
        std::fs::write(&path, content)
            .map_err(|source| StorageError::WriteFailed { path, source })?;
        debug!(projects = self.projects.len(), "saved project registry");
        Ok(())
    }

    fn ensure_other(&mut self) {
        if !self.projects.contains_key(OTHER_KEY) {
            self.projects
                .insert(OTHER_KEY.to_string(), Project::other());
        }
    }

    /// Look a project up by key. Callers decide the display fallback.
    pub fn get(&self, key: &str) -> Option<&Project> {
        self.projects.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Project> {
        self.projects.get_mut(key)
    }

    /// Insert or replace an entry. Callers persist with [`Self::save`].
    pub fn insert(&mut self, key: impl Into<String>, project: Project) {
        self.projects.insert(key.into(), project);
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Project)> {
        self.projects.iter()
    }
}
