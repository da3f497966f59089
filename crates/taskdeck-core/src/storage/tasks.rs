//! Task list persisted as one JSON document.
//!
//! Same key-value discipline as the project registry: the whole array
//! is read at load and overwritten on save; an unreadable document is
//! treated as empty rather than an error.

use std::path::PathBuf;
use tracing::{debug, warn};

use super::data_dir;
use crate::error::StorageError;
use crate::task::Task;

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    fn path() -> Result<PathBuf, StorageError> {
        Ok(data_dir()?.join("tasks.json"))
    }

    /// Load from disk; a missing or unparseable document yields an
    /// empty store.
    ///
    /// # Errors
    /// Returns an error only if the data directory cannot be prepared.
    pub fn load() -> Result<Self, StorageError> {
        let path = Self::path()?;
        let tasks = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<Task>>(&content) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "stored task list is unreadable, starting empty"
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Ok(Self { tasks })
    }

    /// Load from disk, returning an empty store on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist the full list, overwriting the stored document.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<(), StorageError> {
        let path = Self::path()?;
        let content =
            serde_json::to_string_pretty(&self.tasks).map_err(|e| StorageError::SerializeFailed {
                what: "task list",
                message: e.to_string(),
            })?;
        std::fs::write(&path, content)
            .map_err(|source| StorageError::WriteFailed { path, source })?;
        debug!(tasks = self.tasks.len(), "saved task list");
        Ok(())
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove a task by id, returning it when found.
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
