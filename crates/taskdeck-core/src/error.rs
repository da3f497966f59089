//! Core error types for taskdeck-core.
//!
//! This module defines the error hierarchy using thiserror for better
//! error handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for taskdeck-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Calendar export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
///
/// Note that a stored document that fails to *parse* is not an error:
/// the registry and task store treat it as an absent value and fall back
/// to their defaults. These variants cover the failures that do surface.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The data directory could not be resolved or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),

    /// Writing a document failed
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a document failed
    #[error("Failed to serialize {what}: {message}")]
    SerializeFailed { what: &'static str, message: String },
}

/// Calendar-export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to export; callers surface this as a notice, not a failure
    #[error("No tasks with deadlines to export to calendar")]
    NoEligibleTasks,

    /// A deadline-bearing task carries a string no deadline format accepts
    #[error("Task '{task}' has an unparseable deadline: {value}")]
    InvalidDeadline { task: String, value: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
