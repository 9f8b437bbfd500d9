//! Error types for cursor operations
//!
//! Resolving and applying a cursor never fails. These errors cover the
//! surrounding operations: parsing cursor names, loading settings, watching
//! the settings file and replaying interaction scripts.

use thiserror::Error;

/// Errors that can occur outside the update path
#[derive(Error, Debug)]
pub enum CursorError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File watcher error
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Name is not one of the symbolic cursors
    #[error("Unknown cursor name: {0}")]
    UnknownCursor(String),

    /// Replay sample referenced an object missing from the scene
    #[error("Unknown object: {0}")]
    UnknownObject(String),

    /// Sub-instance index past the end of an instanced object
    #[error("Instance {index} out of range (count {count})")]
    InstanceOutOfRange { index: usize, count: usize },

    /// Object exists but is not instanced
    #[error("Object is not instanced: {0}")]
    NotInstanced(String),
}

/// Result type alias for cursor operations
pub type CursorResult<T> = Result<T, CursorError>;
