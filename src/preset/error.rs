//! Preset store errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the preset store.
#[derive(Error, Debug)]
pub enum PresetError {
    /// `add` or `rename` would collide with an existing record.
    #[error("Preset already exists: {0}")]
    AlreadyExists(String),

    /// No record carries the requested name.
    #[error("Preset not found: {0}")]
    NotFound(String),

    /// `get_all` on a store with zero records.
    #[error("No existing preset")]
    EmptyStore,

    /// The store file could not be read or written.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file is not a JSON array of preset records.
    #[error("Malformed preset file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the preset module.
pub type Result<T> = std::result::Result<T, PresetError>;
