//! Preset store
//!
//! Named timer durations kept in a single JSON array file.

pub mod error;
pub mod model;
pub mod store;

// Re-export main types
pub use error::{PresetError, Result};
pub use model::{PresetDuration, PresetRecord};
pub use store::Preset;
