//! minutaria - A drift-free countdown timer with named presets
//!
//! This library provides a countdown engine that recomputes the remaining
//! time from a fixed origin on every check, and a store of named durations
//! kept in a JSON file, plus the command-line front-end glue driving both.

pub mod actions;
pub mod config;
pub mod preset;
pub mod services;
pub mod state;
pub mod tasks;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use preset::{Preset, PresetDuration, PresetError, PresetRecord};
pub use state::{CountdownSession, TimerStatus};
pub use timer::Timer;
pub use utils::signals::shutdown_signal;
