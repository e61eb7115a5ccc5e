//! Expiry alert module
//!
//! This module contains what happens once a countdown reaches zero: the
//! on-screen announcement and the optional user command.

pub mod alert;

// Re-export main functions
pub use alert::*;
