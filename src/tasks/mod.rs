//! Background tasks module
//!
//! This module contains the countdown polling loop and the tasks feeding it
//! user commands.

pub mod countdown;
pub mod input;

// Re-export main functions
pub use countdown::{run_countdown, CountdownOutcome};
pub use input::{command_reader_task, Command};
