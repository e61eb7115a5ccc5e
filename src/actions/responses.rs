//! Action response structures

use std::io::{self, Write};

use crate::preset::PresetDuration;

/// How a preset action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    /// The action completed; the process can exit
    Done,
    /// The action resolved a timer that should run next
    Run,
    /// The action was refused or failed
    Failed,
}

/// Outcome of one preset action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub status: ActionStatus,
    pub message: String,
    pub timer: Option<PresetDuration>,
}

impl ActionResponse {
    /// Create a completed response
    pub fn done(message: String) -> Self {
        Self {
            status: ActionStatus::Done,
            message,
            timer: None,
        }
    }

    /// Create a response carrying a timer to launch
    pub fn run(message: String, timer: PresetDuration) -> Self {
        Self {
            status: ActionStatus::Run,
            message,
            timer: Some(timer),
        }
    }

    /// Create a failure response
    pub fn failed(message: String) -> Self {
        Self {
            status: ActionStatus::Failed,
            message,
            timer: None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == ActionStatus::Failed
    }

    /// Process exit status for this response
    pub fn exit_code(&self) -> i32 {
        if self.is_failure() { 1 } else { 0 }
    }

    /// Write the message to `out`, or to `err` for failures
    pub fn print<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        if self.is_failure() {
            writeln!(err, "{}", self.message)
        } else {
            writeln!(out, "{}", self.message)
        }
    }
}
