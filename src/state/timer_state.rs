//! Timer status as tracked by the presentation layer

use std::fmt;

use chrono::TimeDelta;

use crate::timer::clock_text;

/// Lifecycle of a countdown as seen by whoever drives it.
///
/// The countdown engine itself keeps no state field; this enum lives with
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerStatus {
    #[default]
    Stopped,
    Running,
    Paused,
    Expired,
}

impl TimerStatus {
    /// Check if a countdown exists that has not expired yet
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of a countdown for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub status: TimerStatus,
    pub remaining: TimeDelta,
}

impl TimerState {
    pub fn new(status: TimerStatus, remaining: TimeDelta) -> Self {
        Self { status, remaining }
    }

    /// Remaining time as whole-second `H:MM:SS`
    pub fn remaining_text(&self) -> String {
        clock_text(self.remaining)
    }

    /// One status line, e.g. `minutaria - Remaining : 0:24:59`
    pub fn status_line(&self) -> String {
        match self.status {
            TimerStatus::Paused => format!("minutaria - Paused    : {}", self.remaining_text()),
            TimerStatus::Expired => "minutaria - Time is up !".to_string(),
            TimerStatus::Stopped | TimerStatus::Running => {
                format!("minutaria - Remaining : {}", self.remaining_text())
            }
        }
    }
}
