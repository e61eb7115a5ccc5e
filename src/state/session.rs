//! Countdown session: the explicit state machine around a `Timer`

use chrono::TimeDelta;
use tracing::{debug, info, warn};

use super::{TimerState, TimerStatus};
use crate::{
    preset::PresetDuration,
    timer::{clock_text, Clock, SystemClock, Timer},
};

/// Drives one countdown through Stopped, Running, Paused and Expired.
///
/// Pausing is done by not polling the timer; resuming re-anchors it on the
/// leftover it had when last sampled.
#[derive(Debug)]
pub struct CountdownSession<C: Clock + Clone = SystemClock> {
    clock: C,
    initial: PresetDuration,
    timer: Option<Timer<C>>,
    status: TimerStatus,
}

impl CountdownSession<SystemClock> {
    /// Create a stopped session against the system clock
    pub fn new(initial: PresetDuration) -> Self {
        Self::with_clock(SystemClock, initial)
    }
}

impl<C: Clock + Clone> CountdownSession<C> {
    /// Create a stopped session against the given clock
    pub fn with_clock(clock: C, initial: PresetDuration) -> Self {
        Self {
            clock,
            initial,
            timer: None,
            status: TimerStatus::Stopped,
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    /// Launch a countdown from Stopped or Expired.
    ///
    /// A running or paused countdown is left untouched.
    pub fn start(&mut self) -> TimerStatus {
        if self.status.is_active() {
            warn!("Start requested while {}, ignoring", self.status);
            return self.status;
        }
        self.launch()
    }

    /// Throw away any current countdown and launch a fresh one
    pub fn relaunch(&mut self) -> TimerStatus {
        debug!("Relaunching countdown from {}", self.status);
        self.launch()
    }

    /// Pause a running countdown or resume a paused one
    pub fn toggle_pause(&mut self) -> TimerStatus {
        match (self.status, self.timer.as_mut()) {
            (TimerStatus::Running, Some(timer)) => {
                // Take a last sample so the pause freezes the current leftover
                if timer.is_expired() {
                    self.status = TimerStatus::Expired;
                } else {
                    info!("Countdown paused with {} left", clock_text(timer.remaining()));
                    self.status = TimerStatus::Paused;
                }
            }
            (TimerStatus::Paused, Some(timer)) => {
                timer.resume();
                info!("Countdown resumed with {} left", clock_text(timer.remaining()));
                self.status = TimerStatus::Running;
            }
            (status, _) => {
                debug!("Pause toggle ignored while {}", status);
            }
        }
        self.status
    }

    /// Discard the countdown
    pub fn stop(&mut self) -> TimerStatus {
        self.timer = None;
        self.status = TimerStatus::Stopped;
        info!("Countdown stopped");
        self.status
    }

    /// Sample a running countdown; anything else is left alone
    pub fn poll(&mut self) -> TimerStatus {
        if self.status == TimerStatus::Running {
            if let Some(timer) = self.timer.as_mut() {
                if timer.is_expired() {
                    info!("Countdown reached 0:00:00");
                    self.status = TimerStatus::Expired;
                }
            }
        }
        self.status
    }

    /// Remaining time as of the last sample
    pub fn remaining(&self) -> TimeDelta {
        match (self.status, &self.timer) {
            (TimerStatus::Expired, _) => TimeDelta::zero(),
            (_, Some(timer)) => timer.remaining(),
            (_, None) => self.initial.to_offset(),
        }
    }

    pub fn snapshot(&self) -> TimerState {
        TimerState::new(self.status, self.remaining())
    }

    fn launch(&mut self) -> TimerStatus {
        self.timer = Some(Timer::with_offset(self.clock.clone(), self.initial.to_offset()));
        self.status = TimerStatus::Running;
        info!("Countdown started for {}", self.initial);
        self.status
    }
}
