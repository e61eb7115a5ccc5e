//! Countdown polling loop

use std::{
    io::{self, Write},
    time::Duration,
};

use tokio::{
    sync::mpsc::UnboundedReceiver,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info};

use super::input::Command;
use crate::{
    state::{CountdownSession, TimerState, TimerStatus},
    timer::Clock,
};

/// Why the countdown loop returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    Expired,
    Quit,
}

/// Poll `session` every `refresh` and render it on one line of `out` until it
/// expires or a [`Command::Quit`] arrives.
///
/// A stopped session is started first. While paused the timer is not polled
/// at all.
pub async fn run_countdown<C, W>(
    session: &mut CountdownSession<C>,
    commands: &mut UnboundedReceiver<Command>,
    out: &mut W,
    refresh: Duration,
) -> io::Result<CountdownOutcome>
where
    C: Clock + Clone,
    W: Write,
{
    if !session.status().is_active() {
        session.start();
    }
    info!("Starting countdown loop, refresh every {:?}", refresh);

    let mut ticker = interval(refresh);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut commands_open = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let status = session.poll();
                render(out, &session.snapshot())?;

                if status == TimerStatus::Expired {
                    info!("Countdown expired");
                    return Ok(CountdownOutcome::Expired);
                }
            }

            command = commands.recv(), if commands_open => {
                match command {
                    Some(Command::TogglePause) => {
                        session.toggle_pause();
                        render(out, &session.snapshot())?;
                    }
                    Some(Command::Relaunch) => {
                        session.relaunch();
                        render(out, &session.snapshot())?;
                    }
                    Some(Command::Quit) => {
                        info!("Countdown quit with {} left", session.snapshot().remaining_text());
                        writeln!(out)?;
                        return Ok(CountdownOutcome::Quit);
                    }
                    None => {
                        debug!("Command channel closed, countdown continues");
                        commands_open = false;
                    }
                }
            }
        }
    }
}

fn render<W: Write>(out: &mut W, state: &TimerState) -> io::Result<()> {
    // Trailing spaces wipe a longer previous line
    write!(out, "{:<40}\r", state.status_line())?;
    out.flush()
}
