//! User commands read from the terminal

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc::UnboundedSender,
};
use tracing::{debug, info, warn};

/// A request from the user while a countdown runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Relaunch,
    Quit,
}

impl Command {
    /// Map one input line (`p`, `r` or `q`, any case) to a command
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "p" | "pause" => Some(Self::TogglePause),
            "r" | "relaunch" => Some(Self::Relaunch),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Forward commands typed on `reader` until it closes or nobody listens
pub async fn command_reader_task<R>(reader: R, tx: UnboundedSender<Command>)
where
    R: AsyncBufRead + Unpin,
{
    info!("Starting command reader task");

    let mut lines = reader.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match Command::parse(&line) {
                Some(command) => {
                    debug!("Command received: {:?}", command);
                    if tx.send(command).is_err() {
                        break;
                    }
                }
                None => debug!("Ignoring input {:?}", line),
            },
            Ok(None) => {
                debug!("Command input closed");
                break;
            }
            Err(e) => {
                warn!("Failed to read command input: {}", e);
                break;
            }
        }
    }
}
