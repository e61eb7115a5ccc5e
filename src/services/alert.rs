//! Audible and visual expiry alert

use std::{
    future::Future,
    io::{self, Write},
    time::Duration,
};

use anyhow::{bail, Context};
use tokio::{process::Command, time::sleep};
use tracing::{debug, error, info};

/// Number of gongs announced at expiry
pub const GONG_ROUNDS: usize = 3;

/// Pause between two gongs
pub const FLASH_PERIOD: Duration = Duration::from_millis(1000);

const GONG: &str = "GONG ! ";
const BELL: char = '\x07';

/// Announce expiry: one more `GONG !` per round, each with a terminal bell
pub async fn announce_expiry<W: Write>(out: &mut W, rounds: usize, period: Duration) -> io::Result<()> {
    for round in 1..=rounds {
        write!(out, "\r{}{}", GONG.repeat(round), BELL)?;
        out.flush()?;
        if round < rounds {
            sleep(period).await;
        }
    }
    // Pad over whatever the countdown line left behind
    writeln!(out, "{}", " ".repeat(17))?;
    out.flush()
}

/// Announce expiry, then run `on_expiry` if given, unless `cancel` resolves
/// first.
///
/// Returns `false` when the alert was cut short. A failing expiry command is
/// logged and does not count as an error.
pub async fn alert_until<W, F>(
    out: &mut W,
    rounds: usize,
    period: Duration,
    on_expiry: Option<&str>,
    cancel: F,
) -> io::Result<bool>
where
    W: Write,
    F: Future<Output = ()>,
{
    let alert = async {
        announce_expiry(out, rounds, period).await?;
        if let Some(command) = on_expiry {
            if let Err(e) = run_expiry_command(command).await {
                error!("{:#}", e);
            }
        }
        Ok::<_, io::Error>(())
    };

    tokio::select! {
        result = alert => result.map(|()| true),
        _ = cancel => {
            info!("Expiry alert interrupted");
            Ok(false)
        }
    }
}

/// Run the user's expiry command through the platform shell
pub async fn run_expiry_command(command: &str) -> anyhow::Result<()> {
    info!("Running expiry command: {}", command);

    let (shell, flag) = if cfg!(windows) { ("cmd", "/C") } else { ("sh", "-c") };
    let output = Command::new(shell)
        .args([flag, command])
        .kill_on_drop(true)
        .output()
        .await
        .with_context(|| format!("Failed to execute expiry command `{}`", command))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("Expiry command `{}` failed ({}): {}", command, output.status, stderr.trim());
    }

    debug!("Expiry command finished");
    Ok(())
}
