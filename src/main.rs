//! minutaria - A countdown timer with named presets
//!
//! This is the main entry point for the minutaria command-line application.

use std::io::{self, Write};
use tokio::{io::BufReader, sync::mpsc};
use tracing::info;

use minutaria::{
    actions::handle_preset_action,
    config::{Config, Invocation},
    preset::PresetDuration,
    services::{alert_until, FLASH_PERIOD, GONG_ROUNDS},
    state::CountdownSession,
    tasks::{command_reader_task, run_countdown, Command, CountdownOutcome},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    if config.show_version {
        println!("minutaria {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Logs go to stderr so they never tear the countdown line
    tracing_subscriber::fmt()
        .with_env_filter(format!("minutaria={}", config.log_level()))
        .with_writer(io::stderr)
        .init();

    info!("Starting minutaria v{}", env!("CARGO_PKG_VERSION"));
    info!("Preset store: {}", config.preset_file.display());

    let timer = match config.resolve() {
        Ok(Invocation::RunTimer(duration)) => duration,
        Ok(Invocation::Preset(action)) => {
            let response = handle_preset_action(&action, &config.preset_file);
            response.print(&mut io::stdout(), &mut io::stderr())?;
            match response.timer {
                Some(duration) => duration,
                None => std::process::exit(response.exit_code()),
            }
        }
        Err(e) => {
            eprintln!("minutaria: error: {}", e);
            std::process::exit(2);
        }
    };

    let code = run_timer(timer, &config).await?;

    // A pending stdin read would otherwise hold the runtime open
    std::process::exit(code);
}

/// Run one countdown to completion and announce it
async fn run_timer(duration: PresetDuration, config: &Config) -> anyhow::Result<i32> {
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();

    let stdin_tx = command_tx.clone();
    tokio::spawn(async move {
        command_reader_task(BufReader::new(tokio::io::stdin()), stdin_tx).await;
    });

    let quit_on_signal = tokio::spawn(async move {
        shutdown_signal().await;
        let _ = command_tx.send(Command::Quit);
    });

    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "minutaria - Timing : {}   (p: pause/resume, r: relaunch, q: quit)",
        duration
    )?;

    let mut session = CountdownSession::new(duration);
    let outcome = run_countdown(&mut session, &mut command_rx, &mut stdout, config.refresh_interval()).await?;
    // Nobody reads the channel any more; signals now cut the alert short
    quit_on_signal.abort();

    match outcome {
        CountdownOutcome::Expired => {
            let on_expiry = config.on_expiry.as_deref();
            if !alert_until(&mut stdout, GONG_ROUNDS, FLASH_PERIOD, on_expiry, shutdown_signal()).await? {
                writeln!(stdout)?;
            }
        }
        CountdownOutcome::Quit => {
            info!("Countdown abandoned by user");
        }
    }

    Ok(0)
}
