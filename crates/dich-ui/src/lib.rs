//! Line-oriented terminal front end: commands in on stdin, updates out on stdout

use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use dich_config::ui::UiConfig;
use dich_types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

mod bridge;
mod commands;
mod events;
mod state;

pub use bridge::InputBridge;
pub use commands::{Command, HELP, parse};
pub use events::render;
pub use state::UiState;

const STDIN_CAPACITY: usize = 16;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<UiEvent>,
    config: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout);
    let mut state = UiState::new(interactive, config.show_prompt);
    let mut stdout = std::io::stdout();

    let (bridge, lines_rx) = InputBridge::new(STDIN_CAPACITY);
    bridge.spawn_stdin()?;
    let mut stdin_open = true;

    loop {
        tokio::select! {
            biased;

            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::info!("[UI] App channel closed");
                    break;
                };
                if render(&event, &mut state, &mut stdout, Instant::now())? {
                    state.write_prompt(&mut stdout, Instant::now())?;
                }
            }

            line = lines_rx.recv(), if stdin_open => {
                let Ok(line) = line else {
                    // EOF: let pending work finish, then the app stops us
                    tracing::debug!("[UI] Stdin closed, requesting quit");
                    stdin_open = false;
                    send(&ui_to_app_tx, UiEvent::Quit).await?;
                    continue;
                };
                handle_line(&line, &mut state, &ui_to_app_tx, &mut stdout).await?;
            }

            _ = cancel.cancelled() => {
                while let Ok(Some(event)) = app_to_ui_rx.try_recv() {
                    render(&event, &mut state, &mut stdout, Instant::now())?;
                }
                tracing::info!("[UI] Cancelled");
                break;
            }
        }
    }

    if state.show_prompt {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

async fn handle_line(
    line: &str,
    state: &mut UiState,
    ui_to_app_tx: &AsyncSender<UiEvent>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match parse(line) {
        Command::Send(events) => {
            for event in events {
                if event == UiEvent::ListLanguages {
                    state.options_requested = true;
                }
                send(ui_to_app_tx, event).await?;
            }
        }
        Command::Help => {
            writeln!(out, "{HELP}")?;
            state.write_prompt(out, Instant::now())?;
        }
        Command::Invalid(message) => {
            writeln!(out, "{message}")?;
            state.write_prompt(out, Instant::now())?;
        }
    }
    Ok(())
}

async fn send(ui_to_app_tx: &AsyncSender<UiEvent>, event: UiEvent) -> anyhow::Result<()> {
    tracing::debug!("[UI] Sending {event:?}");
    ui_to_app_tx
        .send(event)
        .await
        .context("app event loop is gone")
}
