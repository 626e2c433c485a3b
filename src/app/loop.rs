use crate::app::{
    action::Action, command::Command, command_palette::Effect, input::map_event_to_action,
    persistence, reducer, state::AppState, ui,
};
use crate::domain::host::{Host, Sound};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    host: Arc<dyn Host>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, host, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    host: Arc<dyn Host>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => return Err(e.into()),
                None => {
                    tracing::debug!("input stream closed");
                    break;
                }
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, host.clone(), action_tx.clone(), !app_state.muted)?;
            }
        }
    }

    Ok(())
}

/// Runs a side effect off the render loop. Anything that needs to come back
/// into state does so as an `Action` on `tx`.
pub(crate) fn handle_command(
    command: Command,
    host: Arc<dyn Host>,
    tx: mpsc::Sender<Action>,
    sounds_on: bool,
) -> Result<()> {
    match command {
        Command::Invoke(Effect::Navigate(path)) => {
            tokio::spawn(async move {
                let _ = tx.send(Action::Navigate(path.to_string())).await;
            });
        }
        Command::Invoke(Effect::OpenUrl(url)) => {
            click(host.as_ref(), sounds_on);
            tokio::spawn(async move {
                if let Err(e) = host.open_url(url).await {
                    tracing::warn!(%url, "failed to open link: {e}");
                }
            });
        }
        Command::Invoke(Effect::CopyToClipboard {
            text,
            acknowledgment,
        }) => {
            click(host.as_ref(), sounds_on);
            tokio::spawn(async move {
                match host.copy_to_clipboard(text).await {
                    Ok(()) => {
                        let _ = tx.send(Action::ShowNotice(acknowledgment.to_string())).await;
                    }
                    Err(e) => tracing::warn!("copy failed: {e}"),
                }
            });
        }
        Command::OpenExternal(url) => {
            tokio::spawn(async move {
                if let Err(e) = host.open_url(&url).await {
                    tracing::warn!("failed to open WhatsApp link: {e}");
                    let _ = tx
                        .send(Action::ErrorOccurred(format!("Could not open WhatsApp: {e}")))
                        .await;
                }
            });
        }
        Command::PlaySound(sound) => {
            if let Err(e) = host.play_sound(sound) {
                tracing::warn!(?sound, "sound failed: {e}");
            }
        }
        Command::SaveTheme(theme) => {
            tokio::task::spawn_blocking(move || persistence::save_theme(theme));
        }
    }
    Ok(())
}

fn click(host: &dyn Host, sounds_on: bool) {
    if !sounds_on {
        return;
    }
    if let Err(e) = host.play_sound(Sound::Click) {
        tracing::warn!("sound failed: {e}");
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
