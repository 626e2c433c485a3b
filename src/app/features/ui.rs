use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{
        theme::CURTAIN_SWAP_AT, AppMode, AppState, CurtainState, ErrorSeverity, ErrorState,
    },
};
use crate::theme::Theme;
use std::time::{Duration, Instant};

const NOTICE_TTL: Duration = Duration::from_secs(3);

pub(crate) fn notice_deadline() -> Instant {
    Instant::now() + NOTICE_TTL
}

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => UpdateResult::Handled(tick(state)),
        Action::Resize(_, _) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::SkipIntro => {
            if state.mode == AppMode::Preloader {
                state.mode = AppMode::Browse;
            }
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Browse
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::ToggleTheme => {
            // Ignore repeats while the curtain is still up.
            if state.curtain.is_none() {
                state.curtain = Some(CurtainState::new(state.theme_mode.toggled()));
            }
            UpdateResult::Handled(None)
        }
        Action::ToggleMute => {
            state.muted = !state.muted;
            let notice = if state.muted { "Sound off" } else { "Sound on" };
            show_notice(state, notice.to_string());
            UpdateResult::Handled(None)
        }
        Action::ShowNotice(message) => {
            show_notice(state, message.clone());
            UpdateResult::Handled(None)
        }
        Action::ErrorOccurred(message) => {
            state.last_error = Some(ErrorState::new(message.clone(), ErrorSeverity::Error));
            UpdateResult::Handled(None)
        }
        Action::DismissError => {
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn show_notice(state: &mut AppState, message: String) {
    state.status_message = Some(message);
    state.status_clear_time = Some(notice_deadline());
}

fn tick(state: &mut AppState) -> Option<Command> {
    state.frame_count = state.frame_count.wrapping_add(1);

    if state.mode == AppMode::Preloader && state.preloader.tick() {
        state.mode = AppMode::Browse;
    }

    if state
        .status_clear_time
        .is_some_and(|deadline| Instant::now() >= deadline)
    {
        state.status_message = None;
        state.status_clear_time = None;
    }

    let curtain = state.curtain.as_mut()?;
    curtain.remaining = curtain.remaining.saturating_sub(1);
    let (target, remaining) = (curtain.target, curtain.remaining);
    if remaining == 0 {
        state.curtain = None;
    }
    if remaining == CURTAIN_SWAP_AT {
        tracing::info!("Switching to {} theme", target.label());
        state.theme_mode = target;
        state.theme = Theme::from_mode(target);
        return Some(Command::SaveTheme(target));
    }
    None
}
