use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState},
};
use crate::domain::host::Sound;
use crate::domain::models::Route;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::NavigateTo(route) => UpdateResult::Handled(go_to(state, *route)),
        Action::Navigate(path) => match Route::resolve(path) {
            Some(route) => UpdateResult::Handled(go_to(state, route)),
            None => {
                tracing::warn!("No page for path {path:?}");
                UpdateResult::Handled(None)
            }
        },
        Action::NextPage => {
            let next = state.route.next();
            UpdateResult::Handled(go_to(state, next))
        }
        Action::PrevPage => {
            let prev = state.route.prev();
            UpdateResult::Handled(go_to(state, prev))
        }
        Action::ScrollUp(n) => {
            state.scroll = state.scroll.saturating_sub(*n);
            UpdateResult::Handled(None)
        }
        Action::ScrollDown(n) => {
            let max_scroll = state.page_metrics.max_scroll();
            state.scroll = state.scroll.saturating_add(*n).min(max_scroll);
            UpdateResult::Handled(None)
        }
        Action::ScrollTop => {
            state.scroll = 0;
            UpdateResult::Handled(None)
        }
        Action::ScrollBottom => {
            state.scroll = state.page_metrics.max_scroll();
            UpdateResult::Handled(None)
        }
        Action::NextProjectTab | Action::PrevProjectTab => {
            if state.route == Route::Projects {
                state.project_tab = if *action == Action::NextProjectTab {
                    state.project_tab.next()
                } else {
                    state.project_tab.prev()
                };
                state.scroll = 0;
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Switches page, leaving any form or overlay and starting at the top.
fn go_to(state: &mut AppState, route: Route) -> Option<Command> {
    if state.mode != AppMode::Preloader {
        state.mode = AppMode::Browse;
    }
    if state.route == route {
        state.scroll = 0;
        return None;
    }
    tracing::debug!("Navigating to {}", route.path());
    state.route = route;
    state.scroll = 0;
    (!state.muted).then_some(Command::PlaySound(Sound::Click))
}
