use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type Feature = fn(&mut AppState, &Action) -> UpdateResult;

/// Offered to each feature in turn; the first to claim the action wins.
const FEATURES: &[Feature] = &[
    features::palette::update,
    features::navigation::update,
    features::contact::update,
    features::ui::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    tracing::debug!("Unhandled action {action:?}");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command_palette::Effect;
    use crate::app::state::AppMode;
    use crate::domain::models::Route;

    #[test]
    fn test_palette_navigation_round_trip() {
        let mut state = AppState::default().skip_intro();
        update(&mut state, Action::TogglePalette);
        update(&mut state, Action::PaletteNext);
        update(&mut state, Action::PaletteNext);

        let command = update(&mut state, Action::PaletteSelect);
        assert_eq!(command, Some(Command::Invoke(Effect::Navigate("/projects"))));
        assert!(!state.palette.is_open);

        // The runtime feeds the path back in.
        update(&mut state, Action::Navigate("/projects".to_string()));
        assert_eq!(state.route, Route::Projects);
        assert_eq!(state.mode, AppMode::Browse);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::Quit), None);
        assert!(state.should_quit);
    }
}
