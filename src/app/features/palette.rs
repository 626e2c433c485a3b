use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};
use crate::domain::host::Sound;
use crossterm::event::{KeyCode, KeyModifiers};

/// The palette's CLOSED/OPEN state machine. Row-level actions that arrive
/// while the palette is closed are swallowed so they never leak into pages.
pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TogglePalette => {
            state.palette.toggle();
            UpdateResult::Handled(None)
        }
        Action::ClosePalette => {
            state.palette.close();
            UpdateResult::Handled(None)
        }
        Action::PaletteNext
        | Action::PalettePrev
        | Action::PaletteSelect
        | Action::PaletteActivate(_)
        | Action::PaletteHover(_)
        | Action::PaletteInput(_)
            if !state.palette.is_open =>
        {
            UpdateResult::Handled(None)
        }
        Action::PaletteNext => {
            state.palette.select_next();
            UpdateResult::Handled(None)
        }
        Action::PalettePrev => {
            state.palette.select_prev();
            UpdateResult::Handled(None)
        }
        Action::PaletteSelect => {
            let Some(effect) = state.palette.selected().map(|a| a.effect.clone()) else {
                // Nothing to run, stay open so the query can be fixed.
                return UpdateResult::Handled(None);
            };
            state.palette.close();
            UpdateResult::Handled(Some(Command::Invoke(effect)))
        }
        Action::PaletteActivate(index) => {
            let effect = state
                .palette
                .filtered_action(*index)
                .map(|a| a.effect.clone());
            state.palette.close();
            UpdateResult::Handled(effect.map(Command::Invoke))
        }
        Action::PaletteHover(index) => {
            let changed = state.palette.hover(*index);
            let sound = (changed && !state.muted).then_some(Command::PlaySound(Sound::Hover));
            UpdateResult::Handled(sound)
        }
        Action::PaletteInput(key) => {
            let typing = !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
            match key.code {
                KeyCode::Char(c) if typing => state.palette.push_char(c),
                KeyCode::Backspace => state.palette.pop_char(),
                _ => {}
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
