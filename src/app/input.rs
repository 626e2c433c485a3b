use crate::app::{
    action::Action,
    state::{AppMode, AppState, ContactField},
    ui,
};
use crate::components::{header::nav_hit, modals::command_palette::PaletteAreas};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

const WHEEL_STEP: u16 = 3;

/// Ctrl+K or Super(Cmd)+K, either case.
#[must_use]
pub fn is_palette_hotkey(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('k' | 'K'))
        && key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(_) | Event::Mouse(MouseEvent { kind: MouseEventKind::Down(_), .. })
            if app_state.mode == AppMode::Preloader =>
        {
            Some(Action::SkipIntro)
        }
        Event::Key(key) if is_palette_hotkey(&key) => Some(Action::TogglePalette),
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, area),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if app_state.palette.is_open {
        return match key.code {
            KeyCode::Esc => Some(Action::ClosePalette),
            KeyCode::Enter => Some(Action::PaletteSelect),
            KeyCode::Down => Some(Action::PaletteNext),
            KeyCode::Up => Some(Action::PalettePrev),
            KeyCode::Char(_) | KeyCode::Backspace => Some(Action::PaletteInput(key)),
            _ => None,
        };
    }

    if app_state.last_error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
            _ => None,
        };
    }

    match app_state.mode {
        AppMode::Preloader => Some(Action::SkipIntro),
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        AppMode::ContactForm => map_contact_key(key, app_state.contact.focused),
        AppMode::Browse => {
            if key.code == KeyCode::Esc {
                return None;
            }
            app_state.keymap.get_action(key)
        }
    }
}

fn map_contact_key(key: KeyEvent, focused: ContactField) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::LeaveContactForm),
        KeyCode::Tab => Some(Action::ContactNextField),
        KeyCode::BackTab => Some(Action::ContactPrevField),
        KeyCode::Char('s' | 'S') if ctrl => Some(Action::SubmitContact),
        KeyCode::Enter if focused.is_last() => Some(Action::SubmitContact),
        KeyCode::Enter => Some(Action::ContactNextField),
        _ => Some(Action::ContactInput(key)),
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let (column, row) = (mouse.column, mouse.row);

    if app_state.palette.is_open {
        let areas = PaletteAreas::new(area);
        return match mouse.kind {
            MouseEventKind::Moved => areas
                .row_at(column, row, &app_state.palette)
                .map(Action::PaletteHover),
            MouseEventKind::Down(MouseButton::Left) => {
                if !areas.contains(column, row) {
                    return Some(Action::ClosePalette);
                }
                areas
                    .row_at(column, row, &app_state.palette)
                    .map(Action::PaletteActivate)
            }
            MouseEventKind::ScrollDown => Some(Action::PaletteNext),
            MouseEventKind::ScrollUp => Some(Action::PalettePrev),
            _ => None,
        };
    }

    if app_state.last_error.is_some() || app_state.mode == AppMode::Help {
        return None;
    }

    let layout = ui::get_layout(area, app_state.route, app_state.mode);
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Action::ScrollDown(WHEEL_STEP)),
        MouseEventKind::ScrollUp => Some(Action::ScrollUp(WHEEL_STEP)),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(route) = nav_hit(layout.header, column, row) {
                return Some(Action::NavigateTo(route));
            }
            let in_form = layout.form.is_some_and(|form| {
                form.contains(Position::new(column, row))
            });
            match (in_form, app_state.mode) {
                (true, AppMode::Browse) => Some(Action::FocusContactForm),
                (false, AppMode::ContactForm) => Some(Action::LeaveContactForm),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Route;

    const SIZE: Size = Size {
        width: 80,
        height: 30,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn browsing() -> AppState<'static> {
        AppState::default().skip_intro()
    }

    #[test]
    fn test_hotkey_works_in_every_mode() {
        let mut state = browsing();
        for mode in [AppMode::Browse, AppMode::ContactForm, AppMode::Help] {
            state.mode = mode;
            assert_eq!(
                map_event_to_action(ctrl('k'), &state, SIZE),
                Some(Action::TogglePalette)
            );
            let cmd_k = Event::Key(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SUPER));
            assert_eq!(
                map_event_to_action(cmd_k, &state, SIZE),
                Some(Action::TogglePalette)
            );
        }
        state.palette.open();
        assert_eq!(
            map_event_to_action(ctrl('k'), &state, SIZE),
            Some(Action::TogglePalette)
        );
    }

    #[test]
    fn test_preloader_any_key_skips() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('x')), &state, SIZE),
            Some(Action::SkipIntro)
        );
        assert_eq!(
            map_event_to_action(ctrl('k'), &state, SIZE),
            Some(Action::SkipIntro)
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let state = browsing();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(release), &state, SIZE), None);
    }

    #[test]
    fn test_open_palette_owns_keys() {
        let mut state = browsing();
        state.palette.open();
        assert_eq!(
            map_event_to_action(key(KeyCode::Down), &state, SIZE),
            Some(Action::PaletteNext)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::ClosePalette)
        );
        assert!(matches!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::PaletteInput(_))
        ));
    }

    #[test]
    fn test_closed_palette_keys_keep_page_meaning() {
        let state = browsing();
        assert_eq!(
            map_event_to_action(key(KeyCode::Down), &state, SIZE),
            Some(Action::ScrollDown(1))
        );
        assert_eq!(map_event_to_action(key(KeyCode::Esc), &state, SIZE), None);
    }

    #[test]
    fn test_contact_form_keys() {
        let mut state = browsing();
        state.route = Route::Contact;
        state.mode = AppMode::ContactForm;

        assert!(matches!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::ContactInput(_))
        ));
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::ContactNextField)
        );
        assert_eq!(
            map_event_to_action(ctrl('s'), &state, SIZE),
            Some(Action::SubmitContact)
        );

        state.contact.focus(ContactField::Message);
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::SubmitContact)
        );
    }

    #[test]
    fn test_palette_mouse() {
        let mut state = browsing();
        state.palette.open();
        let areas = PaletteAreas::new(Rect::new(0, 0, SIZE.width, SIZE.height));
        let x = areas.list.x + 3;

        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::Moved, x, areas.list.y + 2), &state, SIZE),
            Some(Action::PaletteHover(2))
        );
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), x, areas.list.y + 6),
                &state,
                SIZE
            ),
            Some(Action::PaletteActivate(6))
        );
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), 0, SIZE.height - 1),
                &state,
                SIZE
            ),
            Some(Action::ClosePalette)
        );
        // Inside the modal but not on a row.
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), x, areas.query.y),
                &state,
                SIZE
            ),
            None
        );
    }

    #[test]
    fn test_header_click_navigates() {
        let state = browsing();
        let layout = ui::get_layout(
            Rect::new(0, 0, SIZE.width, SIZE.height),
            state.route,
            state.mode,
        );
        let (route, rect) = crate::components::header::nav_areas(layout.header)[1];
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), rect.x, rect.y),
                &state,
                SIZE
            ),
            Some(Action::NavigateTo(route))
        );
    }
}
