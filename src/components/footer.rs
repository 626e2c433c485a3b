use crate::app::state::{AppMode, AppState};
use crate::domain::models::Route;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a, 's> {
    pub state: &'a AppState<'s>,
    pub theme: &'a Theme,
}

/// Key hints for whatever currently owns the keyboard.
fn hints(state: &AppState<'_>) -> &'static [(&'static str, &'static str)] {
    if state.palette.is_open {
        return &[("↑↓", "navigate"), ("↵", "select"), ("Esc", "close")];
    }
    if state.last_error.is_some() {
        return &[("Esc", "dismiss")];
    }
    match state.mode {
        AppMode::Preloader => &[("any key", "skip")],
        AppMode::Help => &[("Esc", "close"), ("q", "quit")],
        AppMode::ContactForm => &[
            ("Tab", "next field"),
            ("Ctrl+S", "send"),
            ("Esc", "leave"),
            ("Ctrl+K", "palette"),
        ],
        AppMode::Browse if state.route == Route::Projects => &[
            ("Tab", "category"),
            ("j/k", "scroll"),
            ("1-4", "pages"),
            ("Ctrl+K", "palette"),
            ("?", "help"),
        ],
        AppMode::Browse if state.route == Route::Contact => &[
            ("i", "write a message"),
            ("j/k", "scroll"),
            ("Ctrl+K", "palette"),
            ("?", "help"),
        ],
        AppMode::Browse => &[
            ("j/k", "scroll"),
            ("1-4", "pages"),
            ("t", "theme"),
            ("Ctrl+K", "palette"),
            ("?", "help"),
        ],
    }
}

impl Widget for Footer<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let mut spans = Vec::new();
        if let Some(msg) = &state.status_message {
            spans.push(Span::styled(format!("  {msg}  "), theme.status_info));
            spans.push(Span::raw(" "));
        }

        let available_width = usize::from(area.width.saturating_sub(2));
        let mut current_width: usize = spans.iter().map(Span::width).sum();
        for (key, desc) in hints(state) {
            let key_span = Span::styled(format!(" {key} "), theme.footer_key);
            let desc_span = Span::styled(format!(" {desc}  "), theme.footer);
            let width = key_span.width() + desc_span.width();
            if current_width + width > available_width {
                break;
            }
            current_width += width;
            spans.push(key_span);
            spans.push(desc_span);
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_follow_focus() {
        let mut state = AppState::default().skip_intro();
        assert!(hints(&state).iter().any(|(k, _)| *k == "Ctrl+K"));

        state.palette.open();
        assert_eq!(hints(&state)[0].1, "navigate");

        state.palette.close();
        state.route = Route::Contact;
        assert_eq!(hints(&state)[0].0, "i");
    }
}
