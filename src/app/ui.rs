use crate::app::state::{AppMode, AppState, PageMetrics};
use crate::components::footer::Footer;
use crate::components::header::{Header, HEADER_HEIGHT};
use crate::components::modals::ModalManager;
use crate::components::pages::{self, contact::ContactForm, contact::FORM_HEIGHT};
use crate::components::preloader::Preloader;
use crate::domain::models::Route;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

/// Smallest page viewport kept above the contact form.
const MIN_PAGE_HEIGHT: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub page: Rect,
    pub form: Option<Rect>,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, route: Route, mode: AppMode) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header + progress
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Footer
        ])
        .split(area);
    let body = main[1];

    let (page, form) = if route != Route::Contact {
        (body, None)
    } else if body.height >= FORM_HEIGHT + MIN_PAGE_HEIGHT {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(FORM_HEIGHT)])
            .split(body);
        (split[0], Some(split[1]))
    } else if mode == AppMode::ContactForm {
        (Rect::new(body.x, body.y, body.width, 0), Some(body))
    } else {
        (body, None)
    };

    AppLayout {
        header: main[0],
        page,
        form,
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = app_state.theme.clone();

    f.render_widget(Block::default().style(theme.base), area);

    if app_state.mode == AppMode::Preloader {
        f.render_widget(
            Preloader {
                state: &app_state.preloader,
                theme: &theme,
                frame: app_state.frame_count,
            },
            area,
        );
        return;
    }

    let layout = get_layout(area, app_state.route, app_state.mode);

    // --- Page ---
    let lines = pages::page_lines(app_state, &theme, layout.page.width);
    app_state.page_metrics = PageMetrics {
        content_height: u16::try_from(lines.len()).unwrap_or(u16::MAX),
        viewport_height: layout.page.height,
    };
    // Resizes can shrink the page under the current offset.
    app_state.scroll = app_state.scroll.min(app_state.page_metrics.max_scroll());
    f.render_widget(
        Paragraph::new(lines).scroll((app_state.scroll, 0)),
        layout.page,
    );

    if let Some(form_area) = layout.form {
        f.render_widget(
            ContactForm {
                form: &app_state.contact,
                theme: &theme,
                active: app_state.mode == AppMode::ContactForm,
            },
            form_area,
        );
    }

    // --- Chrome ---
    f.render_widget(
        Header {
            state: app_state,
            theme: &theme,
        },
        layout.header,
    );
    f.render_widget(
        Footer {
            state: app_state,
            theme: &theme,
        },
        layout.footer,
    );

    // --- Overlays ---
    f.render_widget(
        ModalManager {
            theme: &theme,
            app_state,
        },
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draw_records_page_metrics() {
        let mut state = AppState::default().skip_intro();
        let screen = render(&mut state, 100, 30);
        assert!(screen.contains("Koustav.dev"));
        assert!(screen.contains("Koustav Pan"));
        assert_eq!(state.page_metrics.viewport_height, 27);
        assert!(state.page_metrics.content_height > 27);
    }

    #[test]
    fn test_scroll_clamped_after_resize() {
        let mut state = AppState::default().skip_intro();
        state.route = Route::About;
        state.scroll = u16::MAX;
        render(&mut state, 80, 24);
        assert_eq!(state.scroll, state.page_metrics.max_scroll());
    }

    #[test]
    fn test_contact_layout_reserves_form() {
        let layout = get_layout(Rect::new(0, 0, 80, 40), Route::Contact, AppMode::Browse);
        assert_eq!(layout.form.map(|r| r.height), Some(FORM_HEIGHT));

        let cramped = get_layout(Rect::new(0, 0, 80, 12), Route::Contact, AppMode::Browse);
        assert_eq!(cramped.form, None);
        let typing = get_layout(Rect::new(0, 0, 80, 12), Route::Contact, AppMode::ContactForm);
        assert_eq!(typing.form.map(|r| r.height), Some(9));
    }

    #[test]
    fn test_palette_and_preloader_render() {
        let mut state = AppState::default();
        assert!(render(&mut state, 80, 24).contains("2026 KOUSTAV PAN"));

        let mut state = AppState::default().skip_intro();
        state.palette.open();
        let screen = render(&mut state, 80, 24);
        assert!(screen.contains("Copy Email"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        for (w, h) in [(1, 1), (5, 3), (20, 4)] {
            let mut state = AppState::default().skip_intro();
            state.palette.open();
            state.route = Route::Contact;
            state.mode = AppMode::ContactForm;
            render(&mut state, w, h);
        }
    }
}
