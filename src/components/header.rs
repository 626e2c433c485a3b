use crate::app::state::AppState;
use crate::domain::content::PROFILE;
use crate::domain::models::Route;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Widget,
};

pub const HEADER_HEIGHT: u16 = 2;
const PALETTE_HINT: &str = " CTRL K ";

fn logo_text() -> String {
    format!(" {} ", PROFILE.handle)
}

/// Clickable nav tab positions on the first header row.
#[must_use]
pub fn nav_areas(area: Rect) -> Vec<(Route, Rect)> {
    let mut x = area.x + logo_text().chars().count() as u16 + 2;
    let mut tabs = Vec::new();
    for &route in Route::all() {
        let width = route.label().len() as u16 + 2;
        if x + width > area.right() {
            break;
        }
        tabs.push((route, Rect::new(x, area.y, width, 1)));
        x += width + 1;
    }
    tabs
}

#[must_use]
pub fn nav_hit(area: Rect, column: u16, row: u16) -> Option<Route> {
    nav_areas(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
        .map(|(route, _)| route)
}

pub struct Header<'a, 's> {
    pub state: &'a AppState<'s>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, self.theme.header);

        buf.set_string(area.x, area.y, logo_text(), self.theme.header_logo);

        for (route, rect) in nav_areas(area) {
            let style = if route == self.state.route {
                self.theme.nav_active
            } else {
                self.theme.nav_item
            };
            buf.set_string(rect.x, rect.y, format!(" {} ", route.label()), style);
        }

        let mut right = vec![
            Span::styled(self.state.theme_mode.label(), self.theme.text_muted),
            Span::raw(" "),
        ];
        if self.state.muted {
            right.push(Span::styled("MUTED", self.theme.status_maintenance));
            right.push(Span::raw(" "));
        }
        right.push(Span::styled(PALETTE_HINT, self.theme.footer_key));
        let right = Line::from(right);
        let width = right.width() as u16;
        if area.width > width + 40 {
            buf.set_line(area.right() - width, area.y, &right, width);
        }

        if area.height > 1 {
            render_progress(
                buf,
                Rect::new(area.x, area.y + 1, area.width, 1),
                self.state.scroll_progress(),
                self.theme,
            );
        }
    }
}

fn render_progress(buf: &mut Buffer, area: Rect, progress: f64, theme: &Theme) {
    let filled = ((f64::from(area.width) * progress.clamp(0.0, 1.0)).round()) as u16;
    for x in 0..area.width {
        let (symbol, style) = if x < filled {
            ("━", theme.progress)
        } else {
            ("─", theme.progress_track)
        };
        buf[(area.x + x, area.y)].set_symbol(symbol).set_style(style);
    }
}
