use crate::app::state::PreloaderState;
use crate::domain::content::PROFILE;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

const BAR_WIDTH: u16 = 32;

pub struct Preloader<'a> {
    pub state: &'a PreloaderState,
    pub theme: &'a Theme,
    pub frame: u64,
}

impl Widget for Preloader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base);
        if area.height < 3 {
            return;
        }
        let mid = area.y + area.height / 2;

        let cursor = if self.frame % 2 == 0 { "▌" } else { " " };
        let text = Line::from(vec![
            Span::styled(self.state.text(), self.theme.subheading),
            Span::styled(cursor, self.theme.accent),
        ])
        .centered();
        buf.set_line(area.x, mid - 1, &text, area.width);

        let bar_width = BAR_WIDTH.min(area.width);
        let bar_x = area.x + (area.width - bar_width) / 2;
        let filled = (f64::from(bar_width) * self.state.progress()).round() as u16;
        for x in 0..bar_width {
            let (symbol, style) = if x < filled {
                ("━", self.theme.progress)
            } else {
                ("─", self.theme.progress_track)
            };
            buf[(bar_x + x, mid)].set_symbol(symbol).set_style(style);
        }

        let copyright = Line::from(Span::styled(
            format!("© 2026 {}", PROFILE.name.to_uppercase()),
            self.theme.dimmed,
        ))
        .centered();
        buf.set_line(area.x, mid + 1, &copyright, area.width);
    }
}
