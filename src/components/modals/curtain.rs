use crate::app::state::CurtainState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Clear, Widget},
};

const SPINNER: &[&str] = &["◐", "◓", "◑", "◒"];

/// Full-screen wipe covering the palette swap. It grows from the middle
/// row out while closing in and shrinks back afterwards.
pub struct CurtainOverlay<'a> {
    pub theme: &'a Theme,
    pub curtain: &'a CurtainState,
    pub frame: u64,
}

impl Widget for CurtainOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let coverage = curtain_coverage(self.curtain.remaining);
        let height = ((f32::from(area.height) * coverage).ceil() as u16).min(area.height);
        if height == 0 {
            return;
        }
        let covered = Rect {
            x: area.x,
            y: area.y + (area.height - height) / 2,
            width: area.width,
            height,
        };

        Clear.render(covered, buf);
        buf.set_style(covered, self.theme.curtain);

        let spinner = SPINNER[(self.frame as usize) % SPINNER.len()];
        let title = Line::from(format!("{spinner}  {}", self.curtain.title()))
            .style(self.theme.curtain)
            .centered();
        let mid = covered.y + covered.height / 2;
        buf.set_line(covered.x, mid, &title, covered.width);
    }
}

/// Fraction of the screen covered for a given number of remaining ticks.
fn curtain_coverage(remaining: u8) -> f32 {
    match remaining {
        0 => 0.0,
        1 | 5 => 0.34,
        2 | 4 => 0.67,
        _ => 1.0,
    }
}
