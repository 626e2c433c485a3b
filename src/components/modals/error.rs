use crate::app::state::{ErrorSeverity, ErrorState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct ErrorModal<'a> {
    pub theme: &'a Theme,
    pub error: &'a ErrorState,
}

impl Widget for ErrorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 40, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let (title_text, title_style, icon) = match self.error.severity {
            ErrorSeverity::Info => (" INFO ", self.theme.status_info, "i"),
            ErrorSeverity::Warning => (" CHECK THE FORM ", self.theme.status_warn, "!"),
            ErrorSeverity::Error => (" ERROR ", self.theme.status_error, "✗"),
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title_text, title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(self.theme.border_focus)
            .style(self.theme.card);

        let timestamp = self.error.timestamp.format("%H:%M:%S").to_string();

        let mut text_lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("{icon} "), title_style),
                Span::raw(" "),
                Span::styled(self.error.message.as_str(), self.theme.heading),
            ]),
            Line::from(Span::styled(
                format!("at {timestamp}"),
                self.theme.text_muted,
            )),
            Line::from(""),
        ];

        for suggestion in &self.error.suggestions {
            text_lines.push(Line::from(vec![
                Span::styled("• ", self.theme.accent),
                Span::styled(suggestion.as_str(), self.theme.text),
            ]));
        }
        if !self.error.suggestions.is_empty() {
            text_lines.push(Line::from(""));
        }

        text_lines.push(Line::from(vec![
            Span::raw(" Press "),
            Span::styled(" Esc ", self.theme.footer_key),
            Span::raw(" to go back "),
        ]));

        Paragraph::new(text_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal_area, buf);
    }
}
