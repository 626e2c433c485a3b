use super::{paragraph, title};
use crate::app::state::{ContactField, ContactFormState};
use crate::domain::content::{PROFILE, SOCIALS};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const FIELD_HEIGHT: u16 = 3;
/// Title row plus one bordered input per field.
pub const FORM_HEIGHT: u16 = 1 + FIELD_HEIGHT * 4;

pub fn lines(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = title("Let's Work Together", theme);
    lines.push(Line::from(""));
    lines.extend(paragraph(
        "Have a project in mind? Fill in the form below and it will open in WhatsApp, \
         ready to send.",
        theme.text,
        width,
        0,
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  ✉  Email     ", theme.text_muted),
        Span::styled(PROFILE.email, theme.accent),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  ☏  WhatsApp  ", theme.text_muted),
        Span::styled(PROFILE.phone_display, theme.accent),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  ⌖  Based in  ", theme.text_muted),
        Span::styled(PROFILE.location, theme.text),
    ]));

    lines.extend(title("Elsewhere", theme));
    for social in SOCIALS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", social.label), theme.heading),
            Span::styled(social.url, theme.accent),
        ]));
    }
    lines
}

pub struct ContactForm<'a, 's> {
    pub form: &'a ContactFormState<'s>,
    pub theme: &'a Theme,
    pub active: bool,
}

impl Widget for ContactForm<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(ContactField::all().iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        let rows = Layout::vertical(constraints).split(area);

        let heading = if self.active {
            Line::from(vec![
                Span::styled(" SEND A MESSAGE ", self.theme.badge_popular),
                Span::styled("  Tab next field · Ctrl+S send · Esc leave", self.theme.text_muted),
            ])
        } else {
            Line::from(vec![
                Span::styled(" SEND A MESSAGE ", self.theme.badge),
                Span::styled("  press i to start typing", self.theme.text_muted),
            ])
        };
        if rows[0].height > 0 {
            buf.set_line(rows[0].x, rows[0].y, &heading, rows[0].width);
        }

        for (&field, &row) in ContactField::all().iter().zip(rows.iter().skip(1)) {
            let focused = self.active && self.form.focused == field;
            let (border, style) = if focused {
                (self.theme.border_focus, self.theme.input_focus)
            } else {
                (self.theme.border, self.theme.input)
            };
            let block = Block::default()
                .title(Span::styled(format!(" {} ", field.label()), border))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border)
                .style(style);
            let inner = block.inner(row);
            block.render(row, buf);
            if inner.is_empty() {
                continue;
            }

            let input = self.form.field(field);
            if input.is_empty() && !focused {
                Paragraph::new(Span::styled(field.placeholder(), self.theme.placeholder))
                    .render(inner, buf);
            } else {
                input.text_area().render(inner, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn screen(buf: &Buffer) -> String {
        buf.content()
            .chunks(usize::from(buf.area.width))
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_form_shows_placeholders_and_values() {
        let mut form = ContactFormState::default();
        for c in "Ada".chars() {
            form.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, FORM_HEIGHT);
        let mut buf = Buffer::empty(area);
        ContactForm {
            form: &form,
            theme: &theme,
            active: true,
        }
        .render(area, &mut buf);

        let text = screen(&buf);
        assert!(text.contains("Ada"));
        assert!(text.contains("john@example.com"));
        assert!(text.contains("Project Inquiry"));
        assert!(text.contains("Your Email"));
    }
}
