use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Pages",
        &[
            (" 1 2 3 4", "Home / About / Projects / Contact"),
            (" h / l", "Previous / next page"),
            (" j / k", "Scroll down / up"),
            (" PgDn / PgUp", "Scroll a page"),
            (" g / G", "Top / bottom"),
            (" Tab", "Next project category"),
        ],
    ),
    (
        "Command Palette",
        &[
            (" Ctrl+K", "Open / close from anywhere"),
            (" ↑ / ↓", "Move the highlight"),
            (" Enter", "Run the highlighted action"),
            (" Esc", "Close"),
        ],
    ),
    (
        "Contact Form",
        &[
            (" i / Enter", "Start typing (Contact page)"),
            (" Tab", "Next field"),
            (" Ctrl+S", "Send via WhatsApp"),
            (" Esc", "Leave the form"),
        ],
    ),
    (
        "General",
        &[
            (" t", "Toggle dark / light theme"),
            (" m", "Mute / unmute sounds"),
            (" ?", "Show this help"),
            (" q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.badge_popular),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.card);

        let key_style = self.theme.footer_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.subheading;

        let mut rows = Vec::new();
        for (i, (section, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*section, category_style)),
                Cell::from(""),
            ]));
            for (keys, description) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*keys, key_style)),
                    Cell::from(Span::styled(*description, desc_style)),
                ]));
            }
        }

        let table = Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
