use crate::app::state::PaletteState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{draw_drop_shadow, top_centered_rect};

const MODAL_HEIGHT: u16 = 14;

/// Screen regions of the open palette, shared by the renderer and the
/// mouse hit-testing in `app::input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteAreas {
    pub modal: Rect,
    pub query: Rect,
    pub list: Rect,
    pub hints: Rect,
}

impl PaletteAreas {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let modal = top_centered_rect(60, MODAL_HEIGHT, area);
        let inner = Block::default().borders(Borders::ALL).inner(modal);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Key hints
            ])
            .split(inner);

        Self {
            modal,
            query: layout[0],
            list: layout[2],
            hints: layout[3],
        }
    }

    /// Index into the filtered list under the pointer, if any.
    #[must_use]
    pub fn row_at(&self, column: u16, row: u16, state: &PaletteState) -> Option<usize> {
        if !self.list.contains(Position::new(column, row)) {
            return None;
        }
        let offset = visible_offset(state.selected_index, self.list.height);
        let index = offset + usize::from(row - self.list.y);
        (index < state.matches.len()).then_some(index)
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.modal.contains(Position::new(column, row))
    }
}

/// First visible row so that `selected` is always on screen.
#[must_use]
pub fn visible_offset(selected: usize, height: u16) -> usize {
    let height = usize::from(height.max(1));
    (selected + 1).saturating_sub(height)
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a PaletteState,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = PaletteAreas::new(area);
        if areas.modal.width == 0 || areas.modal.height == 0 {
            return;
        }

        draw_drop_shadow(buf, areas.modal, area);
        Clear.render(areas.modal, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.card);
        block.render(areas.modal, buf);

        // Query
        let query_line = if self.state.query.is_empty() {
            Line::from(vec![
                Span::styled(" ⌕ ", self.theme.accent),
                Span::styled("Type a command or search...", self.theme.placeholder),
            ])
        } else {
            Line::from(vec![
                Span::styled(" ⌕ ", self.theme.accent),
                Span::styled(self.state.query.as_str(), self.theme.list_item),
                Span::styled("_", self.theme.accent.add_modifier(Modifier::SLOW_BLINK)),
            ])
        };
        if areas.query.height > 0 {
            buf.set_line(areas.query.x, areas.query.y, &query_line, areas.query.width);
        }

        if areas.modal.height > 3 {
            let separator = "─".repeat(usize::from(areas.query.width));
            buf.set_string(areas.query.x, areas.query.y + 1, separator, self.theme.border);
        }

        // Results
        if self.state.matches.is_empty() {
            let no_results = Line::from(Span::styled(
                "No results found.",
                self.theme.text_muted,
            ))
            .centered();
            if areas.list.height > 0 {
                buf.set_line(areas.list.x, areas.list.y, &no_results, areas.list.width);
            }
        } else {
            let offset = visible_offset(self.state.selected_index, areas.list.height);
            let rows = self
                .state
                .filtered()
                .enumerate()
                .skip(offset)
                .take(usize::from(areas.list.height));

            for (row, (i, action)) in rows.enumerate() {
                let y = areas.list.y + row as u16;
                let selected = i == self.state.selected_index;
                let style = if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };

                let row_area = Rect::new(areas.list.x, y, areas.list.width, 1);
                buf.set_style(row_area, style);

                let icon = action.icon.unwrap_or(" ");
                let left = Line::from(vec![
                    Span::styled(if selected { " ▌" } else { "  " }, style),
                    Span::styled(format!("{icon:<2} "), style),
                    Span::styled(action.label, style),
                ]);
                buf.set_line(row_area.x, y, &left, row_area.width);

                if let Some(shortcut) = action.shortcut {
                    let badge = format!(" {shortcut} ");
                    let width = badge.chars().count() as u16 + 1;
                    if row_area.width > width {
                        let badge_style = if selected { style } else { self.theme.tag };
                        buf.set_string(row_area.right() - width, y, badge, badge_style);
                    }
                }
            }
        }

        // Hints
        let hints = Line::from(vec![
            Span::styled(" ↑↓ ", self.theme.footer_key),
            Span::styled(" to navigate  ", self.theme.text_muted),
            Span::styled(" ↵ ", self.theme.footer_key),
            Span::styled(" to select  ", self.theme.text_muted),
            Span::styled(" Esc ", self.theme.footer_key),
            Span::styled(" to close", self.theme.text_muted),
        ]);
        if areas.hints.height > 0 {
            buf.set_line(areas.hints.x, areas.hints.y, &hints, areas.hints.width);
        }
    }
}
