use super::{paragraph, tags, title};
use crate::domain::content::{EDUCATION, PROFILE, TECH_STACK};
use crate::theme::Theme;
use ratatui::text::{Line, Span};

pub fn lines(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = title("About Me", theme);
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(PROFILE.name, theme.heading),
        Span::styled(format!("  ·  {}", PROFILE.location), theme.text_muted),
    ]));
    lines.push(Line::from(""));
    lines.extend(paragraph(PROFILE.bio, theme.text, width, 0));

    lines.extend(title("Tech Stack", theme));
    lines.push(Line::from(""));
    lines.push(tags(TECH_STACK, theme, 0));

    lines.extend(title("Education", theme));
    for (i, entry) in EDUCATION.iter().enumerate() {
        let rail = if i + 1 == EDUCATION.len() { " " } else { "│" };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("● ", theme.accent),
            Span::styled(entry.years, theme.stat_value),
            Span::raw("  "),
            Span::styled(format!(" {} ", entry.grade), theme.badge),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("{rail} "), theme.accent),
            Span::styled(entry.title, theme.heading),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("{rail} "), theme.accent),
            Span::styled(entry.place, theme.text_muted),
        ]));
        for line in super::wrap_text(entry.description, width.saturating_sub(2)) {
            lines.push(Line::from(vec![
                Span::styled(format!("{rail} "), theme.accent),
                Span::styled(line, theme.text),
            ]));
        }
    }

    lines
}
