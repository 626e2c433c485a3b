//! Page bodies. Each page is flattened to pre-wrapped lines so the renderer
//! knows the content height and can clamp scrolling.

pub mod about;
pub mod contact;
pub mod home;
pub mod projects;

use crate::app::state::AppState;
use crate::domain::models::Route;
use crate::theme::Theme;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

const MARGIN: usize = 2;

#[must_use]
pub fn page_lines(state: &AppState<'_>, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width).saturating_sub(MARGIN * 2).max(10);
    let mut lines = match state.route {
        Route::Home => home::lines(theme, width),
        Route::About => about::lines(theme, width),
        Route::Projects => projects::lines(state.project_tab, theme, width),
        Route::Contact => contact::lines(theme, width),
    };
    lines.push(Line::from(""));
    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::raw(" ".repeat(MARGIN))];
            spans.extend(line.spans);
            Line::from(spans).style(line.style)
        })
        .collect()
}

/// Greedy word wrap. Words longer than `width` are split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let used = current.chars().count();
            let needed = word.chars().count() + usize::from(used > 0);
            if used + needed <= width {
                if used > 0 {
                    current.push(' ');
                }
                current.push_str(word);
                break;
            }
            if used > 0 {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            let split = word
                .char_indices()
                .nth(width)
                .map_or(word.len(), |(i, _)| i);
            lines.push(word[..split].to_string());
            word = &word[split..];
            if word.is_empty() {
                break;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub(crate) fn title(text: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(text.to_uppercase(), theme.subheading)),
        Line::from(Span::styled("─".repeat(text.chars().count()), theme.accent)),
    ]
}

pub(crate) fn paragraph(text: &str, style: Style, width: usize, indent: usize) -> Vec<Line<'static>> {
    wrap_text(text, width.saturating_sub(indent))
        .into_iter()
        .map(|l| Line::from(Span::styled(format!("{}{l}", " ".repeat(indent)), style)))
        .collect()
}

pub(crate) fn tags(tags: &[&str], theme: &Theme, indent: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(indent))];
    for tag in tags {
        spans.push(Span::styled(format!(" {tag} "), theme.tag));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("the quick brown fox", 9),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap_text("   ", 5).is_empty());
    }

    #[test]
    fn test_wrapped_lines_fit() {
        let text = crate::domain::content::PROFILE.bio;
        for width in [10, 23, 40, 77] {
            for line in wrap_text(text, width) {
                assert!(line.chars().count() <= width, "{line:?} wider than {width}");
            }
        }
    }

    #[test]
    fn test_every_page_has_content() {
        let theme = Theme::default();
        let mut state = AppState::default();
        for &route in Route::all() {
            state.route = route;
            assert!(page_lines(&state, &theme, 80).len() > 5, "{route:?} is empty");
        }
    }
}
