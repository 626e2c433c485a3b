use super::{paragraph, tags, title};
use crate::domain::content::projects_for;
use crate::domain::models::{ProjectStatus, ProjectTab};
use crate::theme::Theme;
use ratatui::text::{Line, Span};

pub fn lines(tab: ProjectTab, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = title("Featured Work", theme);
    lines.push(Line::from(""));

    let mut tab_spans = Vec::new();
    for &t in ProjectTab::all() {
        let style = if t == tab {
            theme.badge_popular
        } else {
            theme.tag
        };
        tab_spans.push(Span::styled(format!(" {} ", t.label()), style));
        tab_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(tab_spans));

    let projects = projects_for(tab);
    if projects.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No projects in this category yet.",
            theme.text_muted,
        )));
        return lines;
    }

    for project in projects {
        let status_style = match project.status {
            ProjectStatus::Live => theme.status_live,
            ProjectStatus::Beta => theme.status_beta,
            ProjectStatus::Maintenance => theme.status_maintenance,
        };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("● {}", project.status.label()), status_style),
        ]));
        lines.extend(paragraph(project.title, theme.heading, width, 0));
        lines.extend(paragraph(project.description, theme.text, width, 2));
        lines.push(tags(project.tags, theme, 2));
        if let Some(demo) = project.demo {
            lines.push(Line::from(vec![
                Span::styled("  demo   ", theme.text_muted),
                Span::styled(demo, theme.accent),
            ]));
        }
        if let Some(github) = project.github {
            lines.push(Line::from(vec![
                Span::styled("  source ", theme.text_muted),
                Span::styled(github, theme.accent),
            ]));
        }
    }

    lines
}
