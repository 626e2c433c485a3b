use super::{paragraph, tags, title};
use crate::domain::content::{EXPERTISE, PRICING, PROFILE, STATS, TESTIMONIALS, WORKFLOW};
use crate::theme::Theme;
use ratatui::text::{Line, Span};

pub fn lines(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("● Available for work · {}", PROFILE.location),
            theme.status_live,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Hi, I'm ", theme.heading),
            Span::styled(PROFILE.name, theme.stat_value),
        ]),
        Line::from(Span::styled(PROFILE.role, theme.accent)),
        Line::from(""),
    ];
    lines.extend(paragraph(PROFILE.tagline, theme.text, width, 0));

    lines.extend(title("What I Do", theme));
    for item in EXPERTISE {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("◆ {}", item.title), theme.heading)));
        lines.extend(paragraph(item.description, theme.text, width, 2));
        lines.push(tags(item.tags, theme, 2));
    }

    lines.extend(title("By The Numbers", theme));
    lines.push(Line::from(""));
    for stat in STATS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>6}{:<2}", stat.value, stat.suffix), theme.stat_value),
            Span::styled(stat.label, theme.text_muted),
        ]));
    }

    lines.extend(title("Pricing", theme));
    for tier in PRICING {
        lines.push(Line::from(""));
        let mut header = vec![
            Span::styled(format!("{:<14}", tier.tier), theme.heading),
            Span::styled(tier.price, theme.stat_value),
        ];
        if tier.popular {
            header.push(Span::raw("  "));
            header.push(Span::styled(" MOST POPULAR ", theme.badge_popular));
        }
        lines.push(Line::from(header));
        lines.extend(paragraph(tier.description, theme.text_muted, width, 2));
        for feature in tier.features {
            lines.push(Line::from(vec![
                Span::styled("  ✓ ", theme.status_live),
                Span::styled(*feature, theme.text),
            ]));
        }
    }

    lines.extend(title("How I Work", theme));
    for step in WORKFLOW {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", step.step), theme.stat_value),
            Span::styled(step.title, theme.heading),
        ]));
        lines.extend(paragraph(step.description, theme.text, width, 4));
    }

    lines.extend(title("Client Stories", theme));
    for testimonial in TESTIMONIALS {
        lines.push(Line::from(""));
        lines.extend(paragraph(
            &format!("“{}”", testimonial.text),
            theme.text,
            width,
            2,
        ));
        lines.push(Line::from(vec![
            Span::styled(format!("  — {}", testimonial.name), theme.heading),
            Span::styled(format!(", {}", testimonial.role), theme.text_muted),
        ]));
    }

    lines
}
