use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod dark;
pub mod light;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub base: Style,
    pub border: Style,
    pub border_focus: Style,

    pub heading: Style,
    pub subheading: Style,
    pub text: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub card: Style,
    pub tag: Style,
    pub badge: Style,
    pub badge_popular: Style,
    pub stat_value: Style,

    pub status_live: Style,
    pub status_beta: Style,
    pub status_maintenance: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header: Style,
    pub header_logo: Style,
    pub nav_item: Style,
    pub nav_active: Style,
    pub progress: Style,
    pub progress_track: Style,

    pub footer_key: Style,
    pub footer_val: Style,
    pub footer: Style,

    pub input: Style,
    pub input_focus: Style,
    pub placeholder: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
    pub curtain: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "DARK",
            ThemeMode::Light => "LIGHT",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::from_palette(&dark::DARK),
            ThemeMode::Light => Self::from_palette(&light::LIGHT),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            base: Style::default().bg(p.base).fg(p.text),
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.primary),

            heading: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            subheading: Style::default().fg(p.primary).add_modifier(Modifier::BOLD),
            text: Style::default().fg(p.subtext1),
            text_muted: Style::default().fg(p.secondary),
            accent: Style::default().fg(p.primary),
            card: Style::default().bg(p.mantle).fg(p.text),
            tag: Style::default().bg(p.surface0).fg(p.subtext1),
            badge: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            badge_popular: Style::default()
                .bg(p.primary)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            stat_value: Style::default().fg(p.primary).add_modifier(Modifier::BOLD),

            status_live: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            status_beta: Style::default().fg(p.purple).add_modifier(Modifier::BOLD),
            status_maintenance: Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.primary)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header: Style::default().bg(p.base).fg(p.text),
            header_logo: Style::default()
                .bg(p.primary)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            nav_item: Style::default().fg(p.subtext0),
            nav_active: Style::default()
                .fg(p.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            progress: Style::default().fg(p.primary),
            progress_track: Style::default().fg(dim_color(p.primary, 0.3)),

            footer_key: Style::default()
                .bg(p.surface0)
                .fg(p.primary)
                .add_modifier(Modifier::BOLD),
            footer_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            input: Style::default().bg(p.mantle).fg(p.text),
            input_focus: Style::default().bg(p.surface0).fg(p.text),
            placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::ITALIC),

            list_selected: Style::default()
                .bg(p.primary)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
            curtain: Style::default()
                .bg(p.primary)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(ThemeMode::Dark)
    }
}
