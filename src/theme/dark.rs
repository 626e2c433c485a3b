use super::palette::Palette;
use ratatui::style::Color;

/// Slate background with the cyan brand accent.
pub const DARK: Palette = Palette {
    base: Color::Rgb(2, 6, 23),
    mantle: Color::Rgb(15, 23, 42),
    crust: Color::Rgb(1, 3, 12),
    text: Color::Rgb(241, 245, 249),
    subtext0: Color::Rgb(148, 163, 184),
    subtext1: Color::Rgb(203, 213, 225),
    surface0: Color::Rgb(30, 41, 59),
    surface1: Color::Rgb(51, 65, 85),
    surface2: Color::Rgb(71, 85, 105),
    overlay0: Color::Rgb(100, 116, 139),
    primary: Color::Rgb(0, 201, 255),
    secondary: Color::Rgb(148, 163, 184),
    green: Color::Rgb(74, 222, 128),
    yellow: Color::Rgb(250, 204, 21),
    red: Color::Rgb(248, 113, 113),
    purple: Color::Rgb(192, 132, 252),
};
