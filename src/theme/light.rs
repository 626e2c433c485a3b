use super::palette::Palette;
use ratatui::style::Color;

pub const LIGHT: Palette = Palette {
    base: Color::Rgb(248, 250, 252),
    mantle: Color::Rgb(241, 245, 249),
    crust: Color::Rgb(226, 232, 240),
    text: Color::Rgb(15, 23, 42),
    subtext0: Color::Rgb(71, 85, 105),
    subtext1: Color::Rgb(51, 65, 85),
    surface0: Color::Rgb(226, 232, 240),
    surface1: Color::Rgb(203, 213, 225),
    surface2: Color::Rgb(148, 163, 184),
    overlay0: Color::Rgb(100, 116, 139),
    primary: Color::Rgb(2, 132, 199),
    secondary: Color::Rgb(100, 116, 139),
    green: Color::Rgb(22, 163, 74),
    yellow: Color::Rgb(202, 138, 4),
    red: Color::Rgb(220, 38, 38),
    purple: Color::Rgb(147, 51, 234),
};
