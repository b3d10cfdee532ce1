//! Colors for the dark and light themes

use crate::model::Theme;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub icon: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub active: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(24, 24, 27),
                fg: Color::White,
                muted: Color::DarkGray,
                border: Color::DarkGray,
                accent: Color::Cyan,
                icon: Color::Yellow,
                highlight_bg: Color::Blue,
                highlight_fg: Color::White,
                active: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
            Theme::Light => Self {
                bg: Color::Rgb(250, 250, 250),
                fg: Color::Black,
                muted: Color::Gray,
                border: Color::Gray,
                accent: Color::Blue,
                icon: Color::Magenta,
                highlight_bg: Color::LightBlue,
                highlight_fg: Color::Black,
                active: Color::Green,
                warning: Color::Rgb(180, 110, 0),
                error: Color::Red,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Key label in the help bar
    pub fn key(&self, color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ_in_background() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark.bg, light.bg);
        assert_ne!(dark.fg, light.fg);
    }
}
