//! Colors for the two themes.

use ratatui::style::{Color, Modifier, Style};

use crate::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub accent_fg: Color,
    pub border: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => Palette {
                fg: Color::White,
                muted: Color::Gray,
                primary: Color::LightCyan,
                accent: Color::Cyan,
                accent_fg: Color::Black,
                border: Color::DarkGray,
                error: Color::LightRed,
            },
            Theme::Light => Palette {
                fg: Color::Black,
                muted: Color::DarkGray,
                primary: Color::Blue,
                accent: Color::Blue,
                accent_fg: Color::White,
                border: Color::Gray,
                error: Color::Red,
            },
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted control (active tab, focused button, selected card).
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent_fg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark, light);
        assert_ne!(dark.fg, light.fg);
    }

    #[test]
    fn test_selected_is_readable() {
        let palette = Palette::for_theme(Theme::Dark);
        let style = palette.selected();
        assert_ne!(style.fg, style.bg);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
