//! # TitleBar Component
//!
//! Top line of the screen: whose portfolio this is, the status message and
//! the theme indicator.
//!
//! Stateless: all three props come from `App`, and the bar renders what it
//! is given.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Ada Lovelace | Opened https://... | ◐ dark"`
//! 2. **Default**: `"Ada Lovelace | ◐ dark"`

use crate::Theme;
use crate::tui::component::Component;
use crate::tui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub name: String,
    pub status_message: String,
    pub theme: Theme,
}

impl TitleBar {
    pub fn new(name: String, status_message: String, theme: Theme) -> Self {
        Self {
            name,
            status_message,
            theme,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);

        let mut spans = vec![Span::styled(self.name.clone(), palette.heading())];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", palette.muted()));
            spans.push(Span::styled(self.status_message.clone(), palette.text()));
        }
        spans.push(Span::styled(" | ", palette.muted()));
        spans.push(Span::styled(
            format!("◐ {} (t)", self.theme.label()),
            palette.muted(),
        ));

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "Ada Lovelace".to_string(),
            "Theme: light".to_string(),
            Theme::Light,
        );
        let text = rendered(&mut title_bar);
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("Theme: light"));
        assert!(text.contains("◐ light"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Ada".to_string(), String::new(), Theme::Dark);
        let text = rendered(&mut title_bar);
        assert!(text.contains("Ada | ◐ dark"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
