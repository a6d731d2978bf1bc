//! Row of social links with their hotkeys, e.g. `[g] GitHub  [i] LinkedIn`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::core::profile::SocialLink;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct SocialLinks<'a> {
    pub links: &'a [SocialLink],
    pub palette: Palette,
}

impl<'a> SocialLinks<'a> {
    pub fn new(links: &'a [SocialLink], palette: Palette) -> Self {
        Self { links, palette }
    }
}

impl Component for SocialLinks<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.links.len() * 3);
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[{}] ", link.key), self.palette.muted()));
            spans.push(Span::styled(link.name.clone(), self.palette.link()));
        }
        frame.render_widget(Line::from(spans).centered(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::core::profile::Profile;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_hotkeys_and_names() {
        let profile = Profile::default();
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                SocialLinks::new(&profile.socials, Palette::for_theme(Theme::Dark))
                    .render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("[g] GitHub  [i] LinkedIn"));
    }
}
