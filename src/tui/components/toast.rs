//! # Toast Overlay
//!
//! Transient notification in the bottom-right corner. Expiry is owned by
//! the core (`Action::Tick`); this only draws what `App::toast` holds.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::core::state::{Toast, ToastVariant};
use crate::tui::component::Component;
use crate::tui::theme::Palette;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 5;

pub struct ToastView<'a> {
    pub toast: &'a Toast,
    pub palette: Palette,
}

impl<'a> ToastView<'a> {
    pub fn new(toast: &'a Toast, palette: Palette) -> Self {
        Self { toast, palette }
    }
}

/// Bottom-right corner of `area`, one cell in from the edges.
fn corner(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    let height = TOAST_HEIGHT.min(area.height.saturating_sub(2));
    Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(height + 1),
        width,
        height,
    }
}

impl Component for ToastView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = corner(area);
        if rect.width < 4 || rect.height < 3 {
            return;
        }

        let accent = match self.toast.variant {
            ToastVariant::Info => self.palette.heading(),
            ToastVariant::Destructive => self.palette.error(),
        };

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                self.toast.description.clone(),
                self.palette.text(),
            )))
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(accent)
                    .title(Span::styled(format!(" {} ", self.toast.title), accent)),
            ),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    #[test]
    fn test_corner_placement() {
        let rect = corner(Rect::new(0, 0, 100, 30));
        assert_eq!(rect, Rect::new(55, 24, TOAST_WIDTH, TOAST_HEIGHT));
    }

    #[test]
    fn test_corner_clamps_to_small_area() {
        let rect = corner(Rect::new(0, 0, 20, 4));
        assert_eq!(rect.width, 18);
        assert_eq!(rect.height, 2);
    }

    #[test]
    fn test_renders_destructive_toast() {
        let toast = Toast::new(
            "Error",
            "Could not open email client.",
            ToastVariant::Destructive,
            Instant::now(),
        );
        let palette = Palette::for_theme(Theme::Dark);
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                ToastView::new(&toast, palette).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Error"));
        assert!(text.contains("Could not open email client."));

        let rect = corner(Rect::new(0, 0, 80, 20));
        assert_eq!(buffer[(rect.x, rect.y)].fg, palette.error);
    }
}
