//! # Project Dialog
//!
//! Modal overlay with the full description of one project. While it is
//! open it takes every key: `o` opens the project link, Esc or Enter
//! closes it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::profile::Project;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    OpenProject(usize),
    Close,
}

/// Which project the dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDialogState {
    pub index: usize,
}

impl ProjectDialogState {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl EventHandler for ProjectDialogState {
    type Event = DialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DialogEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Submit | TuiEvent::InputChar('q') => {
                Some(DialogEvent::Close)
            }
            TuiEvent::InputChar('o') => Some(DialogEvent::OpenProject(self.index)),
            _ => None,
        }
    }
}

pub struct ProjectDialog<'a> {
    project: &'a Project,
    palette: Palette,
}

impl<'a> ProjectDialog<'a> {
    pub fn new(project: &'a Project, palette: Palette) -> Self {
        Self { project, palette }
    }
}

impl Component for ProjectDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 60, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.palette.heading())
            .title(Span::styled(
                format!(" {} ", self.project.title),
                self.palette.heading(),
            ))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" o View Project  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let lines = vec![
            Line::from(Span::styled(
                self.project.description.clone(),
                self.palette.text(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("View Project (o) ", self.palette.text()),
                Span::styled(self.project.link.clone(), self.palette.link()),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(block),
            overlay,
        );
    }
}

/// Create a centered rect using percentage of the outer area.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::core::profile::Profile;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_dialog_keys() {
        let mut state = ProjectDialogState::new(2);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('o')),
            Some(DialogEvent::OpenProject(2))
        );
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(DialogEvent::Close));
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(DialogEvent::Close));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(state.handle_event(&TuiEvent::WheelDown), None);
    }

    #[test]
    fn test_centered_rect() {
        let outer = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(70, 60, outer);
        assert_eq!(rect.width, 70);
        assert_eq!(rect.height, 30);
        assert_eq!(rect.x, 15);
        assert_eq!(rect.y, 10);
    }

    #[test]
    fn test_render_shows_project() {
        let profile = Profile::default();
        let project = &profile.projects[1];
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                ProjectDialog::new(project, Palette::for_theme(Theme::Light))
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
        assert!(text.contains("Chat App"));
        assert!(text.contains("View Project (o)"));
        assert!(text.contains("Esc Close"));
    }
}
