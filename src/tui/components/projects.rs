//! # Projects Gallery
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ProjectsState` lives in `TuiState` (selection, scroll offset)
//! - `ProjectGallery` is created each frame with borrowed state and props
//!
//! Cards are pre-wrapped with `textwrap` so the heights used for scrolling
//! are exactly the heights drawn.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::profile::Project;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

/// Events emitted by the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsEvent {
    ShowDetails(usize),
    OpenProject(usize),
    OpenRepos,
}

pub struct ProjectsState {
    pub selected: usize,
    count: usize,
    pub scroll: ScrollViewState,
}

impl ProjectsState {
    pub fn new(count: usize) -> Self {
        Self {
            selected: 0,
            count,
            scroll: ScrollViewState::default(),
        }
    }
}

impl EventHandler for ProjectsState {
    type Event = ProjectsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ProjectsEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.count > 0 {
                    self.selected = (self.selected + 1).min(self.count - 1);
                }
                None
            }
            TuiEvent::Submit if self.count > 0 => Some(ProjectsEvent::ShowDetails(self.selected)),
            TuiEvent::InputChar('o') if self.count > 0 => {
                Some(ProjectsEvent::OpenProject(self.selected))
            }
            TuiEvent::InputChar('m') => Some(ProjectsEvent::OpenRepos),
            _ => None,
        }
    }
}

/// Wrap `text` to `width` columns (at least one line).
pub(crate) fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let lines: Vec<String> = textwrap::wrap(text, width as usize)
        .into_iter()
        .map(|l| l.into_owned())
        .collect();
    if lines.is_empty() { vec![String::new()] } else { lines }
}

pub struct ProjectGallery<'a> {
    state: &'a mut ProjectsState,
    projects: &'a [Project],
    repos_url: String,
    palette: Palette,
}

impl<'a> ProjectGallery<'a> {
    pub fn new(
        state: &'a mut ProjectsState,
        projects: &'a [Project],
        repos_url: String,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            projects,
            repos_url,
            palette,
        }
    }

    fn card(&self, index: usize, project: &Project, width: u16) -> (Paragraph<'static>, u16) {
        let inner = width.saturating_sub(2);
        let mut lines: Vec<Line<'static>> = wrap_lines(&project.description, inner)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, self.palette.muted())))
            .collect();
        lines.push(Line::from(vec![
            Span::styled("View Project (o) ", self.palette.text()),
            Span::styled(project.link.clone(), self.palette.link()),
        ]));

        let selected = index == self.state.selected;
        let border = if selected {
            self.palette.heading()
        } else {
            self.palette.border()
        };
        let title_style = if selected {
            self.palette.selected()
        } else {
            self.palette.heading()
        };

        let height = lines.len() as u16 + 2;
        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border)
                .title(Span::styled(format!(" {} ", project.title), title_style)),
        );
        (paragraph, height)
    }

    /// Move the scroll offset just enough to show the selected card.
    fn follow_selection(&mut self, spans: &[(u16, u16)], viewport: u16) {
        let Some(&(top, height)) = spans.get(self.state.selected) else {
            return;
        };
        let offset = self.state.scroll.offset().y;
        let bottom = top + height;
        let new_offset = if top < offset {
            top
        } else if bottom > offset + viewport {
            bottom.saturating_sub(viewport)
        } else {
            offset
        };
        if new_offset != offset {
            self.state.scroll.set_offset(Position::new(0, new_offset));
        }
    }
}

impl Component for ProjectGallery<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Leave a column for the scrollbar
        let content_width = area.width.saturating_sub(1);

        let header = Line::from(Span::styled("My Projects", self.palette.heading()));
        let mut y: u16 = 2;
        let mut cards = Vec::with_capacity(self.projects.len());
        let mut spans = Vec::with_capacity(self.projects.len());
        for (i, project) in self.projects.iter().enumerate() {
            let (card, height) = self.card(i, project, content_width);
            spans.push((y, height));
            cards.push((card, Rect::new(0, y, content_width, height)));
            y += height;
        }
        let footer_y = y + 1;
        let footer = Line::from(vec![
            Span::styled("See More on GitHub (m) ", self.palette.text()),
            Span::styled(self.repos_url.clone(), self.palette.link()),
        ]);
        let total_height = footer_y + 1;

        self.follow_selection(&spans, area.height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(header, Rect::new(0, 0, content_width, 1));
        for (card, rect) in cards {
            scroll_view.render_widget(card, rect);
        }
        scroll_view.render_widget(footer, Rect::new(0, footer_y, content_width, 1));

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll);
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
    fn test_selection_is_clamped() {
        let mut state = ProjectsState::new(3);
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(state.selected, 0);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_events() {
        let mut state = ProjectsState::new(3);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(ProjectsEvent::ShowDetails(1))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('o')),
            Some(ProjectsEvent::OpenProject(1))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('m')),
            Some(ProjectsEvent::OpenRepos)
        );
    }

    #[test]
    fn test_empty_gallery_only_offers_repos() {
        let mut state = ProjectsState::new(0);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('o')), None);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('m')),
            Some(ProjectsEvent::OpenRepos)
        );
    }

    #[test]
    fn test_wrap_lines() {
        assert_eq!(wrap_lines("", 10), vec![String::new()]);
        assert_eq!(wrap_lines("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_lines("anything", 0), vec![String::new()]);
    }

    #[test]
    fn test_render_lists_projects() {
        let profile = Profile::default();
        let mut state = ProjectsState::new(profile.featured_projects().len());
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                ProjectGallery::new(
                    &mut state,
                    profile.featured_projects(),
                    profile.github_repos_url(),
                    Palette::for_theme(Theme::Dark),
                )
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
        assert!(text.contains("My Projects"));
        assert!(text.contains("Pet Adoption App"));
        assert!(text.contains("Chat App"));
        assert!(text.contains("Word App"));
        assert!(text.contains("See More on GitHub"));
    }

    #[test]
    fn test_scroll_follows_selection() {
        let profile = Profile::default();
        let mut state = ProjectsState::new(profile.featured_projects().len());
        state.selected = 2;
        let backend = TestBackend::new(50, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                ProjectGallery::new(
                    &mut state,
                    profile.featured_projects(),
                    profile.github_repos_url(),
                    Palette::for_theme(Theme::Dark),
                )
                .render(f, f.area());
            })
            .unwrap();

        assert!(state.scroll.offset().y > 0);
    }
}
