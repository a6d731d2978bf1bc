//! # About Panel
//!
//! Name, headline and bio on the left, an initials badge on the right.
//! Below 60 columns the badge is dropped.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::profile::Profile;
use crate::tui::component::Component;
use crate::tui::markdown;
use crate::tui::theme::Palette;

const BADGE_WIDTH: u16 = 14;
const BADGE_HEIGHT: u16 = 7;
const BADGE_MIN_AREA_WIDTH: u16 = 60;

pub struct AboutPanel<'a> {
    pub profile: &'a Profile,
    pub palette: Palette,
}

impl<'a> AboutPanel<'a> {
    pub fn new(profile: &'a Profile, palette: Palette) -> Self {
        Self { profile, palette }
    }

    fn body(&self) -> Text<'static> {
        let mut text = Text::from(vec![
            Line::from(Span::styled(self.profile.name.clone(), self.palette.heading())),
            Line::from(Span::styled(
                self.profile.headline.clone(),
                self.palette.muted(),
            )),
        ]);
        text.lines
            .extend(markdown::render(&self.profile.bio, &self.palette).lines);
        text
    }

    fn render_badge(&self, frame: &mut Frame, area: Rect) {
        let [badge] = Layout::vertical([Constraint::Length(BADGE_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [badge] = Layout::horizontal([Constraint::Length(BADGE_WIDTH)])
            .flex(Flex::Center)
            .areas(badge);

        let inner_height = BADGE_HEIGHT.saturating_sub(2);
        let mut lines = vec![Line::default(); (inner_height / 2) as usize];
        lines.push(Line::from(Span::styled(
            self.profile.avatar_initials.clone(),
            self.palette.heading(),
        )));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(self.palette.accent)),
        );
        frame.render_widget(paragraph, badge);
    }
}

impl Component for AboutPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let body = Paragraph::new(self.body()).wrap(Wrap { trim: false });

        if area.width < BADGE_MIN_AREA_WIDTH {
            frame.render_widget(body, area);
            return;
        }

        let [text_area, badge_area] =
            Layout::horizontal([Constraint::Percentage(66), Constraint::Percentage(34)])
                .spacing(2)
                .areas(area);
        frame.render_widget(body, text_area);
        self.render_badge(frame, badge_area);
    }
}
