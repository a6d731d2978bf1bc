//! # TabBar Component
//!
//! The section navigator pinned to the bottom of the screen: a rounded pill
//! holding one tab per section, the active one highlighted. Clicks are
//! resolved with [`hit_test`], which shares its geometry with rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType};
use unicode_width::UnicodeWidthStr;

use crate::core::profile::Section;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const TAB_BAR_HEIGHT: u16 = 3;
const TAB_GAP: u16 = 1;

pub struct TabBar {
    pub active: usize,
    pub transitioning: bool,
    pub palette: Palette,
}

impl TabBar {
    pub fn new(active: usize, transitioning: bool, palette: Palette) -> Self {
        Self {
            active,
            transitioning,
            palette,
        }
    }
}

fn tab_label(index: usize, section: Section) -> String {
    format!(" {} {} ", index + 1, section.label())
}

/// Outer pill rect plus one rect per tab, all centered in `area`.
fn geometry(area: Rect) -> (Rect, Vec<Rect>) {
    let widths: Vec<u16> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| tab_label(i, *s).width() as u16)
        .collect();
    let gaps = TAB_GAP * (widths.len().saturating_sub(1) as u16);
    let inner_width = widths.iter().sum::<u16>() + gaps;
    let outer_width = (inner_width + 2).min(area.width);

    let outer = Rect {
        x: area.x + (area.width - outer_width) / 2,
        y: area.y,
        width: outer_width,
        height: TAB_BAR_HEIGHT.min(area.height),
    };

    let row = outer.y + 1;
    let right_edge = outer.x + outer.width.saturating_sub(1);
    let mut x = outer.x + 1;
    let mut tabs = Vec::with_capacity(widths.len());
    for width in widths {
        let width = width.min(right_edge.saturating_sub(x));
        tabs.push(Rect {
            x,
            y: row,
            width,
            height: 1,
        });
        x = (x + width + TAB_GAP).min(right_edge);
    }
    (outer, tabs)
}

/// Which tab (if any) is at screen position (`column`, `row`) within `area`.
pub fn hit_test(column: u16, row: u16, area: Rect) -> Option<usize> {
    let (_, tabs) = geometry(area);
    tabs.iter()
        .position(|t| t.width > 0 && row == t.y && column >= t.x && column < t.x + t.width)
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height < TAB_BAR_HEIGHT {
            return;
        }
        let (outer, tabs) = geometry(area);

        let mut border = self.palette.border();
        if self.transitioning {
            border = border.add_modifier(Modifier::DIM);
        }
        frame.render_widget(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border),
            outer,
        );

        for (i, (section, rect)) in Section::ALL.iter().zip(tabs).enumerate() {
            let style = if i == self.active {
                self.palette.selected()
            } else {
                self.palette.heading().remove_modifier(Modifier::BOLD)
            };
            let line = Line::from(Span::styled(tab_label(i, *section), style));
            frame.render_widget(line, rect);
        }
    }
}
