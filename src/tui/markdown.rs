//! Markdown → ratatui `Text` for the profile bio.
//!
//! Thin wrapper around `pulldown_cmark`. Covers what a short bio uses:
//! paragraphs, headings, emphasis, inline code, lists, plain code blocks
//! and links (the URL is printed after the link text, since terminals
//! can't click through).

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::tui::theme::Palette;

pub fn render(content: &str, palette: &Palette) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut w = Writer::new(*palette);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.text
}

struct Writer {
    text: Text<'static>,
    palette: Palette,
    /// Inline style stack; styles compose via `patch`.
    styles: Vec<Style>,
    /// None = unordered, Some(n) = ordered at n.
    list_indices: Vec<Option<u64>>,
    link_url: Option<String>,
    in_code_block: bool,
    /// Set by `Item` so a loose item's first paragraph stays on the marker line.
    item_started: bool,
    needs_newline: bool,
}

impl Writer {
    fn new(palette: Palette) -> Self {
        Self {
            text: Text::default(),
            palette,
            styles: vec![],
            list_indices: vec![],
            link_url: None,
            in_code_block: false,
            item_started: false,
            needs_newline: false,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| self.palette.text())
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn push_line(&mut self, line: Line<'static>) {
        self.text.lines.push(line);
    }

    fn push_span(&mut self, span: Span<'static>) {
        match self.text.lines.last_mut() {
            Some(line) => line.push_span(span),
            None => self.push_line(Line::from(vec![span])),
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => {
                let style = self.palette.selected().remove_modifier(Modifier::BOLD);
                self.push_span(Span::styled(c.to_string(), style));
            }
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.push_line(Line::default()),
            Event::Rule => {
                self.blank_line_if_needed();
                self.push_line(Line::from(Span::styled("─".repeat(40), self.palette.border())));
                self.needs_newline = true;
            }
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph if self.item_started => self.item_started = false,
            Tag::Paragraph => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
            }
            Tag::Heading { .. } => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
                let heading = self.palette.heading();
                self.push_style(heading);
            }
            Tag::CodeBlock(_) => {
                self.blank_line_if_needed();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                if self.list_indices.is_empty() {
                    self.blank_line_if_needed();
                }
                self.list_indices.push(start);
            }
            Tag::Item => {
                self.needs_newline = false;
                self.item_started = true;
                self.push_line(Line::default());
                let indent = "  ".repeat(self.list_indices.len().saturating_sub(1));
                if let Some(idx) = self.list_indices.last_mut() {
                    let marker = match idx {
                        None => format!("{indent}• "),
                        Some(n) => {
                            let s = format!("{indent}{n}. ");
                            *n += 1;
                            s
                        }
                    };
                    let style = self.palette.muted();
                    self.push_span(Span::styled(marker, style));
                }
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                let link = self.palette.link();
                self.push_style(link);
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.needs_newline = true,
            TagEnd::Heading(_) => {
                self.pop_style();
                self.needs_newline = true;
            }
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.needs_newline = true;
            }
            TagEnd::List(_) => {
                self.list_indices.pop();
                self.needs_newline = true;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    let muted = self.palette.muted();
                    self.push_span(Span::styled(format!(" ({url})"), muted));
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, cow: CowStr<'_>) {
        self.item_started = false;
        // ratatui renders \t as zero-width
        let text = cow.replace('\t', "    ");

        if self.in_code_block {
            let style = self.palette.muted();
            for line in text.lines() {
                self.push_line(Line::from(Span::styled(format!("  {line}"), style)));
            }
            return;
        }

        let style = self.style();
        self.push_span(Span::styled(text, style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;

    fn palette() -> Palette {
        Palette::for_theme(Theme::Dark)
    }

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn plain_text_uses_palette_fg() {
        let text = render("hello", &palette());
        assert_eq!(text.lines[0].spans[0].style.fg, Some(palette().fg));
    }

    #[test]
    fn bold_inside_paragraph_is_bold() {
        let text = render("I build **mobile** apps", &palette());
        let bold = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "mobile")
            .unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn paragraphs_are_separated_by_blank_line() {
        let text = render("one\n\ntwo", &palette());
        assert_eq!(plain(&text), vec!["one", "", "two"]);
    }

    #[test]
    fn links_show_their_target() {
        let text = render("see [repo](https://example.com)", &palette());
        let lines = plain(&text);
        assert_eq!(lines[0], "see repo (https://example.com)");
        let link = text.lines[0].spans.iter().find(|s| s.content == "repo").unwrap();
        assert!(link.style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn lists_get_markers() {
        let text = render("- Flutter\n- Rust\n\n1. first\n2. second", &palette());
        let lines = plain(&text);
        assert!(lines.contains(&"• Flutter".to_string()));
        assert!(lines.contains(&"• Rust".to_string()));
        assert!(lines.contains(&"1. first".to_string()));
        assert!(lines.contains(&"2. second".to_string()));
    }

    #[test]
    fn code_block_tabs_expanded() {
        let text = render("```\n\tindented\n```", &palette());
        let lines = plain(&text);
        assert!(lines.iter().any(|l| l == "      indented"));
        assert!(!lines.iter().any(|l| l.contains('\t')));
    }
}
