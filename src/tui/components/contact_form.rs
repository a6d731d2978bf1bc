//! # Contact Form Component
//!
//! Three text fields and a Send button, plus the contact details header.
//!
//! ## State Management
//!
//! `ContactFormState` owns the typed text, which control has focus and the
//! cursor byte offset inside the focused field. Validation errors are a
//! prop: they come from `App` after a rejected submission.
//!
//! Submitting never validates here. The whole form is handed to the core
//! as `ContactEvent::Submit` and the core decides.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::contact::{ContactForm, Field, MESSAGE_MAX_CHARS, ValidationErrors, input_len};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::projects::wrap_lines;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

/// Visible text rows of the message box.
const MESSAGE_MIN_ROWS: u16 = 3;
const MESSAGE_MAX_ROWS: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Send,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Field(Field::Name),
        Focus::Field(Field::Email),
        Focus::Field(Field::Message),
        Focus::Send,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Focus {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// High-level events emitted by the contact form
#[derive(Debug, Clone, PartialEq)]
pub enum ContactEvent {
    /// Ctrl+S anywhere, or Enter on the Send button
    Submit(ContactForm),
    /// Esc: back to browsing
    Leave,
}

pub struct ContactFormState {
    pub form: ContactForm,
    pub focus: Focus,
    /// Byte offset into the focused field (0 when Send has focus)
    cursor: usize,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            focus: Focus::Field(Field::Name),
            cursor: 0,
        }
    }

    /// Clear every field and return focus to Name (after a successful send).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn focus_on(&mut self, focus: Focus) {
        self.focus = focus;
        self.cursor = match focus {
            Focus::Field(field) => self.form.value(field).len(),
            Focus::Send => 0,
        };
    }

    fn insert(&mut self, field: Field, text: &str) -> bool {
        let text: String = if field == Field::Message {
            text.to_string()
        } else {
            text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
        };
        if text.is_empty() {
            return false;
        }
        let cursor = self.cursor;
        self.form.value_mut(field).insert_str(cursor, &text);
        self.cursor += text.len();
        true
    }

    fn edit(&mut self, field: Field, event: &TuiEvent) {
        let value = self.form.value(field);
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert(field, c.encode_utf8(&mut buf));
            }
            TuiEvent::Paste(text) => {
                self.insert(field, text);
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = prev_char_boundary(value, self.cursor);
                let cursor = self.cursor;
                self.form.value_mut(field).drain(prev..cursor);
                self.cursor = prev;
            }
            TuiEvent::Delete if self.cursor < value.len() => {
                let next = next_char_boundary(value, self.cursor);
                let cursor = self.cursor;
                self.form.value_mut(field).drain(cursor..next);
            }
            TuiEvent::CursorLeft if self.cursor > 0 => {
                self.cursor = prev_char_boundary(value, self.cursor);
            }
            TuiEvent::CursorRight if self.cursor < value.len() => {
                self.cursor = next_char_boundary(value, self.cursor);
            }
            TuiEvent::CursorHome => {
                self.cursor = value[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
            }
            TuiEvent::CursorEnd => {
                self.cursor = value[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(value.len());
            }
            _ => {}
        }
    }
}

impl EventHandler for ContactFormState {
    type Event = ContactEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ContactEvent> {
        match (event, self.focus) {
            (TuiEvent::Escape, _) => Some(ContactEvent::Leave),
            (TuiEvent::Send, _) | (TuiEvent::Submit, Focus::Send) => {
                Some(ContactEvent::Submit(self.form.clone()))
            }
            (TuiEvent::Tab | TuiEvent::CursorDown | TuiEvent::Submit, focus) => {
                self.focus_on(focus.next());
                None
            }
            (TuiEvent::BackTab | TuiEvent::CursorUp, focus) => {
                self.focus_on(focus.prev());
                None
            }
            (_, Focus::Field(field)) => {
                self.edit(field, event);
                None
            }
            (_, Focus::Send) => None,
        }
    }
}

/// Byte offset of the character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// First byte shown in a one-line box `width` wide so that `cursor` stays
/// visible.
fn start_of_view(value: &str, cursor: usize, width: u16) -> usize {
    let mut start = 0;
    while start < cursor && value[start..cursor].width() >= width as usize {
        start = next_char_boundary(value, start);
    }
    start
}

/// Transient render wrapper for the contact section.
pub struct ContactPanel<'a> {
    state: &'a mut ContactFormState,
    errors: &'a ValidationErrors,
    email: &'a str,
    location: &'a str,
    editing: bool,
    palette: Palette,
}

impl<'a> ContactPanel<'a> {
    pub fn new(
        state: &'a mut ContactFormState,
        errors: &'a ValidationErrors,
        email: &'a str,
        location: &'a str,
        editing: bool,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            errors,
            email,
            location,
            editing,
            palette,
        }
    }

    fn message_rows(&self, width: u16) -> u16 {
        let rows = wrap_lines(&self.state.form.message, width.saturating_sub(2)).len() as u16;
        rows.clamp(MESSAGE_MIN_ROWS, MESSAGE_MAX_ROWS)
    }

    fn field_block(&self, field: Field) -> Block<'static> {
        let focused = self.editing && self.state.focus == Focus::Field(field);
        let mut border = if focused {
            self.palette.heading()
        } else {
            self.palette.border()
        };
        if self.errors.for_field(field).is_some() {
            border = self.palette.error();
        }
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(format!(" {} ", field.label()), self.palette.text()));
        if field == Field::Message {
            let count = input_len(&self.state.form.message);
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {}/{} ", count, MESSAGE_MAX_CHARS),
                    self.palette.muted(),
                ))
                .right_aligned(),
            );
        }
        block
    }

    fn render_single_line(&self, frame: &mut Frame, field: Field, area: Rect) {
        let block = self.field_block(field);
        let inner = block.inner(area);
        let value = self.state.form.value(field);

        let focused = self.editing && self.state.focus == Focus::Field(field);
        let line = if value.is_empty() {
            Line::from(Span::styled(field.placeholder(), self.palette.muted()))
        } else {
            let cursor = if focused { self.state.cursor } else { value.len() };
            let start = start_of_view(value, cursor, inner.width);
            Line::from(Span::styled(value[start..].to_string(), self.palette.text()))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);

        if focused && inner.width > 0 {
            let visible_before = value[start_of_view(value, self.state.cursor, inner.width)
                ..self.state.cursor]
                .width()
                .min(inner.width as usize - 1);
            frame.set_cursor_position((inner.x + visible_before as u16, inner.y));
        }
    }

    fn render_message(&self, frame: &mut Frame, area: Rect) {
        let block = self.field_block(Field::Message);
        let inner = block.inner(area);
        let value = &self.state.form.message;
        let focused = self.editing && self.state.focus == Focus::Field(Field::Message);

        if value.is_empty() {
            let placeholder =
                Line::from(Span::styled(Field::Message.placeholder(), self.palette.muted()));
            frame.render_widget(Paragraph::new(placeholder).block(block), area);
            if focused {
                frame.set_cursor_position((inner.x, inner.y));
            }
            return;
        }

        let cursor = if focused { self.state.cursor } else { value.len() };
        let rows = wrap_lines(value, inner.width);
        let before = wrap_lines(&value[..cursor], inner.width);
        let cursor_row = before.len().saturating_sub(1);
        let cursor_col = before.last().map(|r| r.width()).unwrap_or(0);

        let visible = inner.height.max(1) as usize;
        let scroll = if focused {
            cursor_row.saturating_sub(visible - 1)
        } else {
            0
        };
        let lines: Vec<Line> = rows
            .into_iter()
            .skip(scroll)
            .take(visible)
            .map(|r| Line::from(Span::styled(r, self.palette.text())))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if focused && inner.width > 0 {
            let x = inner.x + (cursor_col as u16).min(inner.width - 1);
            let y = inner.y + (cursor_row - scroll) as u16;
            frame.set_cursor_position((x, y));
        }
    }

    fn error_line(&self, field: Field) -> Line<'static> {
        match self.errors.for_field(field) {
            Some(error) => Line::from(Span::styled(error.message(), self.palette.error())),
            None => Line::default(),
        }
    }
}

impl Component for ContactPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let message_height = self.message_rows(area.width) + 2;
        let [
            title,
            email,
            location,
            _,
            name_box,
            name_err,
            email_box,
            email_err,
            message_box,
            message_err,
            send,
            hint,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(message_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Line::from(Span::styled("Get In Touch", self.palette.heading())),
            title,
        );
        frame.render_widget(
            Line::from(vec![
                Span::styled("✉ ", self.palette.muted()),
                Span::styled(self.email.to_string(), self.palette.link()),
            ]),
            email,
        );
        frame.render_widget(
            Line::from(vec![
                Span::styled("⌖ ", self.palette.muted()),
                Span::styled(self.location.to_string(), self.palette.text()),
            ]),
            location,
        );

        self.render_single_line(frame, Field::Name, name_box);
        frame.render_widget(self.error_line(Field::Name), name_err);
        self.render_single_line(frame, Field::Email, email_box);
        frame.render_widget(self.error_line(Field::Email), email_err);
        self.render_message(frame, message_box);
        frame.render_widget(self.error_line(Field::Message), message_err);

        let send_style = if self.editing && self.state.focus == Focus::Send {
            self.palette.selected()
        } else {
            self.palette.heading()
        };
        frame.render_widget(
            Line::from(Span::styled("[ Send Message ]", send_style)),
            send,
        );

        let hint_text = if self.editing {
            "Tab next field · Ctrl+J new line · Ctrl+S send · Esc done"
        } else {
            "Enter or e to write a message"
        };
        frame.render_widget(
            Line::from(Span::styled(hint_text, self.palette.muted())),
            hint,
        );
    }
}
