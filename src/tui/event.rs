use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::io;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Always handled the same way
    ForceQuit, // Ctrl+C
    Resize,

    // Mode-dependent: meaning decided by the event loop
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    Submit, // Enter
    Send,   // Ctrl+S
    Escape,
    Tab,
    BackTab,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Mouse
    WheelUp,
    WheelDown,
    MouseClick(u16, u16),
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('s')) => Some(TuiEvent::Send),
                // Ctrl+J inserts newline (ASCII LF; Ctrl+Enter sends this in most terminals)
                (KeyModifiers::CONTROL, KeyCode::Char('j')) => Some(TuiEvent::InputChar('\n')),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Tab) => Some(TuiEvent::Tab),
                (_, KeyCode::BackTab) => Some(TuiEvent::BackTab),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::WheelUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::WheelDown),
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            translate(key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Send)
        );
        assert_eq!(
            translate(key(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            Some(TuiEvent::InputChar('\n'))
        );
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(
            translate(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('q'))
        );
        assert_eq!(
            translate(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(TuiEvent::BackTab)
        );
        assert_eq!(translate(key(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_mouse_events() {
        assert_eq!(
            translate(mouse(MouseEventKind::ScrollDown)),
            Some(TuiEvent::WheelDown)
        );
        assert_eq!(
            translate(mouse(MouseEventKind::ScrollUp)),
            Some(TuiEvent::WheelUp)
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(TuiEvent::MouseClick(7, 3))
        );
        assert_eq!(translate(mouse(MouseEventKind::Moved)), None);
    }
}
