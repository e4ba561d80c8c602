use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    ForceQuit,       // Ctrl+C, any mode
    ClearCompleted,  // Ctrl+D, any mode
    Submit,

    // TUI-local events (handled directly in TUI)
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    CursorUp,
    CursorDown,
    SwitchFocus, // Tab
    Escape,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
///
/// Read errors are logged and treated as "no event" so a flaky terminal
/// can't take the event loop down.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Map a raw crossterm event to a `TuiEvent`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Windows reports releases too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::trace!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(TuiEvent::ClearCompleted),
        (KeyModifiers::CONTROL, KeyCode::Char('a')) => Some(TuiEvent::CursorHome),
        (KeyModifiers::CONTROL, KeyCode::Char('e')) => Some(TuiEvent::CursorEnd),
        (KeyModifiers::CONTROL, _) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => Some(TuiEvent::SwitchFocus),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('c'))),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            translate(key(KeyModifiers::CONTROL, KeyCode::Char('d'))),
            Some(TuiEvent::ClearCompleted)
        );
        assert_eq!(translate(key(KeyModifiers::CONTROL, KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(
            translate(key(KeyModifiers::NONE, KeyCode::Char('a'))),
            Some(TuiEvent::InputChar('a'))
        );
        assert_eq!(
            translate(key(KeyModifiers::SHIFT, KeyCode::Char('A'))),
            Some(TuiEvent::InputChar('A'))
        );
        assert_eq!(
            translate(key(KeyModifiers::NONE, KeyCode::Enter)),
            Some(TuiEvent::Submit)
        );
        assert_eq!(
            translate(key(KeyModifiers::NONE, KeyCode::Tab)),
            Some(TuiEvent::SwitchFocus)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(release), None);
    }

    #[test]
    fn test_mouse_events() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click), Some(TuiEvent::MouseClick(4, 9)));

        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(wheel), Some(TuiEvent::ScrollDown));
    }

    #[test]
    fn test_paste_and_resize() {
        assert_eq!(
            translate(Event::Paste("milk".to_string())),
            Some(TuiEvent::Paste("milk".to_string()))
        );
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
