use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Always handled
    ForceQuit, // Ctrl+C
    Resize,

    // Routed by focus
    Submit,
    Escape,
    ToggleFocus,         // Tab
    FocusFilter,         // Ctrl+F
    CycleCategory,       // Ctrl+T
    RecallHistory(usize), // Alt+1..5, zero-based
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
    PageUp,
    PageDown,
}

/// Poll for an event with a timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Translate a key press into a `TuiEvent`. Releases from the keyboard
/// enhancement protocol are dropped; repeats map like presses so held keys
/// keep scrolling.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('f')) => Some(TuiEvent::FocusFilter),
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::CycleCategory),
        (KeyModifiers::ALT, KeyCode::Char(c @ '1'..='5')) => {
            Some(TuiEvent::RecallHistory(c as usize - '1' as usize))
        }
        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(TuiEvent::InputChar(c))
        }
        (_, KeyCode::Tab) => Some(TuiEvent::ToggleFocus),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_map_key_shortcuts() {
        assert_eq!(
            map_key(key(KeyModifiers::CONTROL, KeyCode::Char('c'))),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            map_key(key(KeyModifiers::CONTROL, KeyCode::Char('t'))),
            Some(TuiEvent::CycleCategory)
        );
        assert_eq!(
            map_key(key(KeyModifiers::ALT, KeyCode::Char('1'))),
            Some(TuiEvent::RecallHistory(0))
        );
        assert_eq!(
            map_key(key(KeyModifiers::ALT, KeyCode::Char('5'))),
            Some(TuiEvent::RecallHistory(4))
        );
    }

    #[test]
    fn test_map_key_plain_and_shifted_chars() {
        assert_eq!(
            map_key(key(KeyModifiers::NONE, KeyCode::Char('a'))),
            Some(TuiEvent::InputChar('a'))
        );
        assert_eq!(
            map_key(key(KeyModifiers::SHIFT, KeyCode::Char('A'))),
            Some(TuiEvent::InputChar('A'))
        );
        assert_eq!(map_key(key(KeyModifiers::CONTROL, KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_map_key_ignores_release() {
        let mut event = key(KeyModifiers::NONE, KeyCode::Enter);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event), None);
    }

    #[test]
    fn test_map_key_repeat_acts_like_press() {
        let mut event = key(KeyModifiers::NONE, KeyCode::Down);
        event.kind = KeyEventKind::Repeat;
        assert_eq!(map_key(event), Some(TuiEvent::CursorDown));
    }
}
