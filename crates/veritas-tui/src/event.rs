//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use veritas_app::input_key::InputKey;
use veritas_app::message::Message;
use veritas_core::prelude::*;

/// Poll interval; a timeout produces a `Tick` for the spinner and meter
const TICK_RATE: Duration = Duration::from_millis(50);

/// Convert a crossterm key event to an `InputKey`.
///
/// Keys the app has no binding for map to `None`.
pub fn key_event_to_input(key: event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        _ => None,
    }
}

/// Poll for a terminal event, waiting at most one tick
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(TICK_RATE)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        // Resize needs no message: the next frame is drawn at the new size
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('o')));
    }

    #[test]
    fn test_shifted_char_stays_plain() {
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('A')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_action_keys() {
        for (code, expected) in [
            (KeyCode::Enter, InputKey::Enter),
            (KeyCode::Esc, InputKey::Esc),
            (KeyCode::Tab, InputKey::Tab),
            (KeyCode::Backspace, InputKey::Backspace),
        ] {
            assert_eq!(
                key_event_to_input(KeyEvent::new(code, KeyModifiers::NONE)),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)),
            None
        );
    }
}
