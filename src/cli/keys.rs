//! Key decoding: crossterm key events to session commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tactician::Command;

/// Translate a key press. `text_entry` is true while the session takes
/// free text, where printable keys type instead of acting.
pub(crate) fn decode(key: KeyEvent, text_entry: bool) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up => Command::MoveUp,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Enter => Command::Confirm,
        KeyCode::Esc => Command::Cancel,
        KeyCode::Backspace if text_entry => Command::TextBackspace,
        KeyCode::Char(c) if text_entry => Command::TextChar(c),
        KeyCode::Char(c @ '0'..='9') => {
            return c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(Command::digit);
        }
        KeyCode::Char('+' | ' ') => Command::Increment,
        KeyCode::Char('-' | 'x') => Command::Decrement,
        KeyCode::Char('q') => Command::Quit,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(decode(press(KeyCode::Up), false), Some(Command::MoveUp));
        assert_eq!(decode(press(KeyCode::Left), true), Some(Command::MoveLeft));
        assert_eq!(decode(press(KeyCode::Enter), false), Some(Command::Confirm));
        assert_eq!(decode(press(KeyCode::Esc), false), Some(Command::Cancel));
    }

    #[test]
    fn test_value_keys() {
        assert_eq!(decode(press(KeyCode::Char('7')), false), Some(Command::Digit(7)));
        assert_eq!(decode(press(KeyCode::Char('+')), false), Some(Command::Increment));
        assert_eq!(decode(press(KeyCode::Char(' ')), false), Some(Command::Increment));
        assert_eq!(decode(press(KeyCode::Char('x')), false), Some(Command::Decrement));
        assert_eq!(decode(press(KeyCode::Char('q')), false), Some(Command::Quit));
        assert_eq!(decode(press(KeyCode::Char('z')), false), None);
    }

    #[test]
    fn test_text_entry_types_printable_keys() {
        assert_eq!(decode(press(KeyCode::Char('q')), true), Some(Command::TextChar('q')));
        assert_eq!(decode(press(KeyCode::Char('7')), true), Some(Command::TextChar('7')));
        assert_eq!(decode(press(KeyCode::Backspace), true), Some(Command::TextBackspace));
        assert_eq!(decode(press(KeyCode::Backspace), false), None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode(ctrl_c, true), Some(Command::Quit));
        assert_eq!(decode(ctrl_c, false), Some(Command::Quit));
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(decode(ctrl_a, true), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(decode(key, false), None);
    }
}
