//! Operator callsign entry.

use crate::command::Command;

/// Longest callsign the operator can type.
pub const MAX_CALLSIGN_LEN: usize = 20;

/// Result of feeding a command to the callsign field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallsignOutcome {
    /// Nothing changed.
    Ignored,
    /// The text was edited.
    Edited,
    /// The operator confirmed a valid callsign (normalized).
    Submitted(String),
}

/// Text field for the operator's callsign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallsignInput {
    text: String,
}

impl CallsignInput {
    /// Create an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether confirming now would be accepted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        normalize(&self.text).is_some()
    }

    /// Apply one command.
    pub fn handle(&mut self, command: Command) -> CallsignOutcome {
        match command {
            Command::TextChar(c) if is_callsign_char(c) && self.text.len() < MAX_CALLSIGN_LEN => {
                self.text.push(c);
                CallsignOutcome::Edited
            }
            Command::TextBackspace if self.text.pop().is_some() => CallsignOutcome::Edited,
            Command::Confirm => normalize(&self.text)
                .map_or(CallsignOutcome::Ignored, CallsignOutcome::Submitted),
            _ => CallsignOutcome::Ignored,
        }
    }
}

fn is_callsign_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' '
}

/// Trim and uppercase a raw callsign.
///
/// Returns `None` for blank input, for input longer than
/// [`MAX_CALLSIGN_LEN`], or for characters other than ASCII letters,
/// digits and spaces.
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.len() > MAX_CALLSIGN_LEN
        || !trimmed.chars().all(is_callsign_char)
    {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(input: &mut CallsignInput, text: &str) {
        for c in text.chars() {
            input.handle(Command::TextChar(c));
        }
    }

    #[test]
    fn test_submit_normalizes() {
        let mut input = CallsignInput::new();
        type_text(&mut input, " ace 7 ");
        assert_eq!(
            input.handle(Command::Confirm),
            CallsignOutcome::Submitted("ACE 7".to_string())
        );
    }

    #[test]
    fn test_blank_is_rejected() {
        let mut input = CallsignInput::new();
        assert_eq!(input.handle(Command::Confirm), CallsignOutcome::Ignored);

        type_text(&mut input, "   ");
        assert!(!input.can_submit());
        assert_eq!(input.handle(Command::Confirm), CallsignOutcome::Ignored);
    }

    #[test]
    fn test_filters_characters() {
        let mut input = CallsignInput::new();
        type_text(&mut input, "a-b_c!");
        assert_eq!(input.text(), "abc");
        assert_eq!(
            input.handle(Command::TextChar('é')),
            CallsignOutcome::Ignored
        );
    }

    #[test]
    fn test_length_cap() {
        let mut input = CallsignInput::new();
        type_text(&mut input, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(input.text().len(), MAX_CALLSIGN_LEN);
        assert_eq!(input.text(), "ABCDEFGHIJKLMNOPQRST");
    }

    #[test]
    fn test_backspace() {
        let mut input = CallsignInput::new();
        assert_eq!(input.handle(Command::TextBackspace), CallsignOutcome::Ignored);
        type_text(&mut input, "AB");
        assert_eq!(input.handle(Command::TextBackspace), CallsignOutcome::Edited);
        assert_eq!(input.text(), "A");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("maverick"), Some("MAVERICK".to_string()));
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("bad/name"), None);
        assert_eq!(normalize("X".repeat(21).as_str()), None);
        // Padding does not count towards the length cap
        let padded = format!("   {}   ", "M".repeat(MAX_CALLSIGN_LEN));
        assert_eq!(normalize(&padded), Some("M".repeat(MAX_CALLSIGN_LEN)));
        assert_eq!(normalize("\tmaverick\n"), Some("MAVERICK".to_string()));
    }
}
