//! Enclosure definitions: the start/end character pairs that make a region
//! of the input opaque to the separator.

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod catalog;

/// A start/end character pair delimiting a region where the separator is
/// inert.
///
/// Quote enclosures treat their interior as literal text, recognized only up
/// to their own closing rule. Bracket enclosures allow further brackets and
/// quotes to nest inside. An enclosure is *escapable* when its closing
/// character can occur literally inside without closing it; for quotes whose
/// escape character equals the end character this is double-escaping (a
/// doubled end character stands for one literal occurrence, CSV-style).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Enclosure {
    start: char,
    end: char,
    is_quote: bool,
    escape: Option<char>,
}

impl Enclosure {
    /// A non-escapable quote enclosure.
    pub const fn quote(start: char, end: char) -> Self {
        Self {
            start,
            end,
            is_quote: true,
            escape: None,
        }
    }

    /// A non-escapable bracket enclosure.
    pub const fn bracket(start: char, end: char) -> Self {
        Self {
            start,
            end,
            is_quote: false,
            escape: None,
        }
    }

    pub(crate) const fn quote_escaped(start: char, end: char, escape: char) -> Self {
        Self {
            start,
            end,
            is_quote: true,
            escape: Some(escape),
        }
    }

    /// Derives an escapable copy of this enclosure.
    ///
    /// Fails for bracket enclosures when `escape` equals the start or end
    /// character: such a scheme cannot be told apart from nested brackets.
    pub fn escapable(self, escape: char) -> Result<Self, ConfigError> {
        if !self.is_quote && (escape == self.start || escape == self.end) {
            return Err(ConfigError::EscapeCollision { ch: escape });
        }
        Ok(Self {
            escape: Some(escape),
            ..self
        })
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn end(&self) -> char {
        self.end
    }

    pub fn is_quote(&self) -> bool {
        self.is_quote
    }

    /// The escape character, when the enclosure is escapable.
    pub fn escape(&self) -> Option<char> {
        self.escape
    }

    pub fn is_escapable(&self) -> bool {
        self.escape.is_some()
    }

    /// Double-escaping: the escape character equals the end character, so a
    /// doubled end character stands for one literal one.
    pub(crate) fn is_double_escaping(&self) -> bool {
        self.is_quote && self.escape == Some(self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapable_with_own_end() {
        let enc = Enclosure::quote('"', '"').escapable('"').unwrap();
        assert!(enc.is_escapable());
        assert!(enc.is_double_escaping());
        assert_eq!(enc.escape(), Some('"'));
    }

    #[test]
    fn test_quote_escapable_with_backslash() {
        let enc = Enclosure::quote('"', '"').escapable('\\').unwrap();
        assert!(enc.is_escapable());
        assert!(!enc.is_double_escaping());
    }

    #[test]
    fn test_bracket_escapable_with_distinct_char() {
        let enc = Enclosure::bracket('(', ')').escapable('\\').unwrap();
        assert!(enc.is_escapable());
        assert!(!enc.is_double_escaping());
    }

    #[test]
    fn test_bracket_rejects_start_or_end_as_escape() {
        let base = Enclosure::bracket('(', ')');
        assert_eq!(
            base.escapable('('),
            Err(ConfigError::EscapeCollision { ch: '(' })
        );
        assert_eq!(
            base.escapable(')'),
            Err(ConfigError::EscapeCollision { ch: ')' })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_enclosure_serde_round_trip() {
        let enc = Enclosure::quote('"', '"').escapable('\\').unwrap();
        let json = serde_json::to_string(&enc).unwrap();
        let back: Enclosure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, enc);
    }
}
