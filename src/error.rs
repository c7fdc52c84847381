//! Error types for splitter construction and splitting.

use std::error::Error;
use std::fmt;

use crate::enclosure::Enclosure;
use crate::segment::Segment;

/// Errors detected while building a [`Splitter`](crate::Splitter).
///
/// These are configuration mistakes. They are reported at construction time
/// and can never occur during a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An enclosure's start character is already registered by an earlier one.
    DuplicateStart { index: usize, ch: char },
    /// An enclosure's end character is already registered by an earlier one.
    DuplicateEnd { index: usize, ch: char },
    /// A bracket enclosure was given its own start or end character as
    /// escape, which would make nested same-type brackets undetectable.
    EscapeCollision { ch: char },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateStart { index, ch } => {
                write!(f, "existing start character '{}' in enclosure [{}]", ch, index)
            }
            Self::DuplicateEnd { index, ch } => {
                write!(f, "existing end character '{}' in enclosure [{}]", ch, index)
            }
            Self::EscapeCollision { ch } => {
                write!(f, "bracket enclosures cannot use '{}' as their escape character", ch)
            }
        }
    }
}

impl Error for ConfigError {}

/// The kind of a [`SplitError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitErrorKind {
    Unopened,
    Unclosed,
    PolicyFailed,
    Wrapped,
}

/// Errors surfaced by [`Splitter::split`](crate::Splitter::split).
///
/// Every failing call returns exactly one of these; no partial result
/// accompanies a failure.
#[derive(Debug)]
pub enum SplitError {
    /// A registered closing character was met with no matching open
    /// enclosure.
    Unopened {
        position: usize,
        ch: char,
        enclosure: Enclosure,
    },
    /// Input ended with one or more enclosures still open. Reports the
    /// outermost one.
    Unclosed {
        position: usize,
        ch: char,
        enclosure: Enclosure,
    },
    /// A policy rejected a captured part.
    PolicyFailed {
        message: String,
        position: usize,
        ch: Option<char>,
        enclosure: Option<Enclosure>,
    },
    /// A policy returned an external failure; the cause is preserved.
    Wrapped {
        position: usize,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl SplitError {
    /// Builds a `PolicyFailed` error. Position, character and enclosure are
    /// taken from `segment` when the policy references one, otherwise the
    /// part's start position is used.
    pub fn policy_failure(
        message: impl Into<String>,
        position: usize,
        segment: Option<&Segment>,
    ) -> Self {
        match segment {
            Some(seg) => Self::PolicyFailed {
                message: message.into(),
                position: seg.start(),
                ch: seg.enclosure().map(|enc| enc.start()),
                enclosure: seg.enclosure().copied(),
            },
            None => Self::PolicyFailed {
                message: message.into(),
                position,
                ch: None,
                enclosure: None,
            },
        }
    }

    /// Wraps an external failure raised by a policy.
    pub fn wrap(cause: impl Into<Box<dyn Error + Send + Sync>>, position: usize) -> Self {
        Self::Wrapped {
            position,
            source: cause.into(),
        }
    }

    pub fn kind(&self) -> SplitErrorKind {
        match self {
            Self::Unopened { .. } => SplitErrorKind::Unopened,
            Self::Unclosed { .. } => SplitErrorKind::Unclosed,
            Self::PolicyFailed { .. } => SplitErrorKind::PolicyFailed,
            Self::Wrapped { .. } => SplitErrorKind::Wrapped,
        }
    }

    /// Position in the original input the error refers to (char index).
    pub fn position(&self) -> usize {
        match self {
            Self::Unopened { position, .. }
            | Self::Unclosed { position, .. }
            | Self::PolicyFailed { position, .. }
            | Self::Wrapped { position, .. } => *position,
        }
    }

    /// The offending character, when the error refers to one.
    pub fn character(&self) -> Option<char> {
        match self {
            Self::Unopened { ch, .. } | Self::Unclosed { ch, .. } => Some(*ch),
            Self::PolicyFailed { ch, .. } => *ch,
            Self::Wrapped { .. } => None,
        }
    }

    /// The enclosure involved, when the error refers to one.
    pub fn enclosure(&self) -> Option<&Enclosure> {
        match self {
            Self::Unopened { enclosure, .. } | Self::Unclosed { enclosure, .. } => Some(enclosure),
            Self::PolicyFailed { enclosure, .. } => enclosure.as_ref(),
            Self::Wrapped { .. } => None,
        }
    }

    /// The wrapped external cause, for [`SplitError::Wrapped`].
    pub fn wrapped(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Wrapped { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unopened { position, ch, .. } => {
                write!(f, "unopened '{}' at position {}", ch, position)
            }
            Self::Unclosed { position, ch, .. } => {
                write!(f, "unclosed '{}' at position {}", ch, position)
            }
            Self::PolicyFailed { message, .. } => f.write_str(message),
            Self::Wrapped { source, .. } => write!(f, "{}", source),
        }
    }
}

impl Error for SplitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Wrapped { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enclosure::catalog::PARENTHESIS;

    #[test]
    fn test_unopened_message() {
        let err = SplitError::Unopened {
            position: 16,
            ch: ')',
            enclosure: PARENTHESIS,
        };
        assert_eq!(err.to_string(), "unopened ')' at position 16");
        assert_eq!(err.kind(), SplitErrorKind::Unopened);
        assert_eq!(err.position(), 16);
        assert_eq!(err.character(), Some(')'));
    }

    #[test]
    fn test_unclosed_message() {
        let err = SplitError::Unclosed {
            position: 3,
            ch: '(',
            enclosure: PARENTHESIS,
        };
        assert_eq!(err.to_string(), "unclosed '(' at position 3");
        assert_eq!(err.enclosure(), Some(&PARENTHESIS));
    }

    #[test]
    fn test_policy_failure_without_segment() {
        let err = SplitError::policy_failure("whoops", 16, None);
        assert_eq!(err.to_string(), "whoops");
        assert_eq!(err.kind(), SplitErrorKind::PolicyFailed);
        assert_eq!(err.position(), 16);
        assert_eq!(err.character(), None);
        assert!(err.enclosure().is_none());
    }

    #[test]
    fn test_policy_failure_takes_position_from_segment() {
        let seg = Segment::enclosed(PARENTHESIS, 5, 11, "(a/b)".to_string());
        let err = SplitError::policy_failure("whoops", 0, Some(&seg));
        assert_eq!(err.to_string(), "whoops");
        assert_eq!(err.position(), 5);
        assert_eq!(err.character(), Some('('));
        assert_eq!(err.enclosure(), Some(&PARENTHESIS));
    }

    #[test]
    fn test_wrapped_renders_cause_unchanged() {
        let cause = std::io::Error::other("whoops");
        let err = SplitError::wrap(cause, 4);
        assert_eq!(err.to_string(), "whoops");
        assert_eq!(err.kind(), SplitErrorKind::Wrapped);
        assert_eq!(err.position(), 4);
        assert!(err.wrapped().is_some());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::DuplicateStart { index: 1, ch: '{' };
        assert_eq!(err.to_string(), "existing start character '{' in enclosure [1]");
        let err = ConfigError::DuplicateEnd { index: 1, ch: '}' };
        assert_eq!(err.to_string(), "existing end character '}' in enclosure [1]");
    }
}
