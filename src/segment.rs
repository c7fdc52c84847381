//! Read-only descriptors of the sub-spans inside one captured part.

use std::borrow::Cow;

use crate::enclosure::Enclosure;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_TRIM_CUTSET: &str = " \t\n";

/// The kind of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SegmentKind {
    /// Plain text outside any enclosure.
    Fixed,
    /// A top-level quote enclosure span, delimiters included.
    Quote,
    /// A top-level bracket enclosure span, delimiters included.
    Bracket,
}

/// One contiguous span of a captured part.
///
/// The segments of a part tile its character range exactly: runs of fixed
/// text interleaved with complete top-level enclosure spans. A nested
/// enclosure is covered by its outermost span and is not reported
/// separately. Policies use segments to detect structural patterns (say,
/// two adjacent quotes) without re-scanning raw characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    kind: SegmentKind,
    start: usize,
    end: usize,
    text: String,
    enclosure: Option<Enclosure>,
}

impl Segment {
    pub(crate) fn fixed(start: usize, end: usize, text: String) -> Self {
        Self {
            kind: SegmentKind::Fixed,
            start,
            end,
            text,
            enclosure: None,
        }
    }

    pub(crate) fn enclosed(enclosure: Enclosure, start: usize, end: usize, text: String) -> Self {
        let kind = if enclosure.is_quote() {
            SegmentKind::Quote
        } else {
            SegmentKind::Bracket
        };
        Self {
            kind,
            start,
            end,
            text,
            enclosure: Some(enclosure),
        }
    }

    /// Start position in the original input (char index, inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// End position in the original input (char index, exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn is_fixed(&self) -> bool {
        self.kind == SegmentKind::Fixed
    }

    pub fn is_quote(&self) -> bool {
        self.kind == SegmentKind::Quote
    }

    pub fn is_bracket(&self) -> bool {
        self.kind == SegmentKind::Bracket
    }

    /// The enclosure this span was captured under, if any.
    pub fn enclosure(&self) -> Option<&Enclosure> {
        self.enclosure.as_ref()
    }

    /// The raw text of the span, delimiters included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The span's text with the enclosure delimiters removed. Fixed segments
    /// are returned as-is.
    pub(crate) fn inner_text(&self) -> &str {
        if self.kind == SegmentKind::Fixed {
            return &self.text;
        }
        let first = self.text.chars().next().map_or(0, char::len_utf8);
        let last = self.text.chars().next_back().map_or(0, char::len_utf8);
        if self.text.len() >= first + last {
            &self.text[first..self.text.len() - last]
        } else {
            ""
        }
    }

    /// The unescaped text of the span.
    ///
    /// For quote segments the surrounding delimiters are stripped and, when
    /// the quote is escapable, each escaped end character collapses to the
    /// end character itself. Bracket and fixed segments are returned as-is.
    pub fn unescaped(&self) -> Cow<'_, str> {
        let Some(enclosure) = self.enclosure.filter(|enc| enc.is_quote()) else {
            return Cow::Borrowed(&self.text);
        };
        let inner = self.inner_text();
        match enclosure.escape() {
            Some(escape) => {
                let pattern: String = [escape, enclosure.end()].iter().collect();
                if inner.contains(&pattern) {
                    Cow::Owned(inner.replace(&pattern, &enclosure.end().to_string()))
                } else {
                    Cow::Borrowed(inner)
                }
            }
            None => Cow::Borrowed(inner),
        }
    }

    /// Whether this is a fixed segment consisting only of whitespace, using
    /// the default cutset of spaces, tabs and newlines. Always false for
    /// enclosure segments.
    pub fn is_whitespace_only(&self) -> bool {
        self.is_whitespace_only_with(DEFAULT_TRIM_CUTSET)
    }

    /// Same as [`is_whitespace_only`](Segment::is_whitespace_only), with a
    /// caller-chosen trim cutset.
    pub fn is_whitespace_only_with(&self, cutset: &str) -> bool {
        self.kind == SegmentKind::Fixed
            && self.text.trim_matches(|c| cutset.contains(c)).is_empty()
    }
}
