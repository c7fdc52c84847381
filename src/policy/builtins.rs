//! Pre-built policies covering the common trimming, empty-part and
//! quote-handling needs.
//!
//! Every constructor hands back a fresh [`PolicyRef`]; clone the handle when
//! the same policy instance should be recognized as already registered.

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::SplitError;
use crate::policy::{PartContext, Policy, PolicyRef, Verdict};
use crate::segment::Segment;

const NO_EMPTIES_MESSAGE: &str = "split items cannot be empty";
const NOT_EMPTY_FIRST_MESSAGE: &str = "first split item cannot be empty";
const NOT_EMPTY_LAST_MESSAGE: &str = "last split item cannot be empty";
const NOT_EMPTY_INNERS_MESSAGE: &str = "inner items cannot be empty";
const NOT_EMPTY_OUTERS_MESSAGE: &str = "first/last items cannot be empty";
const NO_CONTIGUOUS_QUOTES_MESSAGE: &str = "split item cannot have contiguous quotes";
const NO_MULTI_QUOTES_MESSAGE: &str = "split item cannot have multiple quotes";
const NO_MULTIS_MESSAGE: &str = "split item cannot have multiple parts";

/// Which parts an empty-handling policy looks at.
#[derive(Debug, Clone, Copy)]
enum Scope {
    Any,
    First,
    Last,
    Inners,
    Outers,
}

impl Scope {
    fn applies(self, part: &PartContext<'_>) -> bool {
        match self {
            Scope::Any => true,
            Scope::First => part.is_first(),
            Scope::Last => part.is_last(),
            Scope::Inners => part.is_inner(),
            Scope::Outers => part.is_outer(),
        }
    }
}

struct Trim {
    cutset: String,
}

impl Policy for Trim {
    fn apply(&self, text: String, _part: &PartContext<'_>) -> Result<Verdict, SplitError> {
        let trimmed = text.trim_matches(|c| self.cutset.contains(c));
        if trimmed.len() == text.len() {
            Ok(Verdict::Keep(text))
        } else {
            Ok(Verdict::Keep(trimmed.to_string()))
        }
    }
}

struct RejectEmpty {
    scope: Scope,
    message: String,
}

impl Policy for RejectEmpty {
    fn apply(&self, text: String, part: &PartContext<'_>) -> Result<Verdict, SplitError> {
        if text.is_empty() && self.scope.applies(part) {
            return Err(SplitError::policy_failure(
                self.message.clone(),
                part.start(),
                None,
            ));
        }
        Ok(Verdict::Keep(text))
    }
}

struct IgnoreEmpty {
    scope: Scope,
}

impl Policy for IgnoreEmpty {
    fn apply(&self, text: String, part: &PartContext<'_>) -> Result<Verdict, SplitError> {
        if text.is_empty() && self.scope.applies(part) {
            return Ok(Verdict::Veto);
        }
        Ok(Verdict::Keep(text))
    }
}

struct NoContiguousQuotes {
    message: String,
}

impl Policy for NoContiguousQuotes {
    fn apply(&self, text: String, part: &PartContext<'_>) -> Result<Verdict, SplitError> {
        for pair in part.segments().windows(2) {
            if pair[0].is_quote() && pair[1].is_quote() {
                return Err(SplitError::policy_failure(
                    self.message.clone(),
                    part.start(),
                    Some(&pair[1]),
                ));
            }
        }
        Ok(Verdict::Keep(text))
    }
}

struct NoMultiQuotes {
    message: String,
}

impl Policy for NoMultiQuotes {
    fn apply(&self, text: String, part: &PartContext<'_>) -> Result<Verdict, SplitError> {
        let mut quotes = part.segments().iter().filter(|seg| seg.is_quote());
        if quotes.next().is_some()
            && let Some(second) = quotes.next()
        {
            return Err(SplitError::policy_failure(
                self.message.clone(),
                part.start(),
                Some(second),
            ));
        }
        Ok(Verdict::Keep(text))
    }
}

struct NoMultis {
    message: String,
}

impl Policy for NoMultis {
    fn apply(&self, text: String, part: &PartContext<'_>) -> Result<Verdict, SplitError> {
        if let [_, second, ..] = part.segments() {
            return Err(SplitError::policy_failure(
                self.message.clone(),
                part.start(),
                Some(second),
            ));
        }
        Ok(Verdict::Keep(text))
    }
}

/// Rebuilds a part from its segments, rendering each through `render`.
///
/// A part made of a single non-quote segment (or none at all) is left as the
/// incoming text, so earlier transforms are preserved when there is nothing
/// to rewrite.
fn rebuild_segments(
    text: String,
    part: &PartContext<'_>,
    render: fn(&Segment) -> Cow<'_, str>,
) -> Verdict {
    match part.segments() {
        [] => Verdict::Keep(text),
        [only] if only.is_quote() => Verdict::Keep(render(only).into_owned()),
        [_] => Verdict::Keep(text),
        segments => {
            let mut out = String::with_capacity(text.len());
            for seg in segments {
                if seg.is_quote() {
                    out.push_str(&render(seg));
                } else {
                    out.push_str(seg.text());
                }
            }
            Verdict::Keep(out)
        }
    }
}

struct StripQuotes;

impl Policy for StripQuotes {
    fn apply(&self, text: String, part: &PartContext<'_>) -> Result<Verdict, SplitError> {
        Ok(rebuild_segments(text, part, |seg| {
            Cow::Borrowed(seg.inner_text())
        }))
    }
}

struct UnescapeQuotes;

impl Policy for UnescapeQuotes {
    fn apply(&self, text: String, part: &PartContext<'_>) -> Result<Verdict, SplitError> {
        Ok(rebuild_segments(text, part, |seg| seg.unescaped()))
    }
}

/// Trims leading and trailing spaces from every part.
pub fn trim_spaces() -> PolicyRef {
    trim(" ")
}

/// Trims the given cutset characters from both ends of every part.
pub fn trim(cutset: impl Into<String>) -> PolicyRef {
    Arc::new(Trim {
        cutset: cutset.into(),
    })
}

/// Fails the split when any part is empty.
pub fn no_empties() -> PolicyRef {
    no_empties_msg(NO_EMPTIES_MESSAGE)
}

/// Same as [`no_empties`], with a custom error message.
pub fn no_empties_msg(message: impl Into<String>) -> PolicyRef {
    reject_empty(Scope::Any, message)
}

/// Drops empty parts from the result.
pub fn ignore_empties() -> PolicyRef {
    Arc::new(IgnoreEmpty { scope: Scope::Any })
}

/// Fails the split when the first part is empty.
pub fn not_empty_first() -> PolicyRef {
    not_empty_first_msg(NOT_EMPTY_FIRST_MESSAGE)
}

/// Same as [`not_empty_first`], with a custom error message.
pub fn not_empty_first_msg(message: impl Into<String>) -> PolicyRef {
    reject_empty(Scope::First, message)
}

/// Drops the first part when it is empty.
pub fn ignore_empty_first() -> PolicyRef {
    Arc::new(IgnoreEmpty {
        scope: Scope::First,
    })
}

/// Fails the split when the last part is empty.
pub fn not_empty_last() -> PolicyRef {
    not_empty_last_msg(NOT_EMPTY_LAST_MESSAGE)
}

/// Same as [`not_empty_last`], with a custom error message.
pub fn not_empty_last_msg(message: impl Into<String>) -> PolicyRef {
    reject_empty(Scope::Last, message)
}

/// Drops the last part when it is empty.
pub fn ignore_empty_last() -> PolicyRef {
    Arc::new(IgnoreEmpty { scope: Scope::Last })
}

/// Fails the split when an inner part (neither first nor last) is empty.
pub fn not_empty_inners() -> PolicyRef {
    not_empty_inners_msg(NOT_EMPTY_INNERS_MESSAGE)
}

/// Same as [`not_empty_inners`], with a custom error message.
pub fn not_empty_inners_msg(message: impl Into<String>) -> PolicyRef {
    reject_empty(Scope::Inners, message)
}

/// Drops empty inner parts (neither first nor last).
pub fn ignore_empty_inners() -> PolicyRef {
    Arc::new(IgnoreEmpty {
        scope: Scope::Inners,
    })
}

/// Fails the split when an outer part (first or last) is empty.
pub fn not_empty_outers() -> PolicyRef {
    not_empty_outers_msg(NOT_EMPTY_OUTERS_MESSAGE)
}

/// Same as [`not_empty_outers`], with a custom error message.
pub fn not_empty_outers_msg(message: impl Into<String>) -> PolicyRef {
    reject_empty(Scope::Outers, message)
}

/// Drops empty outer parts (first or last).
pub fn ignore_empty_outers() -> PolicyRef {
    Arc::new(IgnoreEmpty {
        scope: Scope::Outers,
    })
}

/// Fails the split when a part contains two adjacent quote segments.
pub fn no_contiguous_quotes() -> PolicyRef {
    no_contiguous_quotes_msg(NO_CONTIGUOUS_QUOTES_MESSAGE)
}

/// Same as [`no_contiguous_quotes`], with a custom error message.
pub fn no_contiguous_quotes_msg(message: impl Into<String>) -> PolicyRef {
    Arc::new(NoContiguousQuotes {
        message: message.into(),
    })
}

/// Fails the split when a part contains more than one quote segment, not
/// necessarily adjacent.
pub fn no_multi_quotes() -> PolicyRef {
    no_multi_quotes_msg(NO_MULTI_QUOTES_MESSAGE)
}

/// Same as [`no_multi_quotes`], with a custom error message.
pub fn no_multi_quotes_msg(message: impl Into<String>) -> PolicyRef {
    Arc::new(NoMultiQuotes {
        message: message.into(),
    })
}

/// Fails the split when a part is made of more than one segment of any kind.
pub fn no_multis() -> PolicyRef {
    no_multis_msg(NO_MULTIS_MESSAGE)
}

/// Same as [`no_multis`], with a custom error message.
pub fn no_multis_msg(message: impl Into<String>) -> PolicyRef {
    Arc::new(NoMultis {
        message: message.into(),
    })
}

/// Removes the delimiter characters of every quote segment in a part,
/// keeping escape sequences as they are.
pub fn strip_quotes() -> PolicyRef {
    Arc::new(StripQuotes)
}

/// Replaces every quote segment in a part with its unescaped text.
pub fn unescape_quotes() -> PolicyRef {
    Arc::new(UnescapeQuotes)
}

fn reject_empty(scope: Scope, message: impl Into<String>) -> PolicyRef {
    Arc::new(RejectEmpty {
        scope,
        message: message.into(),
    })
}
