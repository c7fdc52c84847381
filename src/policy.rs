//! The post-capture policy pipeline.
//!
//! Each captured part is threaded through an ordered chain of policies
//! before it lands in the result: the splitter's default policies in
//! registration order, then any call-scoped extras, with duplicate handles
//! (same `Arc` identity) removed. Every policy sees the previous policy's
//! output text, so transforms compose. The chain short-circuits on the
//! first veto (the part is silently dropped) or error (the whole split
//! call fails).

use std::sync::Arc;

use crate::error::SplitError;
use crate::segment::Segment;

pub mod builtins;

/// What a [`Policy`] decided about one captured part.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Retain the part, possibly rewritten; later policies see this text.
    Keep(String),
    /// Silently drop the part and skip the remaining policies. A veto is a
    /// successful exclusion, not a failure.
    Veto,
}

/// Read-only context describing one captured part, handed to each policy
/// alongside the (possibly already rewritten) text.
#[derive(Debug, Clone, Copy)]
pub struct PartContext<'a> {
    pub(crate) start: usize,
    pub(crate) total_len: usize,
    pub(crate) retained: usize,
    pub(crate) vetoed: usize,
    pub(crate) is_last: bool,
    pub(crate) segments: &'a [Segment],
}

impl<'a> PartContext<'a> {
    /// Start position of the part in the original input (char index).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Total length of the original input, in chars.
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Number of parts already accepted into the result.
    pub fn retained(&self) -> usize {
        self.retained
    }

    /// Number of parts already dropped by policy vetoes.
    pub fn vetoed(&self) -> usize {
        self.vetoed
    }

    /// True only for the flush performed at end of input.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// The ordered, gapless segments tiling this part.
    pub fn segments(&self) -> &'a [Segment] {
        self.segments
    }

    /// Whether this is the first part emitted: nothing retained or vetoed
    /// yet.
    pub fn is_first(&self) -> bool {
        self.retained == 0 && self.vetoed == 0
    }

    /// First or last.
    pub fn is_outer(&self) -> bool {
        self.is_first() || self.is_last
    }

    /// Neither first nor last.
    pub fn is_inner(&self) -> bool {
        !self.is_outer()
    }
}

/// A transform/validate/veto step applied to each captured part.
///
/// Policies are pure functions of their input: they receive the previous
/// policy's output text plus the read-only part context, and either rewrite
/// the text, veto the part, or fail the whole call. Closures with the
/// matching signature implement `Policy` directly.
pub trait Policy: Send + Sync {
    fn apply(&self, text: String, part: &PartContext<'_>) -> Result<Verdict, SplitError>;
}

/// Shared handle to a policy.
///
/// Policy deduplication is by handle identity (`Arc::ptr_eq`), never by
/// value: clone the handle when the same policy should be recognized as
/// already registered.
pub type PolicyRef = Arc<dyn Policy>;

impl<F> Policy for F
where
    F: Fn(String, &PartContext<'_>) -> Result<Verdict, SplitError> + Send + Sync,
{
    fn apply(&self, text: String, part: &PartContext<'_>) -> Result<Verdict, SplitError> {
        self(text, part)
    }
}
