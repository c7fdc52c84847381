//! Enclosure-aware string splitting.
//!
//! `cleave` splits text on a separator character while treating bracketed
//! and quoted regions as opaque: separators inside them are inert, brackets
//! nest, quotes may escape their closing character, and every enclosure
//! opened must eventually close. Each captured part then runs through a
//! chain of policies that can rewrite, veto or reject it before it lands in
//! the result.
//!
//! ```rust
//! use cleave::catalog::{DOUBLE_QUOTES_BACKSLASH_ESCAPED, SQUARE_BRACKETS};
//! use cleave::policy::builtins::{ignore_empties, trim_spaces};
//! use cleave::Splitter;
//!
//! let mut splitter =
//!     Splitter::new(',', &[DOUBLE_QUOTES_BACKSLASH_ESCAPED, SQUARE_BRACKETS])?;
//! splitter.add_default_policies([trim_spaces(), ignore_empties()]);
//!
//! let parts = splitter.split(r#"a, "b, c", [d, e], "#)?;
//! assert_eq!(parts, vec![r#"a"#, r#""b, c""#, r#"[d, e]"#]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Splitting never panics: configuration mistakes surface as
//! [`ConfigError`] when the splitter is built, and malformed input or a
//! rejecting policy surfaces as a single [`SplitError`] carrying the
//! position it refers to.

pub mod enclosure;
pub mod error;
pub mod policy;
pub mod segment;
pub mod splitter;

pub use enclosure::Enclosure;
pub use enclosure::catalog;
pub use error::{ConfigError, SplitError, SplitErrorKind};
pub use policy::{PartContext, Policy, PolicyRef, Verdict};
pub use segment::{Segment, SegmentKind};
pub use splitter::Splitter;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
