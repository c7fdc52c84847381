//! The splitter: a validated enclosure registry plus the default-policy
//! list, shared across calls.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::enclosure::Enclosure;
use crate::error::{ConfigError, SplitError};
use crate::policy::PolicyRef;
use crate::splitter::scanner::ScanContext;

mod scanner;

/// An enclosure-aware splitter.
///
/// Built once with [`Splitter::new`] and reusable for any number of inputs.
/// The configuration (separator and enclosure registry) is immutable;
/// the only mutable state is the default-policy list, which requires
/// `&mut self`, so it cannot change while a `split` borrow is live. With
/// shared access, concurrent `split` calls are safe: each call scans in its
/// own freshly allocated context.
#[derive(Clone)]
pub struct Splitter {
    separator: char,
    openers: HashMap<char, Enclosure>,
    closers: HashMap<char, Enclosure>,
    default_policies: Vec<PolicyRef>,
}

impl Splitter {
    /// Builds a splitter for `separator`, honoring the given enclosures.
    ///
    /// Fails when two enclosures share a start character or share an end
    /// character; the error names the colliding index. Splitting itself
    /// never reports configuration problems.
    pub fn new(separator: char, enclosures: &[Enclosure]) -> Result<Self, ConfigError> {
        let mut openers = HashMap::with_capacity(enclosures.len());
        let mut closers = HashMap::with_capacity(enclosures.len());
        for (index, enc) in enclosures.iter().enumerate() {
            if openers.contains_key(&enc.start()) {
                return Err(ConfigError::DuplicateStart {
                    index,
                    ch: enc.start(),
                });
            }
            if closers.contains_key(&enc.end()) {
                return Err(ConfigError::DuplicateEnd {
                    index,
                    ch: enc.end(),
                });
            }
            openers.insert(enc.start(), *enc);
            closers.insert(enc.end(), *enc);
        }
        Ok(Self {
            separator,
            openers,
            closers,
            default_policies: Vec::new(),
        })
    }

    /// Registers default policies applied to every subsequent `split` call,
    /// after any already registered.
    ///
    /// A handle that is already registered (same `Arc` identity) is skipped,
    /// so re-adding is harmless.
    pub fn add_default_policies(&mut self, policies: impl IntoIterator<Item = PolicyRef>) {
        for policy in policies {
            if !self
                .default_policies
                .iter()
                .any(|existing| Arc::ptr_eq(existing, &policy))
            {
                self.default_policies.push(policy);
            }
        }
    }

    /// Splits `input` on the separator, running each captured part through
    /// the default policies.
    pub fn split(&self, input: &str) -> Result<Vec<String>, SplitError> {
        self.split_with(input, &[])
    }

    /// Same as [`split`](Splitter::split), with call-scoped extra policies
    /// appended after the defaults. Handles already present in the chain
    /// (same `Arc` identity) run only once, at their first position.
    pub fn split_with(
        &self,
        input: &str,
        extras: &[PolicyRef],
    ) -> Result<Vec<String>, SplitError> {
        #[cfg(debug_assertions)]
        crate::init_logger();

        let chain = self.policy_chain(extras);
        ScanContext::new(self, input).run(&chain)
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub(crate) fn opener(&self, ch: char) -> Option<&Enclosure> {
        self.openers.get(&ch)
    }

    pub(crate) fn closer(&self, ch: char) -> Option<&Enclosure> {
        self.closers.get(&ch)
    }

    fn policy_chain(&self, extras: &[PolicyRef]) -> Vec<PolicyRef> {
        let mut chain: Vec<PolicyRef> =
            Vec::with_capacity(self.default_policies.len() + extras.len());
        for policy in self.default_policies.iter().chain(extras) {
            if !chain.iter().any(|seen| Arc::ptr_eq(seen, policy)) {
                chain.push(Arc::clone(policy));
            }
        }
        chain
    }
}

impl fmt::Debug for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Splitter")
            .field("separator", &self.separator)
            .field("enclosures", &self.openers.len())
            .field("default_policies", &self.default_policies.len())
            .finish()
    }
}
