//! The single-pass scan over one input: nesting stack, escape
//! disambiguation, boundary flushing.

use crate::enclosure::Enclosure;
use crate::error::SplitError;
use crate::policy::{PartContext, PolicyRef, Verdict};
use crate::segment::Segment;
use crate::splitter::Splitter;

/// An enclosure that has been opened but not yet closed.
#[derive(Debug, Clone, Copy)]
struct OpenEnclosure {
    enclosure: Enclosure,
    open_pos: usize,
}

/// Per-call scan state.
///
/// A fresh context is allocated for every split, so concurrent calls on one
/// splitter share nothing mutable. The nesting stack lives on the heap;
/// depth is bounded only by memory, never by call-stack depth.
pub(crate) struct ScanContext<'s> {
    splitter: &'s Splitter,
    chars: Vec<char>,
    /// Start of the part currently being accumulated.
    part_start: usize,
    /// Innermost open enclosure.
    current: Option<OpenEnclosure>,
    /// Contexts enclosing `current`, outermost first.
    stack: Vec<OpenEnclosure>,
    /// Completed top-level segments of the current part.
    segments: Vec<Segment>,
    retained: Vec<String>,
    vetoed: usize,
}

impl<'s> ScanContext<'s> {
    pub(crate) fn new(splitter: &'s Splitter, input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let separators = chars
            .iter()
            .filter(|&&ch| ch == splitter.separator())
            .count();
        Self {
            splitter,
            chars,
            part_start: 0,
            current: None,
            stack: Vec::new(),
            segments: Vec::new(),
            retained: Vec::with_capacity(separators + 1),
            vetoed: 0,
        }
    }

    pub(crate) fn run(mut self, chain: &[PolicyRef]) -> Result<Vec<String>, SplitError> {
        let separator = self.splitter.separator();
        let total = self.chars.len();
        log::trace!("Splitting {} chars on {:?}", total, separator);

        let mut pos = 0;
        while pos < total {
            let ch = self.chars[pos];
            match self.current {
                None if ch == separator => {
                    self.flush(pos, false, chain)?;
                }
                Some(open) if open.enclosure.is_quote() => {
                    // Quote content is opaque except for the closing rule.
                    if ch == open.enclosure.end() {
                        if open.enclosure.is_double_escaping() {
                            if self.chars.get(pos + 1) == Some(&ch) {
                                // Doubled end char: one literal occurrence.
                                pos += 1;
                            } else {
                                self.close(pos);
                            }
                        } else if !self.escape_run_is_odd(pos, open) {
                            self.close(pos);
                        }
                    }
                }
                current => {
                    // Outside all enclosures, or inside a bracket.
                    if let Some(open) = current
                        && ch == open.enclosure.end()
                    {
                        if !self.bracket_escaped(pos, &open.enclosure) {
                            self.close(pos);
                        }
                    } else if let Some(&enc) = self.splitter.opener(ch) {
                        if !self.bracket_escaped(pos, &enc) {
                            self.open(enc, pos);
                        }
                    } else if let Some(&enc) = self.splitter.closer(ch) {
                        log::debug!("Unopened '{}' at pos {}", ch, pos);
                        return Err(SplitError::Unopened {
                            position: pos,
                            ch,
                            enclosure: enc,
                        });
                    }
                }
            }
            pos += 1;
        }

        if let Some(innermost) = self.current.take() {
            let outermost = self.stack.first().copied().unwrap_or(innermost);
            log::debug!(
                "Unclosed '{}' opened at pos {}",
                outermost.enclosure.start(),
                outermost.open_pos
            );
            return Err(SplitError::Unclosed {
                position: outermost.open_pos,
                ch: outermost.enclosure.start(),
                enclosure: outermost.enclosure,
            });
        }

        // Always flush the trailing span, so a trailing separator yields a
        // trailing empty part.
        self.flush(total, true, chain)?;
        Ok(self.retained)
    }

    /// Whether the quote's end char at `pos` is escaped: an odd-length run
    /// of escape chars immediately precedes it. The run never extends past
    /// the quote's opening char. Runs cannot overlap, so the backward scans
    /// stay O(n) over the whole input.
    fn escape_run_is_odd(&self, pos: usize, open: OpenEnclosure) -> bool {
        let Some(escape) = open.enclosure.escape() else {
            return false;
        };
        let mut escaped = false;
        let mut i = pos;
        while i > open.open_pos + 1 {
            i -= 1;
            if self.chars[i] == escape {
                escaped = !escaped;
            } else {
                break;
            }
        }
        escaped
    }

    /// Whether a bracket's start or end char at `pos` is escaped: the
    /// preceding char equals the bracket's own escape char. Quotes are never
    /// escape-checked here; their escape only governs the closing rule
    /// inside the quote.
    fn bracket_escaped(&self, pos: usize, enclosure: &Enclosure) -> bool {
        if enclosure.is_quote() {
            return false;
        }
        match enclosure.escape() {
            Some(escape) => pos > 0 && self.chars[pos - 1] == escape,
            None => false,
        }
    }

    fn open(&mut self, enclosure: Enclosure, pos: usize) {
        log::debug!("Opened '{}' at pos {}", enclosure.start(), pos);
        match self.current.take() {
            Some(outer) => self.stack.push(outer),
            // A top-level open completes the pending fixed-text segment.
            None => self.flush_fixed(pos),
        }
        self.current = Some(OpenEnclosure {
            enclosure,
            open_pos: pos,
        });
    }

    fn close(&mut self, pos: usize) {
        if let Some(open) = self.current.take() {
            log::debug!("Closed '{}' at pos {}", open.enclosure.end(), pos);
            self.current = self.stack.pop();
            if self.current.is_none() {
                // Back at top level: the whole span, nested content
                // included, becomes one segment.
                let text: String = self.chars[open.open_pos..=pos].iter().collect();
                self.segments
                    .push(Segment::enclosed(open.enclosure, open.open_pos, pos + 1, text));
            }
        }
    }

    /// Records the run of fixed text since the last segment (or the part
    /// start) up to `pos`, when non-empty.
    fn flush_fixed(&mut self, pos: usize) {
        let from = self
            .segments
            .last()
            .map_or(self.part_start, |seg| seg.end());
        if from < pos {
            let text: String = self.chars[from..pos].iter().collect();
            self.segments.push(Segment::fixed(from, pos, text));
        }
    }

    /// Closes out the part ending at `end` (exclusive): completes its
    /// segment list, runs the policy chain, and accounts the outcome.
    fn flush(&mut self, end: usize, is_last: bool, chain: &[PolicyRef]) -> Result<(), SplitError> {
        self.flush_fixed(end);
        let text: String = self.chars[self.part_start..end].iter().collect();
        let part = PartContext {
            start: self.part_start,
            total_len: self.chars.len(),
            retained: self.retained.len(),
            vetoed: self.vetoed,
            is_last,
            segments: &self.segments,
        };

        let mut kept = Some(text);
        for policy in chain {
            let Some(current) = kept.take() else { break };
            match policy.apply(current, &part)? {
                Verdict::Keep(next) => kept = Some(next),
                Verdict::Veto => break,
            }
        }

        match kept {
            Some(text) => self.retained.push(text),
            None => {
                log::debug!("Vetoed part at pos {}", self.part_start);
                self.vetoed += 1;
            }
        }
        self.part_start = end + 1;
        self.segments.clear();
        Ok(())
    }
}
