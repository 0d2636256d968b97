// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered sets of compiled patterns.
//!
//! A [`PatternSet`] answers, for one haystack, which of its patterns match.
//! Each pattern is evaluated on its own; the outcome for pattern `i` never
//! depends on any other pattern.

pub mod builder;

pub use builder::PatternSetBuilder;

use crate::error::{PatternError, Result};
use crate::matches::SetMatches;
use crate::pattern::CompiledPattern;

/// An immutable, ordered collection of compiled patterns.
///
/// The position of a pattern in the sequence given at construction is its
/// index in every [`SetMatches`] this set produces.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Compile `patterns` in order with default options.
    ///
    /// Fails on the first pattern that does not compile; no partial set is
    /// returned.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PatternSetBuilder::new(patterns).build()
    }

    /// A set with no patterns. Nothing matches it.
    pub fn empty() -> Self {
        Self { patterns: Vec::new() }
    }

    pub(crate) fn from_compiled(patterns: Vec<CompiledPattern>) -> Self {
        Self { patterns }
    }

    /// Number of patterns in the set.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern sources, in index order.
    pub fn patterns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.patterns.iter().map(CompiledPattern::as_str)
    }

    /// True if any pattern matches anywhere in `text`.
    ///
    /// Stops at the first matching pattern.
    pub fn is_match(&self, text: &str) -> bool {
        tracing::trace!(patterns = self.len(), len = text.len(), "is_match");
        self.patterns.iter().any(|p| p.matches(text))
    }

    /// True if any pattern has a match beginning exactly at byte `offset`.
    ///
    /// `offset` must be `<= text.len()` and on a char boundary, otherwise
    /// an offset error is returned. At `offset == text.len()` only patterns
    /// that match the empty string there succeed.
    pub fn is_match_at(&self, text: &str, offset: usize) -> Result<bool> {
        check_offset(text, offset)?;
        tracing::trace!(patterns = self.len(), len = text.len(), offset, "is_match_at");
        Ok(self.patterns.iter().any(|p| p.matches_at(text, offset)))
    }

    /// Same as [`is_match_at`](Self::is_match_at).
    ///
    /// Kept as a separate name for anchored membership checks.
    pub fn read_matches_at(&self, text: &str, offset: usize) -> Result<bool> {
        self.is_match_at(text, offset)
    }

    /// Evaluate every pattern against `text` and record each outcome.
    pub fn matches(&self, text: &str) -> SetMatches {
        tracing::trace!(patterns = self.len(), len = text.len(), "matches");
        SetMatches::new(self.patterns.iter().map(|p| p.matches(text)).collect())
    }

    /// Evaluate every pattern with the match anchored at byte `offset`.
    ///
    /// Offset rules are those of [`is_match_at`](Self::is_match_at).
    pub fn matches_at(&self, text: &str, offset: usize) -> Result<SetMatches> {
        check_offset(text, offset)?;
        tracing::trace!(patterns = self.len(), len = text.len(), offset, "matches_at");
        Ok(SetMatches::new(self.patterns.iter().map(|p| p.matches_at(text, offset)).collect()))
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::empty()
    }
}

/// Reject offsets the engine cannot start a search at.
fn check_offset(text: &str, offset: usize) -> Result<()> {
    if offset > text.len() {
        return Err(PatternError::OffsetOutOfRange { offset, len: text.len() });
    }
    if !text.is_char_boundary(offset) {
        return Err(PatternError::OffsetNotCharBoundary { offset });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
