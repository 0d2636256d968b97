// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-pattern match results.

use std::iter::FusedIterator;

use serde::Serialize;

use crate::error::{PatternError, Result};

/// Which patterns of a [`crate::PatternSet`] matched one haystack.
///
/// Holds one flag per pattern index, in construction order. A pure value:
/// it keeps no reference to the set that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetMatches {
    matched_any: bool,
    matched: Vec<bool>,
}

impl SetMatches {
    pub(crate) fn new(matched: Vec<bool>) -> Self {
        let matched_any = matched.iter().any(|&m| m);
        Self { matched_any, matched }
    }

    /// Number of pattern slots, whether or not they matched.
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    /// True when the producing set had no patterns.
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    /// True if at least one pattern matched.
    pub fn matched_any(&self) -> bool {
        self.matched_any
    }

    /// Whether the pattern at `index` matched.
    ///
    /// Errors with [`PatternError::IndexOutOfRange`] when `index >= len()`.
    pub fn matched(&self, index: usize) -> Result<bool> {
        self.matched.get(index).copied().ok_or(PatternError::IndexOutOfRange {
            index,
            len: self.matched.len(),
        })
    }

    /// Indices of the matched patterns, ascending.
    pub fn matches(&self) -> Vec<usize> {
        self.iter_matched().collect()
    }

    /// Iterate every slot in order.
    ///
    /// Yields `Some(index)` for a matched slot and `None` for a slot that did
    /// not match, then ends after `len()` items.
    pub fn iter(&self) -> SetMatchesIter<'_> {
        SetMatchesIter { flags: self.matched.iter().enumerate() }
    }

    /// Iterate only the matched indices, ascending.
    pub fn iter_matched(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().flatten()
    }
}

impl<'a> IntoIterator for &'a SetMatches {
    type Item = usize;
    type IntoIter = std::iter::Flatten<SetMatchesIter<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().flatten()
    }
}

/// Cursor over every slot of a [`SetMatches`].
///
/// Created by [`SetMatches::iter`].
#[derive(Debug, Clone)]
pub struct SetMatchesIter<'a> {
    flags: std::iter::Enumerate<std::slice::Iter<'a, bool>>,
}

impl Iterator for SetMatchesIter<'_> {
    type Item = Option<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.flags.next().map(|(index, &matched)| matched.then_some(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.flags.size_hint()
    }
}

impl ExactSizeIterator for SetMatchesIter<'_> {}

impl FusedIterator for SetMatchesIter<'_> {}

#[cfg(test)]
#[path = "matches_tests.rs"]
mod tests;
