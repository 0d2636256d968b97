// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern adapter over `regex::Regex`.

use regex::Regex;

use super::CompileOptions;

/// A single compiled regular expression.
///
/// Offsets are byte offsets into the haystack. Callers must pass an offset
/// that is `<= text.len()` and on a char boundary; [`crate::PatternSet`]
/// validates this before calling in.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Compile `pattern` with the given options.
    pub fn new(pattern: &str, options: &CompileOptions) -> Result<Self, regex::Error> {
        let regex = options.builder(pattern).build()?;
        Ok(Self { regex })
    }

    /// The pattern source as supplied.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Unanchored search: true if the pattern matches anywhere in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// True if a match of this pattern begins exactly at `offset`.
    ///
    /// The haystack is viewed from `offset` onward, so `\A` and `^` hold at
    /// `offset`. Text before `offset` is not visible either: `\b` at `offset`
    /// treats it as the start of input, so `\bexample` matches `fooexample`
    /// at offset 3. The engine reports the leftmost match, so a match can
    /// begin at `offset` exactly when the leftmost match in the tail begins
    /// at 0. When nothing begins at `offset` the search still runs over the
    /// rest of the tail.
    pub fn matches_at(&self, text: &str, offset: usize) -> bool {
        let Some(tail) = text.get(offset..) else {
            return false;
        };
        self.regex.find(tail).is_some_and(|m| m.start() == 0)
    }
}
