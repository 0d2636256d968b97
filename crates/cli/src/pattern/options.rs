// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile options applied uniformly to every pattern in a set.

use regex::RegexBuilder;
use serde::Deserialize;

/// Flags passed to the regex engine when compiling each pattern.
///
/// Inline flags inside a pattern (e.g. `(?i)`) still override these.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CompileOptions {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
    pub unicode: bool,
    /// Approximate upper bound in bytes on each compiled pattern.
    /// `None` keeps the engine default.
    pub size_limit: Option<usize>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            unicode: true,
            size_limit: None,
        }
    }
}

impl CompileOptions {
    /// Configure a `RegexBuilder` for `pattern` with these options.
    pub(crate) fn builder(&self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .unicode(self.unicode);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder
    }
}
