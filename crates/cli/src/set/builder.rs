// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern set construction with compile options.

use crate::error::{PatternError, Result};
use crate::pattern::{CompileOptions, CompiledPattern};

use super::PatternSet;

/// Builds a [`PatternSet`] with options applied to every pattern.
///
/// ```
/// use regexset::PatternSetBuilder;
///
/// let set = PatternSetBuilder::new([r"foo", r"\d+"]).case_insensitive(true).build()?;
/// assert!(set.is_match("FOO"));
/// # Ok::<(), regexset::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PatternSetBuilder {
    patterns: Vec<String>,
    options: CompileOptions,
}

impl PatternSetBuilder {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns.into_iter().map(|p| p.as_ref().to_string()).collect(),
            options: CompileOptions::default(),
        }
    }

    /// Replace all options at once (e.g. from a config file).
    pub fn options(&mut self, options: CompileOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.options.case_insensitive = yes;
        self
    }

    /// `^` and `$` match at line boundaries.
    pub fn multi_line(&mut self, yes: bool) -> &mut Self {
        self.options.multi_line = yes;
        self
    }

    pub fn dot_matches_new_line(&mut self, yes: bool) -> &mut Self {
        self.options.dot_matches_new_line = yes;
        self
    }

    /// Allow whitespace and `#` comments in patterns.
    pub fn ignore_whitespace(&mut self, yes: bool) -> &mut Self {
        self.options.ignore_whitespace = yes;
        self
    }

    pub fn unicode(&mut self, yes: bool) -> &mut Self {
        self.options.unicode = yes;
        self
    }

    /// Approximate per-pattern limit on compiled size, in bytes.
    pub fn size_limit(&mut self, bytes: usize) -> &mut Self {
        self.options.size_limit = Some(bytes);
        self
    }

    /// Compile every pattern in order.
    ///
    /// The first pattern that fails aborts the build.
    pub fn build(&self) -> Result<PatternSet> {
        let mut compiled = Vec::with_capacity(self.patterns.len());
        for (index, pattern) in self.patterns.iter().enumerate() {
            match CompiledPattern::new(pattern, &self.options) {
                Ok(p) => compiled.push(p),
                Err(source) => {
                    tracing::debug!(index, pattern = %pattern, "pattern failed to compile");
                    return Err(PatternError::Compile {
                        index,
                        pattern: pattern.clone(),
                        source,
                    });
                }
            }
        }
        tracing::debug!("compiled {} patterns", compiled.len());
        Ok(PatternSet::from_compiled(compiled))
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
