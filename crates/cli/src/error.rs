// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use thiserror::Error;

/// Errors produced by pattern sets and their match results.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A pattern string failed to compile. Construction of the set is aborted.
    #[error("pattern {index} ({pattern:?}) failed to compile: {source}")]
    Compile {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A pattern index outside `0..len` was requested from a match result.
    #[error("pattern index {index} out of range for set of {len} patterns")]
    IndexOutOfRange { index: usize, len: usize },

    /// A search offset past the end of the haystack.
    #[error("offset {offset} out of range for haystack of {len} bytes")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// A search offset inside a multi-byte UTF-8 sequence.
    #[error("offset {offset} is not on a UTF-8 character boundary")]
    OffsetNotCharBoundary { offset: usize },
}

impl PatternError {
    /// Index of the offending pattern, for compile errors.
    pub fn pattern_index(&self) -> Option<usize> {
        match self {
            PatternError::Compile { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// A failure caused by bad configuration, arguments, or input rather than
/// by the environment. The binary maps it to [`ExitCode::ConfigError`].
#[derive(Debug, Error)]
#[error("{0:#}")]
pub struct ConfigError(pub anyhow::Error);

/// Result alias for pattern set operations.
pub type Result<T> = std::result::Result<T, PatternError>;

/// Exit codes for the `regexset` binary.
///
/// Follows grep: 0 when something matched, 1 when nothing did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one pattern matched.
    Matched = 0,
    /// No pattern matched.
    NoMatch = 1,
    /// Bad configuration, arguments, or pattern syntax.
    ConfigError = 2,
    /// I/O or other unexpected failure.
    InternalError = 3,
}

impl ExitCode {
    pub fn from_matched(matched: bool) -> Self {
        if matched {
            ExitCode::Matched
        } else {
            ExitCode::NoMatch
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
