// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match one haystack against an ordered set of regular expressions and
//! report which of them matched.
//!
//! ```
//! use regexset::PatternSet;
//!
//! let set = PatternSet::new([r"[a-z]+@[a-z]+\.(com|org|net)", r"[a-z]+\.(com|org|net)"])?;
//! assert_eq!(set.matches("foo@example.com").matches(), vec![0, 1]);
//! # Ok::<(), regexset::PatternError>(())
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod file_reader;
pub mod matches;
pub mod pattern;
pub mod report;
pub mod set;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;

pub use error::{ConfigError, ExitCode, PatternError};
pub use matches::{SetMatches, SetMatchesIter};
pub use pattern::{CompileOptions, CompiledPattern};
pub use set::{PatternSet, PatternSetBuilder};
