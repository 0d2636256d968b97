// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pattern compilation and matching.
//!
//! Wraps the `regex` crate behind [`CompiledPattern`], which answers the two
//! questions a pattern set asks of each member:
//! - Does the pattern match anywhere in the haystack?
//! - Does a match begin exactly at a given offset?

pub mod matcher;
pub mod options;

pub use matcher::CompiledPattern;
pub use options::CompileOptions;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
