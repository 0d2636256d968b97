// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match report output.
//!
//! Turns the outcome of one query into text or JSON.

mod json;
mod text;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::matches::SetMatches;
use crate::set::PatternSet;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Outcome of one query, ready to format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MatchReport {
    /// Only whether anything matched (`--any`).
    Summary { matched_any: bool },
    /// Every matched index and its pattern source.
    Detail {
        len: usize,
        matched_any: bool,
        matches: Vec<usize>,
        patterns: Vec<String>,
    },
}

impl MatchReport {
    pub fn summary(matched_any: bool) -> Self {
        MatchReport::Summary { matched_any }
    }

    /// Build a detailed report from `matches`, produced by `set`.
    pub fn detail(set: &PatternSet, matches: &SetMatches) -> Self {
        let sources: Vec<&str> = set.patterns().collect();
        let indices = matches.matches();
        let patterns =
            indices.iter().filter_map(|&i| sources.get(i)).map(|s| s.to_string()).collect();
        MatchReport::Detail {
            len: matches.len(),
            matched_any: matches.matched_any(),
            matches: indices,
            patterns,
        }
    }

    pub fn matched_any(&self) -> bool {
        match self {
            MatchReport::Summary { matched_any } | MatchReport::Detail { matched_any, .. } => {
                *matched_any
            }
        }
    }
}

/// Formats a match report.
pub trait ReportFormatter {
    fn format(&self, report: &MatchReport) -> anyhow::Result<String>;
}

/// Formatter for the requested output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
