// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::fmt::Write;

use super::{MatchReport, ReportFormatter};

/// One `<index>\t<pattern>` line per matched pattern.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &MatchReport) -> anyhow::Result<String> {
        let mut out = String::new();
        match report {
            MatchReport::Summary { matched_any } => writeln!(out, "{}", matched_any)?,
            MatchReport::Detail { matches, patterns, .. } => {
                for (index, pattern) in matches.iter().zip(patterns) {
                    writeln!(out, "{}\t{}", index, pattern)?;
                }
            }
        }
        Ok(out)
    }
}
