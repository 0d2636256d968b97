// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Match text against a set of regular expressions and report which matched
#[derive(Parser)]
#[command(name = "regexset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pattern to match; repeat for more (order gives the pattern index)
    #[arg(short = 'e', long = "regexp", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Read patterns from a file, one per line
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub pattern_file: Option<PathBuf>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "REGEXSET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Text to match (reads --input or stdin when absent)
    #[arg(value_name = "HAYSTACK")]
    pub haystack: Option<String>,

    /// Read the haystack from a file
    #[arg(long, value_name = "FILE", conflicts_with = "haystack")]
    pub input: Option<PathBuf>,

    /// Only count matches beginning at this byte offset
    #[arg(long, value_name = "N")]
    pub offset: Option<usize>,

    /// Only report whether any pattern matched
    #[arg(long)]
    pub any: bool,

    /// Compile every pattern case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, env = "REGEXSET_DEBUG")]
    pub verbose: bool,
}

impl Cli {
    /// True when patterns were given on the command line rather than via config.
    pub fn has_inline_patterns(&self) -> bool {
        !self.patterns.is_empty() || self.pattern_file.is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
