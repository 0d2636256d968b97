// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `regexset` command implementation.
//!
//! Builds a pattern set from flags, a pattern file, or regexset.toml, runs
//! one query against the haystack, and prints the report.

use std::path::Path;

use anyhow::{Context, anyhow};

use regexset::cli::Cli;
use regexset::config::{self, Config};
use regexset::discovery;
use regexset::error::{ConfigError, ExitCode};
use regexset::file_reader::Haystack;
use regexset::report::{self, MatchReport};
use regexset::set::PatternSet;
use regexset::verbose::VerboseLogger;

/// Run the `regexset` command.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let verbose = VerboseLogger::new(cli.verbose);
    let cwd = std::env::current_dir()?;

    let set = load_set(cli, &cwd, &verbose).map_err(ConfigError)?;

    let haystack = read_haystack(cli)?;
    let text = haystack
        .as_str()
        .ok_or_else(|| ConfigError(anyhow!("haystack is not valid UTF-8")))?;
    verbose.section("Haystack");
    verbose.log(&format!("{} bytes", text.len()));

    let report = query(&set, text, cli, &verbose).map_err(|e| ConfigError(e.into()))?;

    let output = report::formatter(cli.output).format(&report)?;
    print!("{}", output);

    Ok(ExitCode::from_matched(report.matched_any()))
}

/// Resolve patterns and options, then compile the set.
///
/// Options come from the config file (explicit or discovered). Patterns come
/// from `-f` and `-e` when given, otherwise from the config file.
fn load_set(cli: &Cli, cwd: &Path, verbose: &VerboseLogger) -> anyhow::Result<PatternSet> {
    let config_path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => discovery::find_config(cwd),
    };
    let mut config = match &config_path {
        Some(path) => {
            verbose.section("Config");
            verbose.log(&path.display().to_string());
            config::load(path)?
        }
        None if cli.has_inline_patterns() => Config::default(),
        None => {
            return Err(anyhow!(
                "no patterns given: pass -e PATTERN, -f FILE, or create {}",
                discovery::CONFIG_FILE_NAME
            ));
        }
    };

    if cli.has_inline_patterns() {
        let mut patterns = match &cli.pattern_file {
            Some(path) => config::read_pattern_file(path)?,
            None => Vec::new(),
        };
        patterns.extend(cli.patterns.iter().cloned());
        config.patterns = patterns;
    }
    if cli.ignore_case {
        config.options.case_insensitive = true;
    }

    verbose.section("Patterns");
    for (index, pattern) in config.patterns.iter().enumerate() {
        verbose.log(&format!("{}: {}", index, pattern));
    }

    config.build()
}

fn read_haystack(cli: &Cli) -> anyhow::Result<Haystack> {
    if let Some(text) = &cli.haystack {
        return Ok(Haystack::from(text.clone()));
    }
    if let Some(path) = &cli.input {
        return Haystack::read(path).with_context(|| format!("failed to read {}", path.display()));
    }
    Haystack::read_from(std::io::stdin().lock()).context("failed to read stdin")
}

/// Run the query selected by `--any` and `--offset`.
///
/// The set is evaluated once; verbose per-pattern lines come from the same result.
fn query(
    set: &PatternSet,
    text: &str,
    cli: &Cli,
    verbose: &VerboseLogger,
) -> regexset::error::Result<MatchReport> {
    if cli.any {
        let matched = match cli.offset {
            Some(offset) => set.is_match_at(text, offset)?,
            None => set.is_match(text),
        };
        return Ok(MatchReport::summary(matched));
    }

    let matches = match cli.offset {
        Some(offset) => set.matches_at(text, offset)?,
        None => set.matches(text),
    };
    verbose.section("Results");
    for (index, slot) in matches.iter().enumerate() {
        let outcome = if slot.is_some() { "matched" } else { "no match" };
        verbose.log(&format!("{}: {}", index, outcome));
    }
    Ok(MatchReport::detail(set, &matches))
}
