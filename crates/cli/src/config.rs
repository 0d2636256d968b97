// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern set configuration.
//!
//! A `regexset.toml` lists patterns in order plus the compile options
//! applied to all of them. Unknown keys are errors.

use std::path::Path;

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::pattern::CompileOptions;
use crate::set::{PatternSet, PatternSetBuilder};

/// Only supported config format version.
pub const CONFIG_VERSION: u32 = 1;

/// Contents of a regexset.toml file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version (currently 1).
    pub version: u32,

    /// Patterns in index order.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Compile options for every pattern.
    #[serde(default)]
    pub options: CompileOptions,
}

impl Config {
    /// Parse config text. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if config.version != CONFIG_VERSION {
            bail!(
                "{}: unsupported config version {} (expected {})",
                path.display(),
                config.version,
                CONFIG_VERSION
            );
        }
        Ok(config)
    }

    /// Builder for a pattern set with this config's patterns and options.
    pub fn builder(&self) -> PatternSetBuilder {
        let mut builder = PatternSetBuilder::new(&self.patterns);
        builder.options(self.options.clone());
        builder
    }

    /// Compile this config's patterns into a set.
    pub fn build(&self) -> anyhow::Result<PatternSet> {
        Ok(self.builder().build()?)
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = Config::parse(&content, path)?;
    tracing::debug!("loaded {} patterns from {}", config.patterns.len(), path.display());
    Ok(config)
}

/// Read a pattern file: one pattern per line.
///
/// Blank lines and lines starting with `#` are skipped. Trailing `\r` is
/// stripped; other whitespace is part of the pattern.
pub fn read_pattern_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pattern file {}", path.display()))?;
    Ok(parse_pattern_lines(&content))
}

pub(crate) fn parse_pattern_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
