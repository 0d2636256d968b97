// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use regexset::cli::Cli;
use regexset::error::{ConfigError, ExitCode};

mod cmd_match;

fn main() -> std::process::ExitCode {
    init_logging();
    let cli = Cli::parse();

    match cmd_match::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("regexset: {:#}", err);
            if err.is::<ConfigError>() {
                ExitCode::ConfigError.into()
            } else {
                ExitCode::InternalError.into()
            }
        }
    }
}

/// Log to stderr, filtered by `REGEXSET_LOG` (default: warn).
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("REGEXSET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
