//! Test helpers for behavioral specifications.
//!
//! Provides helpers for running the regexset binary against fixtures.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;

pub use tempfile::TempDir;

/// Returns a Command configured to run the regexset binary
pub fn regexset_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("regexset"))
}

/// Returns a Command running in a fresh empty directory, so no
/// regexset.toml is discovered. Keep the TempDir alive for the run.
pub fn isolated_cmd() -> (Command, TempDir) {
    let dir = TempDir::new().unwrap();
    let mut cmd = regexset_cmd();
    cmd.current_dir(dir.path());
    cmd.env_remove("REGEXSET_CONFIG");
    cmd.env_remove("REGEXSET_DEBUG");
    (cmd, dir)
}

/// Like [`isolated_cmd`], but as an `assert_cmd::Command` so stdin can be written.
pub fn isolated_stdin_cmd() -> (assert_cmd::Command, TempDir) {
    let (cmd, dir) = isolated_cmd();
    (assert_cmd::Command::from_std(cmd), dir)
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> std::path::PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    std::path::PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}
