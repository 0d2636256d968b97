// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for regexset.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Patterns come from a discovered regexset.toml
#[test]
fn discovered_config_supplies_patterns() {
    let mut cmd = regexset_cmd();
    cmd.env_remove("REGEXSET_CONFIG")
        .current_dir(fixture("email"))
        .arg("foo@example.com")
        .assert()
        .success()
        .stdout("0\t[a-z]+@[a-z]+\\.(com|org|net)\n1\t[a-z]+\\.(com|org|net)\n");
}

/// Config options apply to patterns given with -e
#[test]
fn config_options_apply_to_inline_patterns() {
    let mut cmd = regexset_cmd();
    cmd.env_remove("REGEXSET_CONFIG")
        .current_dir(fixture("case-insensitive"))
        .args(["-e", "hello", "HELLO WORLD"])
        .assert()
        .success()
        .stdout("0\thello\n");
}

/// Explicit --config wins over discovery
#[test]
fn explicit_config_path() {
    let (mut cmd, _dir) = isolated_cmd();
    cmd.arg("--config")
        .arg(fixture("email").join("regexset.toml"))
        .arg("example.org")
        .assert()
        .success()
        .stdout("1\t[a-z]+\\.(com|org|net)\n");
}

#[test]
fn config_from_environment() {
    let (mut cmd, _dir) = isolated_cmd();
    cmd.env("REGEXSET_CONFIG", fixture("email").join("regexset.toml"))
        .arg("nothing here")
        .assert()
        .code(1);
}

/// Unknown keys are errors
#[test]
fn unknown_config_key_fails() {
    let (mut cmd, dir) = isolated_cmd();
    std::fs::write(dir.path().join("regexset.toml"), "version = 1\nunknown_key = true\n").unwrap();
    cmd.arg("text").assert().code(2).stderr(predicates::str::contains("unknown field"));
}

#[test]
fn missing_explicit_config_fails() {
    let (mut cmd, _dir) = isolated_cmd();
    cmd.args(["--config", "nope.toml", "text"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("nope.toml"));
}
