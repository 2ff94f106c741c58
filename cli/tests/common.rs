//! # netinv CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`device.rs`, `subnet.rs`, etc.).
//! Each `.rs` file in `cli/tests/` (other than this module) is compiled as a
//! separate test crate that runs the compiled `netinv` binary.
//!
//! Tests that touch the inventory run inside a temporary directory with the
//! user config directory redirected there too, so no real configuration or
//! inventory file is ever read or written.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns an `assert_cmd::Command` for the compiled `netinv` binary.
///
/// ## Panics
/// Panics if the `netinv` binary cannot be found via `Command::cargo_bin`.
pub fn netinv_cmd() -> Command {
    Command::cargo_bin("netinv").expect("Failed to find netinv binary for testing")
}

/// Path of the inventory file used by `netinv_in`.
pub fn data_file(dir: &Path) -> PathBuf {
    dir.join("inventory.json")
}

/// A `netinv` command isolated in `dir`: it runs there, reads its user config from
/// there, and keeps its inventory in `data_file(dir)`.
pub fn netinv_in(dir: &Path) -> Command {
    let mut cmd = netinv_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NETINV_DATA_FILE", data_file(dir))
        .env_remove("RUST_LOG");
    cmd
}

/// Adds a device through `netinv device add` and asserts success.
pub fn add_device(dir: &Path, name: &str, ip: &str, extra: &[&str]) {
    netinv_in(dir)
        .args(["device", "add", "--name", name, "--ip", ip])
        .args(extra)
        .assert()
        .success();
}

/// Runs `cmd`, asserts success and returns its stdout.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not UTF-8")
}

/// True if some line of a rendered table has `cells` as consecutive cells.
pub fn has_row(text: &str, cells: &[&str]) -> bool {
    text.lines().any(|line| {
        let row: Vec<&str> = line
            .split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect();
        row.windows(cells.len()).any(|window| window == cells)
    })
}
