//! # netinv Device Command Integration Tests
//!
//! File: cli/tests/device.rs
//!
//! ## Overview
//!
//! Drives `netinv device ...` end to end: every mutating command must leave the
//! inventory file in the expected state for the next invocation.
//!

mod common;
use common::{add_device, data_file, has_row, netinv_in, stdout_of};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_add_then_list() {
    let dir = tempdir().unwrap();
    netinv_in(dir.path())
        .args(["device", "add", "--name", "edge-rtr", "--ip", "10.0.0.1"])
        .args(["--type", "Router", "--location", "Minneapolis HQ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added device DEV-0001."));
    assert!(data_file(dir.path()).is_file());

    netinv_in(dir.path())
        .args(["device", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEV-0001"))
        .stdout(predicate::str::contains("edge-rtr"))
        .stdout(predicate::str::contains("Total shown: 1 (Total in inventory: 1)"));
}

#[test]
fn test_list_empty_inventory() {
    let dir = tempdir().unwrap();
    netinv_in(dir.path())
        .args(["device", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No devices found."));
    assert!(!data_file(dir.path()).exists());
}

#[test]
fn test_retired_device_is_not_listed_as_active() {
    let dir = tempdir().unwrap();
    add_device(dir.path(), "core-sw", "10.0.0.2", &[]);
    add_device(dir.path(), "old-ap", "10.0.0.3", &[]);

    netinv_in(dir.path())
        .args(["device", "retire", "DEV-0002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEV-0002 marked as retired."));

    netinv_in(dir.path())
        .args(["device", "list", "--active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEV-0001"))
        .stdout(predicate::str::contains("DEV-0002").not())
        .stdout(predicate::str::contains("Total shown: 1 (Total in inventory: 2)"));

    // Retiring twice is accepted.
    netinv_in(dir.path())
        .args(["device", "retire", "2"])
        .assert()
        .success();
}

#[test]
fn test_add_rejects_invalid_ip() {
    let dir = tempdir().unwrap();
    netinv_in(dir.path())
        .args(["device", "add", "--name", "bad", "--ip", "999.1.1.1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid IP address '999.1.1.1'"));
    assert!(!data_file(dir.path()).exists());
}

#[test]
fn test_ids_continue_after_reload() {
    let dir = tempdir().unwrap();
    add_device(dir.path(), "a", "10.0.0.1", &[]);
    add_device(dir.path(), "b", "10.0.0.2", &[]);
    netinv_in(dir.path())
        .args(["device", "add", "--name", "c", "--ip", "2001:db8::1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added device DEV-0003."));
}

#[test]
fn test_show_and_search() {
    let dir = tempdir().unwrap();
    add_device(dir.path(), "printer-2f", "10.0.5.20", &["--location", "Seattle Branch"]);
    add_device(dir.path(), "nas", "10.0.5.30", &["--notes", "backup target"]);

    let shown = stdout_of(netinv_in(dir.path()).args(["device", "show", "DEV-0002"]));
    assert!(has_row(&shown, &["Name", "nas"]));
    assert!(has_row(&shown, &["Notes", "backup target"]));

    netinv_in(dir.path())
        .args(["device", "search", "SEATTLE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("printer-2f"))
        .stdout(predicate::str::contains("nas").not());

    netinv_in(dir.path())
        .args(["device", "search", "nothing-like-this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches."));
}

#[test]
fn test_show_unknown_device_fails() {
    let dir = tempdir().unwrap();
    netinv_in(dir.path())
        .args(["device", "show", "DEV-0042"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Device 'DEV-0042' not found."));
}

#[test]
fn test_update_fields_and_reject_reactivation() {
    let dir = tempdir().unwrap();
    add_device(dir.path(), "laptop-1", "192.168.1.10", &["--owner", "bob"]);

    netinv_in(dir.path())
        .args(["device", "update", "DEV-0001", "--owner", "alice", "--ip", "192.168.1.11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Device DEV-0001 updated."));

    netinv_in(dir.path())
        .args(["device", "update", "DEV-0001", "--ip", "not-an-ip"])
        .assert()
        .code(1);

    let shown = stdout_of(netinv_in(dir.path()).args(["device", "show", "1"]));
    assert!(has_row(&shown, &["Owner", "alice"]));
    assert!(has_row(&shown, &["IP", "192.168.1.11"]));

    netinv_in(dir.path())
        .args(["device", "update", "1", "--status", "retired"])
        .assert()
        .success();
    netinv_in(dir.path())
        .args(["device", "update", "1", "--status", "active"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot be reactivated"));
}

#[test]
fn test_update_without_fields_fails() {
    let dir = tempdir().unwrap();
    add_device(dir.path(), "x", "10.0.0.1", &[]);
    netinv_in(dir.path())
        .args(["device", "update", "DEV-0001"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_malformed_inventory_file_fails() {
    let dir = tempdir().unwrap();
    std::fs::write(data_file(dir.path()), "{ not json").unwrap();
    netinv_in(dir.path())
        .args(["device", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not parse inventory file"));
}
