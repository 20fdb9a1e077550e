//! End-to-end tests for the layered-opts binary
//!
//! Each test runs the binary in its own temporary working directory so the
//! default `foobar.ini` lookup is isolated.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn layered_opts(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("layered-opts").expect("binary built");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_defaults_only() {
    let tmp = TempDir::new().unwrap();

    layered_opts(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("name: owner.name, is_defaulted: 1, value: bob\n"))
        .stdout(predicate::str::contains("name: owner.age, is_defaulted: 1, value: 18\n"))
        .stdout(predicate::str::contains("name: owner.has_pet, is_defaulted: 1, value: 1\n"))
        .stdout(predicate::str::contains("name: logging, is_defaulted: 1, value: DEBUG\n"))
        .stdout(predicate::str::contains(
            "name: configuration_file, is_defaulted: 1, value: foobar.ini\n",
        ));
}

#[test]
fn test_command_line_scenario_without_config_file() {
    let tmp = TempDir::new().unwrap();

    layered_opts(&tmp)
        .args(["--owner.age=42", "--logging=warn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: owner.age, is_defaulted: 0, value: 42\n"))
        .stdout(predicate::str::contains("name: logging, is_defaulted: 0, value: WARNING\n"))
        .stdout(predicate::str::contains("name: owner.name, is_defaulted: 1, value: bob\n"));
}

#[test]
fn test_output_follows_schema_order() {
    let tmp = TempDir::new().unwrap();

    let output = layered_opts(&tmp).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("name: "))
        .filter_map(|rest| rest.split(',').next())
        .collect();

    assert_eq!(
        names,
        vec![
            "owner.name",
            "owner.sex",
            "owner.age",
            "owner.has_pet",
            "animal.type",
            "animal.pet_name",
            "logging",
            "configuration_file",
        ]
    );
}

#[test]
fn test_default_config_file_is_picked_up() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("foobar.ini"),
        "logging = error\n\n[owner]\nname = alice\nhas_pet = false\n\n[animal]\ntype = dog\n",
    )
    .unwrap();

    layered_opts(&tmp)
        .arg("--animal.type=parrot")
        .assert()
        .success()
        .stdout(predicate::str::contains("name: owner.name, is_defaulted: 0, value: alice\n"))
        .stdout(predicate::str::contains("name: owner.has_pet, is_defaulted: 0, value: 0\n"))
        .stdout(predicate::str::contains("name: logging, is_defaulted: 0, value: ERROR\n"))
        .stdout(predicate::str::contains("name: animal.type, is_defaulted: 0, value: parrot\n"))
        .stdout(predicate::str::contains("name: owner.sex, is_defaulted: 1, value: female\n"));
}

#[test]
fn test_explicit_config_file_must_exist() {
    let tmp = TempDir::new().unwrap();

    layered_opts(&tmp)
        .arg("--configuration_file=nowhere.ini")
        .assert()
        .success()
        .stdout(predicate::str::contains("nowhere.ini"))
        .stdout(predicate::str::contains("is_defaulted").not());
}

#[test]
fn test_explicit_config_file_is_read() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("custom.ini"), "[owner]\nage = 64\n").unwrap();

    layered_opts(&tmp)
        .arg("--configuration_file=custom.ini")
        .assert()
        .success()
        .stdout(predicate::str::contains("name: owner.age, is_defaulted: 0, value: 64\n"))
        .stdout(predicate::str::contains(
            "name: configuration_file, is_defaulted: 0, value: custom.ini\n",
        ));
}

#[test]
fn test_unknown_option_reports_and_exits_zero() {
    let tmp = TempDir::new().unwrap();

    layered_opts(&tmp)
        .arg("--owner.color=red")
        .assert()
        .success()
        .stdout(predicate::str::contains("--owner.color"))
        .stdout(predicate::str::contains("is_defaulted").not());
}

#[test]
fn test_invalid_severity_reports_and_exits_zero() {
    let tmp = TempDir::new().unwrap();

    layered_opts(&tmp)
        .arg("--logging=verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("'verbose'"))
        .stdout(predicate::str::contains("'logging'"));
}

#[test]
fn test_unknown_key_in_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("foobar.ini"), "[owner]\neyes = blue\n").unwrap();

    layered_opts(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("owner.eyes"))
        .stdout(predicate::str::contains("is_defaulted").not());
}

#[test]
fn test_help_flag() {
    let tmp = TempDir::new().unwrap();

    layered_opts(&tmp)
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--animal.pet_name"))
        .stdout(predicate::str::contains("--configuration_file"));
}

#[test]
fn test_version_flag() {
    let tmp = TempDir::new().unwrap();

    layered_opts(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "layered-opts {}",
            env!("CARGO_PKG_VERSION")
        )));
}
