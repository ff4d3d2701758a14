//! End-to-end tests for CLI exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: General error
//! - Exit code 2: Invalid command-line usage (handled by clap)

mod common;
use common::prelude::*;

#[test]
fn test_exit_code_success() {
    let fixture = TestFixture::new().with_sample_corpus();
    fixture.command().arg("validate").assert().code(0);
}

#[test]
fn test_exit_code_help() {
    let mut cmd = cargo_bin_cmd!("pep-build");
    cmd.arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("index"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_exit_code_version() {
    let mut cmd = cargo_bin_cmd!("pep-build");
    cmd.arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("pep-build "));
}

#[test]
fn test_exit_code_explicit_config_not_found() {
    let fixture = TestFixture::new().with_sample_corpus();
    fixture
        .command()
        .args(["--config", "missing.yaml", "index"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_exit_code_invalid_pep() {
    let fixture = TestFixture::new().with_pep(12, peps::BROKEN);
    fixture.command().arg("index").assert().code(1);
}

#[test]
fn test_exit_code_unknown_subcommand() {
    let mut cmd = cargo_bin_cmd!("pep-build");
    cmd.arg("publish").assert().code(2);
}

#[test]
fn test_exit_code_unknown_flag() {
    let fixture = TestFixture::new();
    fixture.command().args(["build", "--html"]).assert().code(2);
}
