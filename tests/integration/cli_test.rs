//! Top-level CLI behavior

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::blitz;

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    blitz(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_includes_package_version() {
    let dir = TempDir::new().unwrap();
    blitz(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "blitz-landing ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();
    blitz(&dir)
        .arg("launch")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn bash_completions_mention_binary() {
    let dir = TempDir::new().unwrap();
    blitz(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blitz-landing"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn demo_help_shows_examples() {
    let dir = TempDir::new().unwrap();
    blitz(&dir)
        .args(["demo", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--passes"))
        .stdout(predicate::str::contains("--no-delay"))
        .stdout(predicate::str::contains("Examples:"));
}
