//! `config` subcommands against a temporary config file

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use blitz_landing::Config;

use crate::helpers::{blitz, config_path, write_config};

#[test]
fn show_without_file_prints_defaults() {
    let dir = TempDir::new().unwrap();
    blitz(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tick_ms = 100"))
        .stdout(predicate::str::contains("simulated_delay_ms = 1500"))
        .stdout(predicate::str::contains("theme = \"blitz\""));
    assert!(!config_path(&dir).exists());
}

#[test]
fn show_merges_file_with_defaults() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[auth]\nsimulated_delay_ms = 42\n");
    blitz(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("simulated_delay_ms = 42"))
        .stdout(predicate::str::contains("dwell_ms = 1000"));
}

#[test]
fn show_reports_parse_errors() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[auth]\nsimulated_delay_ms = \"soon\"\n");
    blitz(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn migrate_yes_adds_missing_fields_and_keeps_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "# tuned\n[playback]\ntick_ms = 5\n");

    blitz(&dir)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config updated successfully."));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("# tuned"));
    assert!(content.contains("tick_ms = 5"));
    assert!(content.contains("simulated_delay_ms = 1500"));

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.playback.tick_ms, 5);
    assert_eq!(config.playback.dwell_ms, 1000);
}

#[test]
fn migrate_without_tty_makes_no_changes() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[playback]\ntick_ms = 5\n");

    blitz(&dir)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made."));

    assert_eq!(fs::read_to_string(&path).unwrap(), "[playback]\ntick_ms = 5\n");
}

#[test]
fn migrate_creates_missing_file() {
    let dir = TempDir::new().unwrap();
    blitz(&dir)
        .args(["config", "migrate", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file created successfully."));

    let config = Config::load_from(&config_path(&dir)).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn migrate_up_to_date_config_is_noop() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    Config::default().save_to(&path).unwrap();

    blitz(&dir)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is already up to date."));
}
