//! Headless demo playback through the binary

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{blitz, short_script_config, write_config};

#[test]
fn one_pass_prints_script_once() {
    let dir = TempDir::new().unwrap();
    short_script_config(&dir);

    let output = blitz(&dir)
        .args(["demo", "--passes", "1", "--no-delay"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout.trim_end(), @r"
    ab
    cd
    ");
}

#[test]
fn passes_repeat_the_script() {
    let dir = TempDir::new().unwrap();
    short_script_config(&dir);

    blitz(&dir)
        .args(["demo", "--passes", "3", "--no-delay"])
        .assert()
        .success()
        .stdout("ab\ncd\nab\ncd\nab\ncd\n");
}

#[test]
fn json_emits_a_frame_per_tick() {
    let dir = TempDir::new().unwrap();
    short_script_config(&dir);

    let output = blitz(&dir)
        .args(["demo", "--format", "json", "--no-delay"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let frames: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    // (2 chars + 1 dwell tick) per line
    assert_eq!(frames.len(), 6);
    assert_eq!(frames.last().unwrap()["passes"], 1);
    assert_eq!(frames.last().unwrap()["in_progress"], "");
}

#[test]
fn flags_override_configured_dwell() {
    let dir = TempDir::new().unwrap();
    short_script_config(&dir);

    let output = blitz(&dir)
        .args(["demo", "-f", "json", "--no-delay", "--dwell-ms", "3"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    // tick_ms = 1 from config, so three dwell ticks per line
    assert_eq!(stdout.lines().count(), 10);
}

#[test]
fn default_script_is_the_hero_session() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[playback]\ntick_ms = 1\n");

    blitz(&dir)
        .args(["demo", "--no-delay"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$ pip install blitzcoder\n"))
        .stdout(predicate::str::contains("✨"));
}

#[test]
fn broken_config_fails_with_context() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "[playback\ntick_ms = ");

    blitz(&dir)
        .args(["demo", "--no-delay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
