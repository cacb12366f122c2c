//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// The binary with a config path that points into `dir`.
pub fn blitz(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("blitz-landing").expect("binary is built");
    cmd.env("BLITZ_LANDING_CONFIG", config_path(dir))
        .env("BLITZ_LOG", "off")
        .env("NO_COLOR", "1");
    cmd
}

pub fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("config.toml")
}

/// Write `content` as the config file in `dir`.
pub fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = config_path(dir);
    fs::write(&path, content).expect("write config");
    path
}

/// Two short lines with a one-tick dwell.
pub fn short_script_config(dir: &TempDir) -> PathBuf {
    write_config(
        dir,
        r#"
[playback]
tick_ms = 1
dwell_ms = 1
script = ["ab", "cd"]
"#,
    )
}
