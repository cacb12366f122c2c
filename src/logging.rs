//! Tracing subscriber setup
//!
//! Filter comes from `BLITZ_LOG` (same syntax as `RUST_LOG`), default `warn`.
//! Headless commands log to stderr. The interactive page owns the terminal,
//! so it logs to a file in the data directory instead.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BLITZ_LOG";
pub const DEFAULT_FILTER: &str = "warn";
pub const LOG_FILE_NAME: &str = "blitz-landing.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log file used by the interactive page.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("blitz-landing").join(LOG_FILE_NAME))
}

fn open_log_file() -> io::Result<File> {
    let path = log_file_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no data directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(target: LogTarget) {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File => match open_log_file() {
            Ok(file) => builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            // Nowhere safe to write while the alternate screen is up
            Err(_) => builder.with_writer(io::sink).try_init(),
        },
    };
}
