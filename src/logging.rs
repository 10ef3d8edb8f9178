//! Logging setup for the command-line tool.
//!
//! The progress bar owns stderr, so logs only ever go to a file:
//! - `--log-file <path>` writes to the given path (cleared first)
//! - `--debug` writes to a randomly named file in the temp directory
//!
//! The level comes from `RUST_LOG` when set, otherwise from the caller.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rand::distr::Alphanumeric;
use rand::Rng;
use tracing_subscriber::EnvFilter;

/// Returns a fresh log file path: `<tmp>/polybar-<8 random chars>.log`.
pub fn debug_log_path() -> PathBuf {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    std::env::temp_dir().join(format!("polybar-{}.log", suffix))
}

/// Creates (or truncates) the log file, creating parent directories as needed.
pub fn prepare_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    File::create(path)
}

/// Installs a global subscriber writing plain-text logs to `path`.
///
/// `default_level` is used when `RUST_LOG` is not set.
pub fn init_file_logging(path: &Path, default_level: &str) -> io::Result<()> {
    let file = prepare_log_file(path)?;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
