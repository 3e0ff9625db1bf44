//! Debug log setup
//!
//! The terminal belongs to the TUI, so records go to a file instead of
//! stderr. Nothing is logged when no file is configured in release builds.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use env_logger::{Builder, Env, Target};
use log::Level;

const DEFAULT_FILTER: &str = "info";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Log file used when none is given on the command line
pub fn default_log_path() -> Option<PathBuf> {
    if cfg!(debug_assertions) {
        Some(std::env::temp_dir().join("taskhint-debug.log"))
    } else {
        None
    }
}

/// Start logging to `log_file`, or the default path if there is one
///
/// Returns the path records are written to. Calling it twice keeps the
/// first logger.
pub fn init(log_file: Option<&Path>) -> io::Result<Option<PathBuf>> {
    let Some(path) = log_file.map(Path::to_path_buf).or_else(default_log_path) else {
        return Ok(None);
    };

    let file = open_log_file(&path)?;
    let _ = builder(file).try_init();
    Ok(Some(path))
}

fn builder(file: File) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_record(&Local::now(), record.level(), record.target(), record.args())
            )
        });
    builder
}

pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

pub fn format_record(
    now: &DateTime<Local>,
    level: Level,
    target: &str,
    args: &std::fmt::Arguments,
) -> String {
    format!(
        "{} {:<5} {}: {}",
        now.format(TIMESTAMP_FORMAT),
        level,
        target,
        args
    )
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod logging_tests;
