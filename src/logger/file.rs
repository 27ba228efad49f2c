//! Dated file sink
//!
//! One file per day, `<log_dir>/DD-MM-YYYY.log`, each line
//! `DD-MM-YYYY HH:MM:SS LEVEL message`. The directory and the file are
//! created on first write; later writes append.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::{LogLevel, PassLogger};

const FILE_DATE_FORMAT: &str = "%d-%m-%Y";
const LINE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Appends messages to a per-day log file
#[derive(Debug, Clone)]
pub struct FileLogger {
    log_dir: PathBuf,
}

impl FileLogger {
    /// Create a logger writing under `log_dir` (nothing is touched yet)
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Path of the file a message logged at `now` goes to
    pub fn log_path_at(&self, now: DateTime<Local>) -> PathBuf {
        self.log_dir
            .join(format!("{}.log", now.format(FILE_DATE_FORMAT)))
    }

    /// Path of today's log file
    pub fn current_log_path(&self) -> PathBuf {
        self.log_path_at(Local::now())
    }

    fn append(&self, now: DateTime<Local>, level: LogLevel, message: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.log_dir)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path_at(now))?;

        writeln!(file, "{} {} {}", now.format(LINE_TIME_FORMAT), level, message)
    }
}

impl PassLogger for FileLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if let Err(e) = self.append(Local::now(), level, message) {
            tracing::warn!("Failed to write log file in {}: {}", self.log_dir.display(), e);
        }
    }
}
