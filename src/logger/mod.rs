//! Logger Module
//!
//! The leveled-message contract the core reports through, plus sinks.
//!
//! The core calls [`PassLogger::log`] synchronously: once for every line a
//! load skips and once for every load or save that fails as a whole. It never
//! depends on where messages end up.
//!
//! ## Sinks
//! - [`TracingLogger`]: forwards to `tracing` events
//! - [`FileLogger`]: appends to a dated file under a log directory
//! - [`MemoryLogger`]: keeps entries in memory

mod file;
mod memory;
mod trace;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use file::FileLogger;
pub use memory::{LogEntry, MemoryLogger};
pub use trace::TracingLogger;

/// Severity of a logged message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives leveled messages from the core
///
/// Implementations must not fail the caller; a sink that cannot write
/// reports the problem on its own channel.
pub trait PassLogger {
    fn log(&self, level: LogLevel, message: &str);
}
