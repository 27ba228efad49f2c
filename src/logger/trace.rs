//! Tracing sink

use super::{LogLevel, PassLogger};

/// Forwards every message as a `tracing` event under the `passlog::events` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl PassLogger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => tracing::error!(target: "passlog::events", "{}", message),
            LogLevel::Warning => tracing::warn!(target: "passlog::events", "{}", message),
            LogLevel::Info => tracing::info!(target: "passlog::events", "{}", message),
        }
    }
}
