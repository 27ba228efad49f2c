//! Configuration for passlog
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::codec::LineFormat;

/// Main configuration for a registry
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // File Configuration
    // -------------------------------------------------------------------------
    /// Record file loaded on open and written on save
    pub data_file: PathBuf,

    /// Line format of `data_file`
    pub format: LineFormat,

    /// Open with an empty store when `data_file` does not exist yet
    /// (otherwise opening fails with `NotFound`)
    pub missing_file_is_empty: bool,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Directory for dated log files
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("passes.txt"),
            format: LineFormat::Csv,
            missing_file_is_empty: true,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the record file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the line format
    pub fn format(mut self, format: LineFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Choose whether a missing record file opens as an empty store
    pub fn missing_file_is_empty(mut self, allow: bool) -> Self {
        self.config.missing_file_is_empty = allow;
        self
    }

    /// Set the log directory
    pub fn log_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_dir = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
