//! Registry Module
//!
//! The application-facing coordinator over a record store, the record file
//! and a logger.
//!
//! ## Responsibilities
//! - Validate interactively entered passes before they reach the store
//! - Reject deletes of positions that do not exist
//! - Reload without losing the current contents on failure
//! - Save the current contents to the record file, refusing to drop lines
//!   that were skipped when it was loaded

use std::path::Path;

use chrono::NaiveDate;

use crate::codec::{self, validate};
use crate::config::Config;
use crate::error::{LineError, PassError, RecordError, Result};
use crate::file::{self, LoadReport};
use crate::logger::{LogLevel, PassLogger, TracingLogger};
use crate::record::{PassRecord, VehicleKind};
use crate::store::RecordStore;

/// Record store bound to a record file and a logger
///
/// Single-threaded: loads, saves and mutations never interleave.
pub struct Registry<L: PassLogger = TracingLogger> {
    /// Registry configuration
    config: Config,

    /// Live records
    store: RecordStore,

    /// Receives validation warnings and load/save errors
    logger: L,

    /// Lines skipped by the last load of the record file
    skipped: Vec<LineError>,
}

impl<L: PassLogger> Registry<L> {
    /// Create a registry with an empty store (no file access)
    pub fn new(config: Config, logger: L) -> Self {
        Self {
            config,
            store: RecordStore::new(),
            logger,
            skipped: Vec::new(),
        }
    }

    /// Create a registry and load the configured record file
    ///
    /// A missing file yields an empty store when
    /// `config.missing_file_is_empty` is set; any other failure is returned.
    /// Lines skipped during the load are kept in [`Registry::skipped_lines`].
    pub fn open(config: Config, logger: L) -> Result<Self> {
        let mut registry = Self::new(config, logger);

        if !registry.config.data_file.exists() && registry.config.missing_file_is_empty {
            tracing::info!(
                "Record file {} does not exist yet, starting empty",
                registry.config.data_file.display()
            );
            return Ok(registry);
        }

        let path = registry.config.data_file.clone();
        registry.load_from(&path)?;
        Ok(registry)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validate and append a pass, checking the date against today
    pub fn add_pass(
        &mut self,
        kind: VehicleKind,
        date: NaiveDate,
        plate: &str,
        fuel_rate: f64,
    ) -> Result<()> {
        self.add_pass_at(kind, date, plate, fuel_rate, codec::today())
    }

    /// Validate and append a pass, checking the date against `today`
    ///
    /// Checks run plate, fuel rate, then date. The first failure is logged
    /// once at `WARNING` and returned as [`PassError::Validation`].
    pub fn add_pass_at(
        &mut self,
        kind: VehicleKind,
        date: NaiveDate,
        plate: &str,
        fuel_rate: f64,
        today: NaiveDate,
    ) -> Result<()> {
        let checked: std::result::Result<(), RecordError> = validate::check_entered_plate(plate)
            .and_then(|_| validate::check_fuel_rate(fuel_rate))
            .and_then(|_| validate::check_not_future(date, today));

        if let Err(e) = checked {
            self.logger
                .log(LogLevel::Warning, &format!("Rejected new pass: {e}"));
            return Err(PassError::Validation(e));
        }

        self.store
            .add(PassRecord::with_kind(kind, date, plate, fuel_rate, true));
        Ok(())
    }

    /// Append an already trusted record
    pub fn add(&mut self, record: PassRecord) {
        self.store.add(record);
    }

    /// Remove the record at a 0-based position
    pub fn delete(&mut self, index: usize) -> Result<PassRecord> {
        self.store.delete(index).map_err(|e| {
            self.logger
                .log(LogLevel::Warning, &format!("Rejected delete: {e}"));
            e
        })
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    // =========================================================================
    // File Operations
    // =========================================================================

    /// Reload the configured record file
    pub fn reload(&mut self) -> Result<LoadReport> {
        let path = self.config.data_file.clone();
        self.load_from(&path)
    }

    /// Replace the store contents with the records in `path`
    ///
    /// The file is decoded into a separate sequence first; the store is only
    /// swapped once the whole file has been read. On `Err` the current
    /// contents are untouched. Skipped lines do not count as failure: they
    /// are listed in the returned report and the rest of the file is used.
    pub fn load_from(&mut self, path: &Path) -> Result<LoadReport> {
        let report = file::load(path, self.config.format, &self.logger)?;
        self.store.replace_all(report.records.clone());
        if path == self.config.data_file.as_path() {
            self.skipped = report.failures.clone();
        }
        tracing::info!(
            "Loaded {} records from {}",
            self.store.len(),
            path.display()
        );
        Ok(report)
    }

    /// Write the store to the configured record file
    ///
    /// Fails with [`PassError::SkippedLines`] when the last load of that file
    /// skipped lines, since rewriting it would erase them. Use
    /// [`Registry::save_force`] to write anyway.
    pub fn save(&self) -> Result<()> {
        if !self.skipped.is_empty() {
            let err = PassError::SkippedLines {
                path: self.config.data_file.clone(),
                count: self.skipped.len(),
            };
            self.logger.log(LogLevel::Error, &err.to_string());
            return Err(err);
        }
        self.save_to(&self.config.data_file)
    }

    /// Write the store to the configured record file, dropping skipped lines
    pub fn save_force(&mut self) -> Result<()> {
        self.save_to(&self.config.data_file)?;
        if !self.skipped.is_empty() {
            self.logger.log(
                LogLevel::Warning,
                &format!(
                    "Dropped {} skipped lines from {}",
                    self.skipped.len(),
                    self.config.data_file.display()
                ),
            );
            self.skipped.clear();
        }
        Ok(())
    }

    /// Write the store to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self.store.as_slice(), path, self.config.format, &self.logger)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Snapshot of the current records
    pub fn records(&self) -> Vec<PassRecord> {
        self.store.list()
    }

    /// Lines of the record file skipped by the last load
    pub fn skipped_lines(&self) -> &[LineError] {
        &self.skipped
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
