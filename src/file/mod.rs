//! File Module
//!
//! Line-oriented persistence for pass records.
//!
//! ## Load
//! - Lines are read in file order and numbered from 1
//! - Lines that are blank after trimming are skipped silently
//! - Every other line is decoded on its own; a bad line is logged once and
//!   skipped, the rest of the file still loads
//! - A missing file is [`PassError::NotFound`](crate::PassError::NotFound),
//!   any other I/O problem is [`PassError::Io`](crate::PassError::Io)
//!
//! ## Save
//! - Truncates the target and writes one line per record, `\n`-terminated
//! - Not atomic: there is no temp file and no rename, so a crash part-way
//!   through leaves a partially written file

mod reader;
mod writer;

use serde::Serialize;

use crate::error::LineError;
use crate::record::PassRecord;

pub use reader::{load, load_at, load_from};
pub use writer::{save, save_to};

/// Outcome of a load that got through the whole file
///
/// Serializes to the machine-readable report printed by `passlog check --json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    /// Successfully decoded records, in file order
    pub records: Vec<PassRecord>,

    /// One entry per skipped line, in file order
    pub failures: Vec<LineError>,
}

impl LoadReport {
    /// True when no line was skipped
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
