//! Record file writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::codec::LineFormat;
use crate::error::{PassError, Result};
use crate::logger::{LogLevel, PassLogger};
use crate::record::PassRecord;

/// Write `records` to `path`, replacing its contents
///
/// A failure is logged once and returned as `Err`.
pub fn save(
    records: &[PassRecord],
    path: &Path,
    format: LineFormat,
    logger: &dyn PassLogger,
) -> Result<()> {
    let result = File::create(path)
        .map_err(PassError::from)
        .and_then(|file| save_to(records, BufWriter::new(file), format));

    match &result {
        Ok(()) => tracing::debug!("Saved {} records to {}", records.len(), path.display()),
        Err(e) => logger.log(
            LogLevel::Error,
            &format!("Failed to save file {}: {}", path.display(), e),
        ),
    }

    result
}

/// Encode every record to `writer`, one `\n`-terminated line each
pub fn save_to<W: Write>(records: &[PassRecord], mut writer: W, format: LineFormat) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", format.encode(record))?;
    }
    writer.flush()?;
    Ok(())
}
