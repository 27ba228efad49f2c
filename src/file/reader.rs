//! Record file reader

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use chrono::NaiveDate;

use crate::codec::{self, LineFormat};
use crate::error::{LineError, PassError, RecordError, Result};
use crate::logger::{LogLevel, PassLogger};

use super::LoadReport;

/// Load a record file, checking dates against today's date
pub fn load(path: &Path, format: LineFormat, logger: &dyn PassLogger) -> Result<LoadReport> {
    load_at(path, format, logger, codec::today())
}

/// Load a record file, checking dates against `today`
///
/// Whole-file failures are logged once and returned as `Err`.
pub fn load_at(
    path: &Path,
    format: LineFormat,
    logger: &dyn PassLogger,
    today: NaiveDate,
) -> Result<LoadReport> {
    let result = File::open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => PassError::NotFound(path.to_path_buf()),
            _ => PassError::Io(e),
        })
        .and_then(|file| load_from(BufReader::new(file), format, logger, today));

    match &result {
        Ok(report) => tracing::debug!(
            "Loaded {}: {} records, {} lines skipped",
            path.display(),
            report.records.len(),
            report.failures.len()
        ),
        Err(e) => logger.log(
            LogLevel::Error,
            &format!("Failed to load file {}: {}", path.display(), e),
        ),
    }

    result
}

/// Decode every line from `reader`
///
/// Each undecodable line is logged exactly once at `ERROR` and recorded in
/// [`LoadReport::failures`]. A line that is not valid UTF-8 counts as one
/// malformed line; only a failing read aborts the load.
pub fn load_from<R: BufRead>(
    reader: R,
    format: LineFormat,
    logger: &dyn PassLogger,
    today: NaiveDate,
) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;

        let decoded = match String::from_utf8(bytes?) {
            Ok(text) => {
                let line = text.trim();
                if line.is_empty() {
                    continue;
                }
                format.decode_numbered(line_number, line, today)
            }
            Err(e) => {
                let lossy = String::from_utf8_lossy(e.as_bytes());
                Err(LineError::new(
                    line_number,
                    lossy.trim(),
                    RecordError::MalformedLine {
                        detail: "line is not valid UTF-8".to_string(),
                    },
                ))
            }
        };

        match decoded {
            Ok(record) => report.records.push(record),
            Err(failure) => {
                logger.log(LogLevel::Error, &failure.to_string());
                report.failures.push(failure);
            }
        }
    }

    Ok(report)
}
