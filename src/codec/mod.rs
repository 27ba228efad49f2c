//! Codec Module
//!
//! Maps one [`PassRecord`] to one line of text and back.
//!
//! ## Formats
//! - [`LineFormat::Csv`]: `YYYY-MM-DD,<plate>,<fuel_rate>` (default)
//! - [`LineFormat::Tagged`]: `Kind(DD.MM.YYYY, "<plate>", <fuel_rate>, <spare>)`
//!
//! ## Decode Pipeline
//! ```text
//! line ──► split fields ──► date ──► not future ──► plate ──► fuel > 0 ──► PassRecord
//!              │              │          │            │          │
//!              ▼              ▼          ▼            ▼          ▼
//!        MalformedLine  InvalidDate FutureDate InvalidIdentifier InvalidNumber /
//!                                                               NonPositiveFuelRate
//! ```
//!
//! Decoding never constructs a record from a field that failed validation.

mod line;
mod tagged;
pub mod validate;

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{LineError, PassError, RecordError};
use crate::record::PassRecord;

pub use line::{decode_line, encode_line, FIELD_COUNT, FIELD_SEPARATOR};
pub use tagged::{decode_tagged, encode_tagged, TAGGED_DATE_FORMAT};

/// Today's date on the local wall clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// On-disk line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineFormat {
    #[default]
    Csv,
    Tagged,
}

impl LineFormat {
    /// Encode a record (no trailing newline)
    pub fn encode(&self, record: &PassRecord) -> String {
        match self {
            LineFormat::Csv => encode_line(record),
            LineFormat::Tagged => encode_tagged(record),
        }
    }

    /// Decode one line, checking dates against `today`
    pub fn decode(&self, line: &str, today: NaiveDate) -> Result<PassRecord, RecordError> {
        match self {
            LineFormat::Csv => decode_line(line, today),
            LineFormat::Tagged => decode_tagged(line, today),
        }
    }

    /// Decode one numbered source line, attaching position on failure
    pub fn decode_numbered(
        &self,
        line_number: usize,
        line: &str,
        today: NaiveDate,
    ) -> Result<PassRecord, LineError> {
        self.decode(line, today)
            .map_err(|kind| LineError::new(line_number, line, kind))
    }
}

impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineFormat::Csv => f.write_str("csv"),
            LineFormat::Tagged => f.write_str("tagged"),
        }
    }
}

impl FromStr for LineFormat {
    type Err = PassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(LineFormat::Csv),
            "tagged" => Ok(LineFormat::Tagged),
            other => Err(PassError::Config(format!("Unknown line format: {other}"))),
        }
    }
}
