//! CSV line format
//!
//! ```text
//! YYYY-MM-DD,<plate>,<fuel_rate>
//! 2023-01-02,А123ВС78,7.5
//! ```
//!
//! No header and no escaping: a field containing `,` cannot be represented.

use chrono::NaiveDate;

use crate::error::RecordError;
use crate::record::PassRecord;

use super::validate::{self, DATE_FORMAT};

/// Field separator
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields on every line
pub const FIELD_COUNT: usize = 3;

/// Encode a record as one CSV line (no trailing newline)
pub fn encode_line(record: &PassRecord) -> String {
    record.to_string()
}

/// Decode one CSV line, checking the date against `today`
///
/// Checks run in field order, so the first bad field is the one reported.
pub fn decode_line(line: &str, today: NaiveDate) -> Result<PassRecord, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [date_field, plate_field, fuel_field] = fields[..] else {
        return Err(RecordError::field_count(FIELD_COUNT, fields.len()));
    };

    let date = validate::parse_date(date_field, DATE_FORMAT)?;
    validate::check_not_future(date, today)?;
    validate::check_plate(plate_field)?;
    let fuel_rate = validate::parse_fuel_rate(fuel_field)?;

    Ok(PassRecord::new(date, plate_field, fuel_rate))
}
