//! Field validators
//!
//! Shared by both line formats and by validated construction of records.

use chrono::NaiveDate;

use crate::error::RecordError;
use crate::record::is_valid_plate;

/// ISO date format used by the CSV line format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date with the given `chrono` format string
pub fn parse_date(value: &str, format: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value, format).map_err(|e| RecordError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Reject dates strictly after `today`
pub fn check_not_future(date: NaiveDate, today: NaiveDate) -> Result<(), RecordError> {
    if date > today {
        return Err(RecordError::FutureDate { date });
    }
    Ok(())
}

/// Reject plates outside the fixed pattern (the empty string included)
pub fn check_plate(plate: &str) -> Result<(), RecordError> {
    if !is_valid_plate(plate) {
        return Err(RecordError::InvalidIdentifier {
            value: plate.to_string(),
        });
    }
    Ok(())
}

/// Like [`check_plate`], but reports a missing plate on its own
///
/// Used for interactively entered plates, where an empty field gets a
/// dedicated message.
pub fn check_entered_plate(plate: &str) -> Result<(), RecordError> {
    if plate.is_empty() {
        return Err(RecordError::EmptyIdentifier);
    }
    check_plate(plate)
}

/// Parse a fuel rate and check that it is positive
///
/// Surrounding whitespace is ignored. `inf` and `NaN` parse as floats but are
/// not rates: infinity is an invalid number, NaN fails the positivity check.
pub fn parse_fuel_rate(value: &str) -> Result<f64, RecordError> {
    let invalid = || RecordError::InvalidNumber {
        value: value.to_string(),
    };

    let rate: f64 = value.trim().parse().map_err(|_| invalid())?;
    if rate.is_infinite() {
        return Err(invalid());
    }
    check_fuel_rate(rate)?;
    Ok(rate)
}

/// Reject zero, negative and NaN rates
pub fn check_fuel_rate(rate: f64) -> Result<(), RecordError> {
    // Written so that NaN fails too
    if !(rate > 0.0) {
        return Err(RecordError::NonPositiveFuelRate { value: rate });
    }
    Ok(())
}
