//! Tagged line format
//!
//! The call-style format of the early registry files:
//!
//! ```text
//! Kind(DD.MM.YYYY, "<plate>", <fuel_rate>[, True|False])
//! Truck(01.02.2023, "А123ВС78", 25.5, False)
//! ```
//!
//! The trailing spare-wheel flag is optional on read and defaults to `True`.
//! It is always written. The fuel rate is required: a record without one
//! could not satisfy `fuel_rate > 0`, so `Car(01.02.2023, "А123ВС78")` is a
//! malformed line.

use chrono::NaiveDate;

use crate::error::RecordError;
use crate::record::{PassRecord, VehicleKind};

use super::validate;

/// Date format used inside the tagged format
pub const TAGGED_DATE_FORMAT: &str = "%d.%m.%Y";

const MIN_FIELDS: usize = 3;
const MAX_FIELDS: usize = 4;

/// Encode a record as one tagged line (no trailing newline)
pub fn encode_tagged(record: &PassRecord) -> String {
    format!(
        "{}({}, \"{}\", {}, {})",
        record.kind(),
        record.date().format(TAGGED_DATE_FORMAT),
        record.plate(),
        record.fuel_rate(),
        if record.has_spare_wheel() { "True" } else { "False" }
    )
}

/// Decode one tagged line, checking the date against `today`
pub fn decode_tagged(line: &str, today: NaiveDate) -> Result<PassRecord, RecordError> {
    let (tag, rest) = line.split_once('(').ok_or_else(|| RecordError::MalformedLine {
        detail: "missing '(' after vehicle kind".to_string(),
    })?;
    let body = rest.strip_suffix(')').ok_or_else(|| RecordError::MalformedLine {
        detail: "missing closing ')'".to_string(),
    })?;

    let kind: VehicleKind = tag.trim().parse()?;

    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    if !(MIN_FIELDS..=MAX_FIELDS).contains(&fields.len()) {
        return Err(RecordError::MalformedLine {
            detail: format!(
                "expected {MIN_FIELDS} or {MAX_FIELDS} fields, found {}",
                fields.len()
            ),
        });
    }

    let date = validate::parse_date(fields[0], TAGGED_DATE_FORMAT)?;
    validate::check_not_future(date, today)?;

    let plate = unquote(fields[1])?;
    validate::check_plate(plate)?;

    let fuel_rate = validate::parse_fuel_rate(fields[2])?;

    let has_spare_wheel = match fields.get(3) {
        None => true,
        Some(&"True") => true,
        Some(&"False") => false,
        Some(other) => {
            return Err(RecordError::InvalidFlag {
                value: other.to_string(),
            })
        }
    };

    Ok(PassRecord::with_kind(kind, date, plate, fuel_rate, has_spare_wheel))
}

fn unquote(field: &str) -> Result<&str, RecordError> {
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .ok_or_else(|| RecordError::MalformedLine {
            detail: format!("plate must be quoted: {field}"),
        })
}
