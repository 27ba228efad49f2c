//! Pass record definitions

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codec::validate;
use crate::error::RecordError;

/// Column titles for a tabular view of records
pub const COLUMN_HEADERS: [&str; 3] = ["Pass date", "Plate number", "Fuel rate"];

/// Kind of vehicle that made the pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VehicleKind {
    #[default]
    Car,
    Truck,
    Motorcycle,
}

impl VehicleKind {
    /// Name as written in the tagged line format
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Truck => "Truck",
            VehicleKind::Motorcycle => "Motorcycle",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Car" => Ok(VehicleKind::Car),
            "Truck" => Ok(VehicleKind::Truck),
            "Motorcycle" => Ok(VehicleKind::Motorcycle),
            other => Err(RecordError::UnknownKind {
                value: other.to_string(),
            }),
        }
    }
}

/// One vehicle crossing
///
/// Fields are private and never change after construction; an edit is a
/// delete followed by an add.
///
/// Known gap: [`PassRecord::new`] and [`PassRecord::with_kind`] accept any
/// values. Use [`PassRecord::validated`] when the inputs are untrusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassRecord {
    kind: VehicleKind,
    date: NaiveDate,
    plate: String,
    fuel_rate: f64,
    has_spare_wheel: bool,
}

impl PassRecord {
    /// Create a car pass without validation
    pub fn new(date: NaiveDate, plate: impl Into<String>, fuel_rate: f64) -> Self {
        Self::with_kind(VehicleKind::Car, date, plate, fuel_rate, true)
    }

    /// Create a pass of any kind without validation
    pub fn with_kind(
        kind: VehicleKind,
        date: NaiveDate,
        plate: impl Into<String>,
        fuel_rate: f64,
        has_spare_wheel: bool,
    ) -> Self {
        Self {
            kind,
            date,
            plate: plate.into(),
            fuel_rate,
            has_spare_wheel,
        }
    }

    /// Create a car pass after running the field validators
    ///
    /// `today` is the reference date for the future-date check.
    pub fn validated(
        date: NaiveDate,
        plate: &str,
        fuel_rate: f64,
        today: NaiveDate,
    ) -> Result<Self, RecordError> {
        validate::check_not_future(date, today)?;
        validate::check_entered_plate(plate)?;
        validate::check_fuel_rate(fuel_rate)?;
        Ok(Self::new(date, plate, fuel_rate))
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Liters per 100 km
    pub fn fuel_rate(&self) -> f64 {
        self.fuel_rate
    }

    pub fn has_spare_wheel(&self) -> bool {
        self.has_spare_wheel
    }

    /// Display cells in [`COLUMN_HEADERS`] order
    pub fn columns(&self) -> [String; 3] {
        [
            self.date.format(validate::DATE_FORMAT).to_string(),
            self.plate.clone(),
            self.fuel_rate.to_string(),
        ]
    }
}

/// Canonical line: `YYYY-MM-DD,<plate>,<fuel_rate>`
impl fmt::Display for PassRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.date.format(validate::DATE_FORMAT),
            self.plate,
            self.fuel_rate
        )
    }
}
