//! Record Module
//!
//! Immutable value types for a single vehicle pass.
//!
//! ## Responsibilities
//! - Hold the pass date, plate number and fuel rate behind read-only accessors
//! - Tag each record with its vehicle kind
//! - Produce the canonical one-line text form (`Display`)
//!
//! Construction through [`PassRecord::new`] does not validate. Records read
//! from files always go through the codec, which validates every field first;
//! records built directly by the application are trusted unless the caller
//! uses [`PassRecord::validated`].

mod pass;
mod plate;

pub use pass::{PassRecord, VehicleKind, COLUMN_HEADERS};
pub use plate::{is_valid_plate, PLATE_ALPHABET, PLATE_ALPHABET_DISPLAY, PLATE_PATTERN};
