//! Error types for passlog
//!
//! Two layers:
//! - [`RecordError`] / [`LineError`]: field and line level decode failures.
//!   These are recovered inside a load and never abort it.
//! - [`PassError`]: whole-file, store and configuration failures that are
//!   surfaced to the caller.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::record::PLATE_ALPHABET_DISPLAY;

/// Result type alias using PassError
pub type Result<T> = std::result::Result<T, PassError>;

/// Unified error type for passlog operations
#[derive(Debug, Error)]
pub enum PassError {
    // -------------------------------------------------------------------------
    // File Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(
        "{count} lines of {} were skipped on load; saving would erase them",
        .path.display()
    )]
    SkippedLines { path: PathBuf, count: usize },

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Index {index} out of range (store holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Validation failed: {0}")]
    Validation(#[from] RecordError),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a single field or line was rejected
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum RecordError {
    #[error("malformed line: {detail}")]
    MalformedLine { detail: String },

    #[error("invalid date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("pass date is later than today: {date}")]
    FutureDate { date: NaiveDate },

    #[error("plate number must not be empty")]
    EmptyIdentifier,

    #[error("invalid plate format: {value}. Allowed letters: {}", PLATE_ALPHABET_DISPLAY)]
    InvalidIdentifier { value: String },

    #[error("invalid number: {value:?}")]
    InvalidNumber { value: String },

    #[error("fuel rate must be positive, got {value}")]
    NonPositiveFuelRate { value: f64 },

    #[error("unknown vehicle kind: {value:?}")]
    UnknownKind { value: String },

    #[error("invalid spare wheel flag {value:?}, expected True or False")]
    InvalidFlag { value: String },
}

impl RecordError {
    /// Wrong number of fields on a line
    pub fn field_count(expected: usize, found: usize) -> Self {
        RecordError::MalformedLine {
            detail: format!("expected {expected} fields, found {found}"),
        }
    }

    /// Stable name of the failure kind, for reports and filtering
    pub fn kind_name(&self) -> &'static str {
        match self {
            RecordError::MalformedLine { .. } => "MalformedLine",
            RecordError::InvalidDate { .. } => "InvalidDate",
            RecordError::FutureDate { .. } => "FutureDate",
            RecordError::EmptyIdentifier => "EmptyIdentifier",
            RecordError::InvalidIdentifier { .. } => "InvalidIdentifier",
            RecordError::InvalidNumber { .. } => "InvalidNumber",
            RecordError::NonPositiveFuelRate { .. } => "NonPositiveFuelRate",
            RecordError::UnknownKind { .. } => "UnknownKind",
            RecordError::InvalidFlag { .. } => "InvalidFlag",
        }
    }
}

/// A decode failure tied to one source line
///
/// The `Display` form is the message handed to the logger verbatim.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("failed to parse line {line_number}: {line}. Error: {kind}")]
pub struct LineError {
    /// 1-based line number in the source file
    pub line_number: usize,

    /// Raw line text (trimmed)
    pub line: String,

    /// What went wrong
    pub kind: RecordError,
}

impl LineError {
    pub fn new(line_number: usize, line: impl Into<String>, kind: RecordError) -> Self {
        Self {
            line_number,
            line: line.into(),
            kind,
        }
    }
}
