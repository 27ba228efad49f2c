//! # passlog
//!
//! A registry of vehicle passes (date, plate number, fuel rate) with:
//! - A validating line codec with typed per-field failures
//! - Line-by-line file loading that skips and logs bad lines
//! - An ordered in-memory record store with snapshot reads
//! - Pluggable loggers (tracing, dated files, memory)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  CLI / UI adapter                            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Registry                                 │
//! │        (validated add, strict delete, safe reload)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ RecordStore │          │    File     │──────► PassLogger
//!   │  (ordered)  │          │ (load/save) │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │    Codec    │
//!                           │ (line <-> record)
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod codec;
pub mod file;
pub mod store;
pub mod logger;
pub mod registry;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LineError, PassError, RecordError, Result};
pub use config::Config;
pub use codec::LineFormat;
pub use file::LoadReport;
pub use logger::{LogLevel, PassLogger};
pub use record::{PassRecord, VehicleKind};
pub use registry::Registry;
pub use store::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of passlog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
