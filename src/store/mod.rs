//! Store Module
//!
//! In-memory, insertion-ordered collection of pass records.
//!
//! ## Responsibilities
//! - Append, delete by position, clear
//! - Hand out owned snapshots so callers can iterate while the live store
//!   keeps changing
//! - Replace all contents in one step after a successful reload
//!
//! The store is not synchronized. A concurrent host must serialize access
//! itself (for example by touching it only from one event-loop thread).

mod table;

pub use table::RecordStore;
