//! Employee record ingestion.
//!
//! This crate is the load boundary between raw JSON and the typed roster
//! model. Nothing here touches a record store; callers hand the parsed records
//! to `RecordStore::load` (or `Roster::load`) once parsing has succeeded.

pub mod error;
pub mod json;

pub use error::{IngestError, Result};
pub use json::{
    employees_from_value, parse_employees, parse_patch, read_employees, read_employees_file,
};
