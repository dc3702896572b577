//! JSON load boundary for employee records.
//!
//! Input is an array of employee objects. A batch is accepted whole or not at
//! all: the first malformed element, duplicate id, or invalid salary rejects
//! everything, so callers never hand a partial record set to the store.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use roster_model::{EmployeeRecord, RecordPatch, Status, ValidationError};

use crate::error::{IngestError, Result};

/// Parse a JSON document into employee records.
pub fn parse_employees(json: &str) -> std::result::Result<Vec<EmployeeRecord>, ValidationError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|error| ValidationError::InvalidJson(error.to_string()))?;
    employees_from_value(value)
}

/// Read employee records from any reader.
pub fn read_employees<R: Read>(mut reader: R) -> Result<Vec<EmployeeRecord>> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(IngestError::Read)?;
    Ok(parse_employees(&contents)?)
}

/// Read employee records from a JSON file.
pub fn read_employees_file(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let file = File::open(path).map_err(|error| IngestError::io(path, error))?;
    let records = read_employees(BufReader::new(file)).map_err(|error| match error {
        IngestError::Read(source) => IngestError::io(path, source),
        other => other,
    })?;
    info!(path = %path.display(), records = records.len(), "employee file read");
    Ok(records)
}

/// Convert an already-parsed JSON value into employee records.
pub fn employees_from_value(value: Value) -> std::result::Result<Vec<EmployeeRecord>, ValidationError> {
    let Value::Array(items) = value else {
        return Err(ValidationError::NotAnArray);
    };
    let mut seen = HashSet::with_capacity(items.len());
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record = record_from_value(index, item)?;
        record.validate()?;
        if !seen.insert(record.id) {
            return Err(ValidationError::DuplicateId(record.id));
        }
        records.push(record);
    }
    debug!(records = records.len(), "employee records parsed");
    Ok(records)
}

fn record_from_value(index: usize, item: Value) -> std::result::Result<EmployeeRecord, ValidationError> {
    if let Some(status) = item.get("status").and_then(Value::as_str) {
        status.parse::<Status>()?;
    }
    serde_json::from_value(item).map_err(|error| ValidationError::MalformedRecord {
        index,
        message: error.to_string(),
    })
}

/// Parse an inline-edit patch such as `{"role": "Lead", "salary": 120000}`.
///
/// Unknown keys are rejected. An `id` key parses so the store can reject it
/// as an attempt to change record identity.
pub fn parse_patch(json: &str) -> std::result::Result<RecordPatch, ValidationError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|error| ValidationError::InvalidJson(error.to_string()))?;
    if let Some(status) = value.get("status").and_then(Value::as_str) {
        status.parse::<Status>()?;
    }
    serde_json::from_value(value).map_err(|error| ValidationError::InvalidPatch(error.to_string()))
}
