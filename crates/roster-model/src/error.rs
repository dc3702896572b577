use thiserror::Error;

use crate::EmployeeId;

/// Rejected input: malformed records, duplicate ids, or field values that
/// break a record invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("duplicate employee id {0}")]
    DuplicateId(EmployeeId),

    #[error("employee id is immutable and cannot appear in an update")]
    ImmutableId,

    #[error("salary must be >= 0 (employee {id}, got {salary})")]
    NegativeSalary { id: EmployeeId, salary: f64 },

    #[error("salary must be a finite number (employee {id})")]
    NonFiniteSalary { id: EmployeeId },

    #[error("invalid status {0:?} (expected Active or Inactive)")]
    InvalidStatus(String),

    #[error("malformed record at index {index}: {message}")]
    MalformedRecord { index: usize, message: String },

    #[error("expected a JSON array of employee records")]
    NotAnArray,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("invalid update: {0}")]
    InvalidPatch(String),
}

/// Rejected query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("page size must be greater than zero (got {0})")]
    NegativePageSize(i64),

    #[error("page index must be >= 0 (got {0})")]
    NegativePageIndex(i64),

    #[error("unknown column {0:?}")]
    UnknownColumn(String),

    #[error("malformed query clause {clause:?}: {message}")]
    MalformedClause { clause: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("employee {0} not found")]
    NotFound(EmployeeId),

    #[error(transparent)]
    InvalidQuery(#[from] QueryError),
}

pub type Result<T> = std::result::Result<T, RosterError>;
