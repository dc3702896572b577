//! Shared fixtures for roster-core integration tests.

#![allow(dead_code)]

use roster_model::{EmployeeId, EmployeeRecord, Status};

pub fn employee(id: u64, department: &str, salary: f64, status: Status) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId::new(id),
        name: format!("Employee {id}"),
        department: department.to_string(),
        role: "Engineer".to_string(),
        location: "Austin".to_string(),
        salary,
        status,
    }
}

/// The three-record dataset used throughout the dashboard examples.
pub fn small_team() -> Vec<EmployeeRecord> {
    vec![
        employee(1, "Eng", 100.0, Status::Active),
        employee(2, "Eng", 200.0, Status::Inactive),
        employee(3, "HR", 50.0, Status::Active),
    ]
}

pub fn ids(records: &[EmployeeRecord]) -> Vec<u64> {
    records.iter().map(|record| record.id.get()).collect()
}
