use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::{Column, EmployeeId, Status};

/// A single employee row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub role: String,
    pub location: String,
    pub salary: f64,
    pub status: Status,
}

impl EmployeeRecord {
    /// Text form of a field, as the table view renders it and as search and
    /// column filters compare it.
    pub fn field_text(&self, column: Column) -> Cow<'_, str> {
        match column {
            Column::Id => Cow::Owned(self.id.to_string()),
            Column::Name => Cow::Borrowed(&self.name),
            Column::Department => Cow::Borrowed(&self.department),
            Column::Role => Cow::Borrowed(&self.role),
            Column::Location => Cow::Borrowed(&self.location),
            Column::Salary => Cow::Owned(format_salary(self.salary)),
            Column::Status => Cow::Borrowed(self.status.as_str()),
        }
    }

    /// Numeric value of a numeric column. Ids above 2^53 lose precision;
    /// compare [`EmployeeRecord::id`] directly when ordering by id.
    pub fn field_number(&self, column: Column) -> Option<f64> {
        match column {
            Column::Id => Some(self.id.get() as f64),
            Column::Salary => Some(self.salary),
            _ => None,
        }
    }

    /// Check the per-record invariants (finite, non-negative salary).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.salary.is_finite() {
            return Err(ValidationError::NonFiniteSalary { id: self.id });
        }
        if self.salary < 0.0 {
            return Err(ValidationError::NegativeSalary {
                id: self.id,
                salary: self.salary,
            });
        }
        Ok(())
    }
}

/// Shortest decimal rendering: `100.0` prints as `100`, `100.5` as `100.5`.
pub fn format_salary(salary: f64) -> String {
    format!("{salary}")
}

/// Partial update for an inline edit.
///
/// `id` is representable only so that an update carrying it can be rejected;
/// record identity never changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merge this patch over `record`, returning the merged copy.
    ///
    /// The original is left untouched so a rejected merge has no effect.
    pub fn apply_to(&self, record: &EmployeeRecord) -> Result<EmployeeRecord, ValidationError> {
        if self.id.is_some() {
            return Err(ValidationError::ImmutableId);
        }
        let mut merged = record.clone();
        if let Some(name) = &self.name {
            merged.name.clone_from(name);
        }
        if let Some(department) = &self.department {
            merged.department.clone_from(department);
        }
        if let Some(role) = &self.role {
            merged.role.clone_from(role);
        }
        if let Some(location) = &self.location {
            merged.location.clone_from(location);
        }
        if let Some(salary) = self.salary {
            merged.salary = salary;
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        merged.validate()?;
        Ok(merged)
    }
}
