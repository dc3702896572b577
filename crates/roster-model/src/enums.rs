//! Type-safe enumerations for roster columns and field values.
//!
//! Column names and status labels arrive as strings from the presentation
//! layer; these enums give them a closed, checked representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{QueryError, ValidationError};

/// Employment status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Active, Status::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    /// Status labels are matched exactly; the source data only ever uses
    /// the capitalized forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Status::Active),
            "Inactive" => Ok(Status::Inactive),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// Queryable columns of the employee table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Id,
    Name,
    Department,
    Role,
    Location,
    Salary,
    Status,
}

impl Column {
    /// All columns in table display order.
    pub const ALL: [Column; 7] = [
        Column::Id,
        Column::Name,
        Column::Department,
        Column::Role,
        Column::Location,
        Column::Salary,
        Column::Status,
    ];

    /// Field name as it appears in record JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Name => "name",
            Column::Department => "department",
            Column::Role => "role",
            Column::Location => "location",
            Column::Salary => "salary",
            Column::Status => "status",
        }
    }

    /// Column header shown by the table view.
    pub fn title(&self) -> &'static str {
        match self {
            Column::Id => "Employee ID",
            Column::Name => "Name",
            Column::Department => "Department",
            Column::Role => "Role",
            Column::Location => "Location",
            Column::Salary => "Salary",
            Column::Status => "Status",
        }
    }

    /// Numeric columns sort by value; every other column sorts by text length.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Id | Column::Salary)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = QueryError;

    /// Parse a column name (case-insensitive, `_`/`-`/space ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "id" | "employeeid" => Ok(Column::Id),
            "name" => Ok(Column::Name),
            "department" | "dept" => Ok(Column::Department),
            "role" => Ok(Column::Role),
            "location" => Ok(Column::Location),
            "salary" => Ok(Column::Salary),
            "status" => Ok(Column::Status),
            _ => Err(QueryError::UnknownColumn(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascend" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descend" | "descending" => Ok(SortDirection::Desc),
            _ => Err(QueryError::MalformedClause {
                clause: s.to_string(),
                message: "expected asc or desc".to_string(),
            }),
        }
    }
}

/// How a column filter's accepted values are compared with field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMatch {
    /// Field text must equal an accepted value.
    #[default]
    Exact,
    /// Field text must start with an accepted value.
    Prefix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_parsing_is_lenient_about_case_and_separators() {
        assert_eq!("Department".parse::<Column>(), Ok(Column::Department));
        assert_eq!("employee_id".parse::<Column>(), Ok(Column::Id));
        assert_eq!("employeeId".parse::<Column>(), Ok(Column::Id));
        assert_eq!(
            "manager".parse::<Column>(),
            Err(QueryError::UnknownColumn("manager".to_string()))
        );
    }

    #[test]
    fn status_rejects_unknown_labels() {
        assert_eq!("Active".parse::<Status>(), Ok(Status::Active));
        assert!(matches!(
            "Retired".parse::<Status>(),
            Err(ValidationError::InvalidStatus(label)) if label == "Retired"
        ));
    }

    #[test]
    fn only_id_and_salary_are_numeric() {
        let numeric: Vec<Column> = Column::ALL
            .into_iter()
            .filter(Column::is_numeric)
            .collect();
        assert_eq!(numeric, vec![Column::Id, Column::Salary]);
    }
}
