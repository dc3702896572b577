use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Status;

/// Dashboard figures computed over the whole record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub total_count: usize,
    pub distinct_department_count: usize,
    /// Mean salary; `0.0` for an empty record set.
    pub average_salary: f64,
    pub active_count: usize,
    pub total_salary: f64,
    pub salary_by_department: BTreeMap<String, f64>,
    pub count_by_department: BTreeMap<String, usize>,
    pub count_by_status: BTreeMap<Status, usize>,
}

/// One bar/line chart point: a department with its headcount and payroll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentTotals {
    pub department: String,
    pub count: usize,
    pub salary: f64,
}

/// One pie chart slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: Status,
    pub count: usize,
    pub fraction: f64,
}

impl AggregateSummary {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn inactive_count(&self) -> usize {
        self.count_by_status
            .get(&Status::Inactive)
            .copied()
            .unwrap_or(0)
    }

    /// Per-department rows ordered by department name.
    pub fn departments(&self) -> Vec<DepartmentTotals> {
        self.count_by_department
            .iter()
            .map(|(department, &count)| DepartmentTotals {
                department: department.clone(),
                count,
                salary: self
                    .salary_by_department
                    .get(department)
                    .copied()
                    .unwrap_or(0.0),
            })
            .collect()
    }

    /// Status distribution; statuses with no records are omitted.
    pub fn status_share(&self) -> Vec<StatusShare> {
        self.count_by_status
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(&status, &count)| StatusShare {
                status,
                count,
                fraction: if self.total_count == 0 {
                    0.0
                } else {
                    count as f64 / self.total_count as f64
                },
            })
            .collect()
    }
}
