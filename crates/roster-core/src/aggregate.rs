//! Dashboard aggregation over the full record set.

use std::collections::BTreeMap;

use roster_model::{AggregateSummary, EmployeeRecord, Status};

/// Summarize `records` in a single pass.
pub fn summarize(records: &[EmployeeRecord]) -> AggregateSummary {
    let mut salary_by_department: BTreeMap<String, f64> = BTreeMap::new();
    let mut count_by_department: BTreeMap<String, usize> = BTreeMap::new();
    let mut count_by_status: BTreeMap<Status, usize> = BTreeMap::new();
    let mut total_salary = 0.0;
    let mut active_count = 0;

    for record in records {
        *salary_by_department
            .entry(record.department.clone())
            .or_insert(0.0) += record.salary;
        *count_by_department
            .entry(record.department.clone())
            .or_insert(0) += 1;
        *count_by_status.entry(record.status).or_insert(0) += 1;
        total_salary += record.salary;
        if record.status.is_active() {
            active_count += 1;
        }
    }

    let total_count = records.len();
    let average_salary = if total_count == 0 {
        0.0
    } else {
        total_salary / total_count as f64
    };

    AggregateSummary {
        total_count,
        distinct_department_count: count_by_department.len(),
        average_salary,
        active_count,
        total_salary,
        salary_by_department,
        count_by_department,
        count_by_status,
    }
}
