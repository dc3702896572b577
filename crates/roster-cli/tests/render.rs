use std::collections::BTreeSet;

use roster_cli::render::{columns_table, employee_table, footer_line, summary_lines};
use roster_core::{QueryEngine, summarize};
use roster_model::{
    AggregateSummary, Column, EmployeeId, EmployeeRecord, PageRequest, QuerySpec, RosterOptions,
    Status,
};

fn employee(id: u64, name: &str, department: &str, salary: f64, status: Status) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId::new(id),
        name: name.to_string(),
        department: department.to_string(),
        role: "Engineer".to_string(),
        location: "Austin".to_string(),
        salary,
        status,
    }
}

fn small_team() -> Vec<EmployeeRecord> {
    vec![
        employee(1, "Alice", "Eng", 100.0, Status::Active),
        employee(2, "Bob", "Eng", 200.0, Status::Inactive),
        employee(3, "Carol", "HR", 50.0, Status::Active),
    ]
}

fn twelve() -> Vec<EmployeeRecord> {
    (1..=12)
        .map(|id| employee(id, &format!("Person {id}"), "Eng", 1000.0, Status::Active))
        .collect()
}

fn page(records: &[EmployeeRecord], index: usize) -> roster_model::QueryResult {
    let spec = QuerySpec::new().with_page(PageRequest::new(index, 10).expect("page"));
    QueryEngine::new(&RosterOptions::default()).evaluate(records, &spec)
}

#[test]
fn dashboard_lines_for_small_team() {
    let text = summary_lines(&summarize(&small_team())).join("\n");
    insta::assert_snapshot!(text, @r"
    Total Employees: 3
    Departments: 2
    Average Salary: 116.67
    Active Employees: 2
    Department Eng: 2 employee(s), salary 300
    Department HR: 1 employee(s), salary 50
    Status Active: 2 (66.7%)
    Status Inactive: 1 (33.3%)
    ");
}

#[test]
fn dashboard_lines_for_empty_roster() {
    let text = summary_lines(&AggregateSummary::default()).join("\n");
    insta::assert_snapshot!(text, @r"
    Total Employees: 0
    Departments: 0
    Average Salary: 0.00
    Active Employees: 0
    ");
}

#[test]
fn footer_describes_page_position() {
    let records = twelve();
    assert_eq!(
        footer_line(&page(&records, 0)),
        "Rows 1-10 of 12 matched, page 1 of 2."
    );
    assert_eq!(
        footer_line(&page(&records, 1)),
        "Rows 11-12 of 12 matched, page 2 of 2."
    );
    assert_eq!(
        footer_line(&page(&records, 5)),
        "Page 6 is past the end: 12 matched across 2 page(s)."
    );
    assert_eq!(
        footer_line(&page(&[], 0)),
        "No employees match the current query."
    );
}

#[test]
fn table_marks_selection_and_search_matches() {
    let spec = QuerySpec::new().with_search(Column::Name, "o");
    let result = QueryEngine::new(&RosterOptions::default()).evaluate(&small_team(), &spec);
    let selected = BTreeSet::from([EmployeeId::new(2)]);
    let mut table = employee_table(&result, &selected, false);
    table.force_no_tty();
    let rendered = table.to_string();

    assert!(rendered.contains("B[o]b"));
    assert!(rendered.contains("Car[o]l"));
    assert!(!rendered.contains("Alice"));
    assert_eq!(rendered.matches("[x]").count(), 1);
    assert_eq!(rendered.matches("[ ]").count(), 1);
}

#[test]
fn columns_table_lists_every_column() {
    let mut table = columns_table();
    table.force_no_tty();
    let rendered = table.to_string();
    for column in Column::ALL {
        assert!(rendered.contains(column.title()));
    }
    assert_eq!(rendered.matches("numeric").count(), 2);
}
