use std::collections::BTreeMap;

use roster_model::{
    AggregateSummary, Column, EmployeeRecord, PageRequest, QuerySpec, RosterOptions, SortSpec,
    Status,
};
use serde_json::json;

#[test]
fn query_spec_survives_json() {
    let spec = QuerySpec::new()
        .with_search(Column::Name, "al")
        .with_filter(Column::Department, ["Engineering", "Design"])
        .with_sort(SortSpec::desc(Column::Salary))
        .with_page(PageRequest::new(2, 5).expect("page"));

    let value = serde_json::to_value(&spec).expect("serialize");
    assert_eq!(value["search_column"], json!("name"));
    assert_eq!(
        value["column_filters"]["department"],
        json!(["Design", "Engineering"])
    );
    assert_eq!(value["sort"], json!({"column": "salary", "direction": "desc"}));

    let back: QuerySpec = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, spec);
}

#[test]
fn partial_query_spec_uses_defaults() {
    let spec: QuerySpec = serde_json::from_value(json!({"search_text": "x"})).expect("spec");
    assert_eq!(spec.search_text, "x");
    assert!(!spec.search_active());
    assert_eq!(spec.page, PageRequest::default());
}

#[test]
fn query_spec_with_negative_page_is_rejected() {
    let result = serde_json::from_value::<QuerySpec>(json!({"page": {"index": -1, "size": 10}}));
    assert!(result.is_err());
}

#[test]
fn cleared_spec_keeps_page_size_only() {
    let spec = QuerySpec::new()
        .with_search(Column::Role, "lead")
        .with_page(PageRequest::new(3, 25).expect("page"));
    let cleared = spec.cleared();
    assert!(!cleared.search_active());
    assert_eq!(cleared.page.index(), 0);
    assert_eq!(cleared.page.size(), 25);
}

#[test]
fn record_json_uses_plain_field_names() {
    let record: EmployeeRecord = serde_json::from_value(json!({
        "id": 7,
        "name": "Dana",
        "department": "HR",
        "role": "Recruiter",
        "location": "Austin",
        "salary": 72000,
        "status": "Inactive"
    }))
    .expect("record");
    assert_eq!(record.id.get(), 7);
    assert_eq!(record.status, Status::Inactive);
    assert_eq!(record.field_text(Column::Salary), "72000");
}

#[test]
fn summary_breakdowns_follow_department_order() {
    let summary = AggregateSummary {
        total_count: 3,
        distinct_department_count: 2,
        average_salary: 350.0 / 3.0,
        active_count: 2,
        total_salary: 350.0,
        salary_by_department: BTreeMap::from([("HR".to_string(), 50.0), ("Eng".to_string(), 300.0)]),
        count_by_department: BTreeMap::from([("HR".to_string(), 1), ("Eng".to_string(), 2)]),
        count_by_status: BTreeMap::from([(Status::Active, 2), (Status::Inactive, 1)]),
    };

    let departments = summary.departments();
    assert_eq!(departments[0].department, "Eng");
    assert_eq!(departments[0].count, 2);
    assert_eq!(departments[0].salary, 300.0);
    assert_eq!(departments[1].department, "HR");

    let shares = summary.status_share();
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].status, Status::Active);
    assert!((shares[0].fraction - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(summary.inactive_count(), 1);
}

#[test]
fn options_deserialize_with_defaults() {
    let options: RosterOptions =
        serde_json::from_value(json!({"filter_match": "prefix"})).expect("options");
    assert_eq!(options.page_size, 10);
    assert_eq!(options, RosterOptions::default().with_filter_match(roster_model::FilterMatch::Prefix));
}
