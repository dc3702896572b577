use std::collections::BTreeSet;

use roster_cli::clauses::{QueryClauses, parse_filter};
use roster_model::{Column, QueryError, RosterOptions, SortDirection};

#[test]
fn clauses_build_a_full_spec() {
    let clauses = QueryClauses {
        search: Some("name=ali".to_string()),
        filters: vec![
            "department=Engineering, Design".to_string(),
            "status=Active".to_string(),
        ],
        sort: Some("salary:desc".to_string()),
        page: 1,
        page_size: Some(5),
    };
    let spec = clauses.to_spec(&RosterOptions::default()).expect("spec");

    assert_eq!(spec.search_column, Some(Column::Name));
    assert_eq!(spec.search_text, "ali");
    assert_eq!(
        spec.column_filters[&Column::Department],
        BTreeSet::from(["Engineering".to_string(), "Design".to_string()])
    );
    assert_eq!(
        spec.column_filters[&Column::Status],
        BTreeSet::from(["Active".to_string()])
    );
    let sort = spec.sort.expect("sort");
    assert_eq!(sort.column, Column::Salary);
    assert_eq!(sort.direction, SortDirection::Desc);
    assert_eq!(spec.page.index(), 1);
    assert_eq!(spec.page.size(), 5);
}

#[test]
fn page_size_defaults_to_options() {
    let options = RosterOptions::default().with_page_size(25);
    let spec = QueryClauses::default().to_spec(&options).expect("spec");
    assert_eq!(spec.page.size(), 25);
    assert_eq!(spec.page.index(), 0);
}

#[test]
fn invalid_pages_are_rejected() {
    let negative = QueryClauses {
        page: -1,
        ..QueryClauses::default()
    };
    assert_eq!(
        negative.to_spec(&RosterOptions::default()),
        Err(QueryError::NegativePageIndex(-1))
    );

    let zero = QueryClauses {
        page_size: Some(0),
        ..QueryClauses::default()
    };
    assert_eq!(
        zero.to_spec(&RosterOptions::default()),
        Err(QueryError::ZeroPageSize)
    );
}

#[test]
fn unknown_columns_are_rejected() {
    let clauses = QueryClauses {
        sort: Some("height".to_string()),
        ..QueryClauses::default()
    };
    assert_eq!(
        clauses.to_spec(&RosterOptions::default()),
        Err(QueryError::UnknownColumn("height".to_string()))
    );
    assert_eq!(
        parse_filter("floor=3"),
        Err(QueryError::UnknownColumn("floor".to_string()))
    );
}

#[test]
fn empty_filter_accepts_everything() {
    let (column, values) = parse_filter("department=").expect("filter");
    assert_eq!(column, Column::Department);
    assert!(values.is_empty());
}
