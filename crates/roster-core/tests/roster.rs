mod common;

use roster_core::Roster;
use roster_model::{
    Column, EmployeeId, PageRequest, QueryError, QuerySpec, RecordPatch, RosterError,
    RosterOptions, SortSpec,
};

use common::{ids, small_team};

fn loaded() -> Roster {
    let mut roster = Roster::new(RosterOptions::default()).expect("roster");
    roster.load(small_team()).expect("load");
    roster
}

#[test]
fn selection_survives_filtering_and_clearing() {
    let mut roster = loaded();
    roster.selection_mut().toggle(EmployeeId::new(1));

    roster.set_query(QuerySpec::new().with_filter(Column::Department, ["HR"]));
    let filtered = roster.view();
    assert!(!ids(&filtered.rows).contains(&1));
    assert!(roster.selection().contains(EmployeeId::new(1)));

    roster.clear_query();
    assert_eq!(ids(&roster.view().rows), vec![1, 2, 3]);
    assert!(roster.selection().current().contains(&EmployeeId::new(1)));
}

#[test]
fn deleted_ids_stay_selected_but_are_reconciled_away() {
    let mut roster = loaded();
    roster
        .selection_mut()
        .select([EmployeeId::new(1), EmployeeId::new(2)]);
    assert!(roster.delete(EmployeeId::new(2)));

    assert_eq!(roster.selection().len(), 2);
    assert_eq!(
        roster.reconciled_selection().into_iter().collect::<Vec<_>>(),
        vec![EmployeeId::new(1)]
    );
    assert_eq!(ids(&roster.selected_records()), vec![1]);
}

#[test]
fn view_and_summary_recompute_after_mutation() {
    let mut roster = loaded();
    roster.set_query(QuerySpec::new().with_sort(SortSpec::desc(Column::Salary)));

    assert_eq!(ids(&roster.view().rows), vec![2, 1, 3]);
    assert_eq!(roster.summary().total_salary, 350.0);

    roster
        .update(EmployeeId::new(3), &RecordPatch::new().with_salary(500.0))
        .expect("update");
    assert_eq!(ids(&roster.view().rows), vec![3, 2, 1]);
    assert_eq!(roster.summary().total_salary, 800.0);

    roster.delete(EmployeeId::new(3));
    assert_eq!(ids(&roster.view().rows), vec![2, 1]);
    assert_eq!(roster.summary().total_count, 2);
}

#[test]
fn summary_ignores_the_active_query() {
    let mut roster = loaded();
    roster.set_query(QuerySpec::new().with_filter(Column::Department, ["HR"]));
    assert_eq!(roster.view().total_matched, 1);
    assert_eq!(roster.summary().total_count, 3);
}

#[test]
fn repeated_views_are_stable() {
    let mut roster = loaded();
    let first = roster.view();
    let second = roster.view();
    assert_eq!(first, second);
}

#[test]
fn zero_page_size_is_rejected_at_construction() {
    let result = Roster::new(RosterOptions::new().with_page_size(0));
    assert!(matches!(
        result,
        Err(RosterError::InvalidQuery(QueryError::ZeroPageSize))
    ));
}

#[test]
fn default_page_size_comes_from_options() {
    let mut roster = Roster::new(RosterOptions::new().with_page_size(2)).expect("roster");
    roster.load(small_team()).expect("load");
    let view = roster.view();
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.total_matched, 3);
    assert_eq!(view.page, PageRequest::new(0, 2).expect("page"));
}

#[test]
fn failed_load_keeps_previous_records() {
    let mut roster = loaded();
    let mut broken = small_team();
    broken.push(broken[0].clone());
    assert!(roster.load(broken).is_err());
    assert_eq!(ids(&roster.records()), vec![1, 2, 3]);
}
