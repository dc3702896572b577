mod common;

use roster_core::{RecordStore, summarize};
use roster_model::{EmployeeId, RecordPatch, RosterError, Status, ValidationError};

use common::{employee, ids, small_team};

#[test]
fn duplicate_ids_are_rejected_and_store_is_unchanged() {
    let mut store = RecordStore::new();
    store.load(small_team()).expect("initial load");
    let version = store.version();

    let duplicate = vec![
        employee(7, "Eng", 1.0, Status::Active),
        employee(7, "HR", 2.0, Status::Active),
    ];
    let error = store.load(duplicate).expect_err("duplicate ids");

    assert_eq!(
        error,
        RosterError::Validation(ValidationError::DuplicateId(EmployeeId::new(7)))
    );
    assert_eq!(ids(&store.all()), vec![1, 2, 3]);
    assert_eq!(store.version(), version);
}

#[test]
fn negative_salary_fails_the_whole_load() {
    let mut store = RecordStore::new();
    let records = vec![
        employee(1, "Eng", 10.0, Status::Active),
        employee(2, "Eng", -10.0, Status::Active),
    ];
    let error = store.load(records).expect_err("negative salary");
    assert!(matches!(
        error,
        RosterError::Validation(ValidationError::NegativeSalary { .. })
    ));
    assert!(store.is_empty());
}

#[test]
fn delete_reports_whether_a_record_existed() {
    let mut store = RecordStore::new();
    store.load(small_team()).expect("load");
    let version = store.version();

    assert!(!store.delete(EmployeeId::new(99)));
    assert_eq!(store.version(), version);

    assert!(store.delete(EmployeeId::new(2)));
    assert_eq!(ids(&store.all()), vec![1, 3]);
    assert!(store.version() > version);
}

#[test]
fn delete_then_summarize_reflects_removal() {
    let mut store = RecordStore::new();
    store.load(small_team()).expect("load");
    store.delete(EmployeeId::new(2));

    let summary = summarize(&store.all());
    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.salary_by_department.get("Eng"), Some(&100.0));
    assert_eq!(summary.salary_by_department.get("HR"), Some(&50.0));
}

#[test]
fn update_missing_id_is_not_found() {
    let mut store = RecordStore::new();
    store.load(small_team()).expect("load");
    let error = store
        .update(EmployeeId::new(42), &RecordPatch::new().with_role("Lead"))
        .expect_err("missing id");
    assert_eq!(error, RosterError::NotFound(EmployeeId::new(42)));
}

#[test]
fn rejected_update_leaves_record_untouched() {
    let mut store = RecordStore::new();
    store.load(small_team()).expect("load");
    let version = store.version();

    let patch = RecordPatch {
        id: Some(EmployeeId::new(5)),
        name: Some("Renamed".to_string()),
        ..RecordPatch::default()
    };
    let error = store
        .update(EmployeeId::new(1), &patch)
        .expect_err("id is immutable");
    assert_eq!(error, RosterError::Validation(ValidationError::ImmutableId));

    let error = store
        .update(EmployeeId::new(1), &RecordPatch::new().with_salary(f64::NAN))
        .expect_err("nan salary");
    assert!(matches!(
        error,
        RosterError::Validation(ValidationError::NonFiniteSalary { .. })
    ));

    let record = store.get(EmployeeId::new(1)).expect("record 1");
    assert_eq!(record.name, "Employee 1");
    assert_eq!(record.salary, 100.0);
    assert_eq!(store.version(), version);
}

#[test]
fn update_keeps_storage_order() {
    let mut store = RecordStore::new();
    store.load(small_team()).expect("load");
    let updated = store
        .update(
            EmployeeId::new(2),
            &RecordPatch::new()
                .with_department("HR")
                .with_status(Status::Active),
        )
        .expect("update");
    assert_eq!(updated.department, "HR");
    assert_eq!(ids(&store.all()), vec![1, 2, 3]);
    assert_eq!(store.all()[1].status, Status::Active);
}
