// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_data_file, create_full_time, create_manager, create_part_time, id};
use crate::{Persistence, PersistenceError};
use payroll::{Applied, CoreError};
use payroll_domain::Employee;
use std::fs;

#[test]
fn test_open_missing_file_does_not_create_it() {
    let (_dir, path) = create_data_file();
    let persistence: Persistence = Persistence::open(&path).unwrap();
    assert!(persistence.all().is_empty());
    assert_eq!(persistence.total_payroll(), 0.0);
    assert_eq!(persistence.path(), path.as_path());
    assert!(!path.exists());
}

#[test]
fn test_add_persists_immediately() {
    let (_dir, path) = create_data_file();
    let mut persistence: Persistence = Persistence::open(&path).unwrap();

    assert!(persistence.add(create_full_time()).unwrap());
    assert_eq!(persistence.total_payroll(), 5000.0);

    let reopened: Persistence = Persistence::open(&path).unwrap();
    assert_eq!(reopened.find(&id("E1")), Some(&create_full_time()));
}

#[test]
fn test_add_duplicate_returns_false_and_keeps_original() {
    let (_dir, path) = create_data_file();
    let mut persistence: Persistence = Persistence::open(&path).unwrap();
    assert!(persistence.add(create_full_time()).unwrap());
    let on_disk: String = fs::read_to_string(&path).unwrap();

    let impostor: Employee = Employee::manager("E1", "Eve", "Sales", 1.0, 1.0).unwrap();
    assert!(!persistence.add(impostor).unwrap());

    assert_eq!(persistence.find(&id("E1")), Some(&create_full_time()));
    assert_eq!(fs::read_to_string(&path).unwrap(), on_disk);
}

#[test]
fn test_remove_persists_immediately() {
    let (_dir, path) = create_data_file();
    let mut persistence: Persistence = Persistence::open(&path).unwrap();
    assert!(persistence.add(create_full_time()).unwrap());
    assert!(persistence.add(create_part_time()).unwrap());

    assert!(persistence.remove(&id("E1")).unwrap());

    let reopened: Persistence = Persistence::open(&path).unwrap();
    assert_eq!(reopened.all(), &[create_part_time()]);
}

#[test]
fn test_remove_absent_id_leaves_file_untouched() {
    let (_dir, path) = create_data_file();
    let mut persistence: Persistence = Persistence::open(&path).unwrap();
    assert!(persistence.add(create_manager()).unwrap());
    let on_disk: String = fs::read_to_string(&path).unwrap();

    assert!(!persistence.remove(&id("E404")).unwrap());

    assert_eq!(fs::read_to_string(&path).unwrap(), on_disk);
    assert_eq!(persistence.all().len(), 1);
}

#[test]
fn test_remove_on_empty_store_writes_nothing() {
    let (_dir, path) = create_data_file();
    let mut persistence: Persistence = Persistence::open(&path).unwrap();
    assert!(!persistence.remove(&id("E1")).unwrap());
    assert!(!path.exists());
}

#[test]
fn test_total_payroll_mixed_variants() {
    let (_dir, path) = create_data_file();
    let mut persistence: Persistence = Persistence::open(&path).unwrap();
    assert!(persistence.add(create_part_time()).unwrap());
    assert!(persistence.add(create_manager()).unwrap());
    assert_eq!(persistence.total_payroll(), 8600.0);
}

#[test]
fn test_all_variants_survive_reopen() {
    let (_dir, path) = create_data_file();
    let mut persistence: Persistence = Persistence::open(&path).unwrap();
    for employee in [create_full_time(), create_part_time(), create_manager()] {
        assert!(persistence.add(employee).unwrap());
    }

    let reopened: Persistence = Persistence::open(&path).unwrap();
    assert_eq!(reopened.store(), persistence.store());
    assert_eq!(reopened.report(), persistence.report());
}

#[test]
fn test_field_updates_are_persisted() {
    let (_dir, path) = create_data_file();
    let mut persistence: Persistence = Persistence::open(&path).unwrap();
    assert!(persistence.add(create_full_time()).unwrap());
    assert!(persistence.add(create_part_time()).unwrap());
    assert!(persistence.add(create_manager()).unwrap());

    assert_eq!(
        persistence.update_department(&id("E1"), "Research").unwrap(),
        Applied::Changed
    );
    assert_eq!(
        persistence.set_monthly_salary(&id("E1"), 5100.0).unwrap(),
        Applied::Changed
    );
    assert_eq!(
        persistence.set_hourly_rate(&id("E2"), 30.0).unwrap(),
        Applied::Changed
    );
    assert_eq!(
        persistence.set_hours_worked(&id("E2"), 10.0).unwrap(),
        Applied::Changed
    );
    assert_eq!(
        persistence.set_bonus(&id("E3"), 0.0).unwrap(),
        Applied::Changed
    );

    let reopened: Persistence = Persistence::open(&path).unwrap();
    let full_time: &Employee = reopened.find(&id("E1")).unwrap();
    assert_eq!(full_time.department(), "Research");
    assert_eq!(full_time.calculate_salary(), 5100.0);
    assert_eq!(reopened.find(&id("E2")).unwrap().calculate_salary(), 300.0);
    assert_eq!(reopened.find(&id("E3")).unwrap().calculate_salary(), 6000.0);
}

#[test]
fn test_negative_update_does_not_rewrite_file() {
    let (_dir, path) = create_data_file();
    let mut persistence: Persistence = Persistence::open(&path).unwrap();
    assert!(persistence.add(create_manager()).unwrap());
    let on_disk: String = fs::read_to_string(&path).unwrap();

    assert_eq!(
        persistence.set_bonus(&id("E3"), -100.0).unwrap(),
        Applied::Unchanged
    );
    assert_eq!(persistence.find(&id("E3")), Some(&create_manager()));
    assert_eq!(fs::read_to_string(&path).unwrap(), on_disk);
}

#[test]
fn test_update_missing_employee_is_error() {
    let (_dir, path) = create_data_file();
    let mut persistence: Persistence = Persistence::open(&path).unwrap();
    let result: Result<Applied, PersistenceError> =
        persistence.update_department(&id("E1"), "Eng");
    assert!(matches!(
        result,
        Err(PersistenceError::Core(CoreError::EmployeeNotFound(_)))
    ));
}

#[test]
fn test_write_failure_keeps_in_memory_change() {
    let (dir, _) = create_data_file();
    let blocker = dir.path().join("blocker");
    let path = blocker.join("employees.json");
    let mut persistence: Persistence = Persistence::open(&path).unwrap();

    // A plain file where the data directory should be makes the write fail.
    fs::write(&blocker, "plain file").unwrap();
    let result: Result<bool, PersistenceError> = persistence.add(create_full_time());

    assert!(matches!(result, Err(PersistenceError::Persist { .. })));
    assert_eq!(persistence.find(&id("E1")), Some(&create_full_time()));
    assert_eq!(persistence.total_payroll(), 5000.0);
}

#[test]
fn test_open_skips_unknown_records() {
    let (_dir, path) = create_data_file();
    fs::write(
        &path,
        r#"[
    {"type": "fulltime", "employee_id": "E1", "name": "Ann", "department": "Eng", "monthly_salary": 5000.0},
    {"type": "contractor", "employee_id": "E5", "name": "Ed", "department": "Eng"}
]"#,
    )
    .unwrap();

    let mut persistence: Persistence = Persistence::open(&path).unwrap();
    assert_eq!(persistence.all(), &[create_full_time()]);

    // The next write drops the unreadable record.
    assert!(persistence.add(create_part_time()).unwrap());
    let contents: String = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("contractor"));
}

#[test]
fn test_open_corrupt_file_fails() {
    let (_dir, path) = create_data_file();
    fs::write(&path, "not json").unwrap();
    assert!(matches!(
        Persistence::open(&path),
        Err(PersistenceError::Parse { .. })
    ));
}

#[test]
fn test_persistence_error_display() {
    let err: PersistenceError = PersistenceError::Core(CoreError::DuplicateEmployee(id("E1")));
    assert_eq!(err.to_string(), "Employee 'E1' already exists");
}
