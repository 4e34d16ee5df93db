// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_full_time, create_manager, create_populated_store, id};
use crate::{Applied, Command, CoreError, RecordStore, apply};
use payroll_domain::Employee;

#[test]
fn test_apply_add_employee() {
    let mut store: RecordStore = RecordStore::new();
    let result: Result<Applied, CoreError> =
        apply(&mut store, Command::AddEmployee(create_full_time()));
    assert_eq!(result, Ok(Applied::Changed));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_apply_add_duplicate_fails_without_mutation() {
    let mut store: RecordStore = create_populated_store();
    let before: RecordStore = store.clone();

    let impostor: Employee = Employee::full_time("E1", "Eve", "Sales", 1.0).unwrap();
    let result: Result<Applied, CoreError> = apply(&mut store, Command::AddEmployee(impostor));

    assert_eq!(result, Err(CoreError::DuplicateEmployee(id("E1"))));
    assert_eq!(store, before);
}

#[test]
fn test_apply_remove_employee() {
    let mut store: RecordStore = create_populated_store();
    let result: Result<Applied, CoreError> =
        apply(&mut store, Command::RemoveEmployee(id("E3")));
    assert_eq!(result, Ok(Applied::Changed));
    assert!(!store.contains(&id("E3")));
}

#[test]
fn test_apply_remove_missing_employee() {
    let mut store: RecordStore = create_populated_store();
    let result: Result<Applied, CoreError> =
        apply(&mut store, Command::RemoveEmployee(id("E42")));
    assert_eq!(result, Err(CoreError::EmployeeNotFound(id("E42"))));
    assert_eq!(store.len(), 3);
}

#[test]
fn test_apply_update_department() {
    let mut store: RecordStore = create_populated_store();
    let result: Result<Applied, CoreError> = apply(
        &mut store,
        Command::UpdateDepartment {
            employee_id: id("E1"),
            department: String::from("Research"),
        },
    );
    assert_eq!(result, Ok(Applied::Changed));
    assert_eq!(store.find(&id("E1")).unwrap().department(), "Research");
}

#[test]
fn test_apply_update_department_to_same_value_is_unchanged() {
    let mut store: RecordStore = create_populated_store();
    let result: Result<Applied, CoreError> = apply(
        &mut store,
        Command::UpdateDepartment {
            employee_id: id("E1"),
            department: String::from("Eng"),
        },
    );
    assert_eq!(result, Ok(Applied::Unchanged));
}

#[test]
fn test_apply_setters_change_pay() {
    let mut store: RecordStore = create_populated_store();

    let commands: Vec<Command> = vec![
        Command::SetMonthlySalary {
            employee_id: id("E1"),
            amount: 5200.0,
        },
        Command::SetHourlyRate {
            employee_id: id("E2"),
            amount: 25.0,
        },
        Command::SetHoursWorked {
            employee_id: id("E2"),
            amount: 100.0,
        },
        Command::SetBonus {
            employee_id: id("E3"),
            amount: 1500.0,
        },
    ];
    for command in commands {
        assert_eq!(apply(&mut store, command), Ok(Applied::Changed));
    }

    assert_eq!(store.find(&id("E1")).unwrap().calculate_salary(), 5200.0);
    assert_eq!(store.find(&id("E2")).unwrap().calculate_salary(), 2500.0);
    assert_eq!(store.find(&id("E3")).unwrap().calculate_salary(), 7500.0);
    assert_eq!(store.total_payroll(), 15200.0);
}

#[test]
fn test_apply_negative_amount_is_silently_unchanged() {
    let mut store: RecordStore = create_populated_store();
    let before: RecordStore = store.clone();

    let result: Result<Applied, CoreError> = apply(
        &mut store,
        Command::SetBonus {
            employee_id: id("E3"),
            amount: -1.0,
        },
    );

    assert_eq!(result, Ok(Applied::Unchanged));
    assert!(!result.unwrap().is_changed());
    assert_eq!(store, before);
    assert_eq!(store.find(&id("E3")), Some(&create_manager()));
}

#[test]
fn test_apply_setter_for_missing_field_is_unchanged() {
    let mut store: RecordStore = create_populated_store();
    let result: Result<Applied, CoreError> = apply(
        &mut store,
        Command::SetBonus {
            employee_id: id("E1"),
            amount: 100.0,
        },
    );
    assert_eq!(result, Ok(Applied::Unchanged));
}

#[test]
fn test_apply_setter_on_missing_employee() {
    let mut store: RecordStore = create_populated_store();
    let result: Result<Applied, CoreError> = apply(
        &mut store,
        Command::SetMonthlySalary {
            employee_id: id("nobody"),
            amount: 100.0,
        },
    );
    assert_eq!(result, Err(CoreError::EmployeeNotFound(id("nobody"))));
}

#[test]
fn test_command_identity() {
    let command: Command = Command::SetHoursWorked {
        employee_id: id("E2"),
        amount: 1.0,
    };
    assert_eq!(command.employee_id(), &id("E2"));
    assert_eq!(command.name(), "SetHoursWorked");

    let command: Command = Command::AddEmployee(create_full_time());
    assert_eq!(command.employee_id(), &id("E1"));
    assert_eq!(command.name(), "AddEmployee");
}

#[test]
fn test_core_error_display() {
    assert_eq!(
        CoreError::DuplicateEmployee(id("E1")).to_string(),
        "Employee 'E1' already exists"
    );
    assert_eq!(
        CoreError::EmployeeNotFound(id("E9")).to_string(),
        "Employee 'E9' not found"
    );
}
