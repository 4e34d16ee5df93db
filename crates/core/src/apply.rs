// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::store::RecordStore;
use payroll_domain::{Employee, EmployeeId};
use tracing::debug;

/// Outcome of a command that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The store was modified and must be persisted.
    Changed,
    /// The command was accepted but left the store as it was, e.g. a negative
    /// amount handed to a setter.
    Unchanged,
}

impl Applied {
    /// Returns whether the store was modified.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Applies a command to the store.
///
/// A command either fully succeeds or leaves the store untouched.
///
/// # Arguments
///
/// * `store` - The store to mutate
/// * `command` - The change to apply
///
/// # Returns
///
/// * `Ok(Applied::Changed)` if the store was modified
/// * `Ok(Applied::Unchanged)` if a field setter rejected its value
///
/// # Errors
///
/// Returns an error if:
/// - an added employee's id already exists
/// - the targeted employee does not exist
pub fn apply(store: &mut RecordStore, command: Command) -> Result<Applied, CoreError> {
    debug!(command = command.name(), employee_id = %command.employee_id(), "applying command");

    match command {
        Command::AddEmployee(employee) => {
            let employee_id: EmployeeId = employee.employee_id().clone();
            if store.add(employee) {
                Ok(Applied::Changed)
            } else {
                Err(CoreError::DuplicateEmployee(employee_id))
            }
        }
        Command::RemoveEmployee(employee_id) => {
            if store.remove(&employee_id) {
                Ok(Applied::Changed)
            } else {
                Err(CoreError::EmployeeNotFound(employee_id))
            }
        }
        Command::UpdateDepartment {
            employee_id,
            department,
        } => {
            let employee: &mut Employee = find_mut(store, employee_id)?;
            if employee.department() == department {
                return Ok(Applied::Unchanged);
            }
            employee.set_department(department);
            Ok(Applied::Changed)
        }
        Command::SetMonthlySalary {
            employee_id,
            amount,
        } => Ok(changed_if(
            find_mut(store, employee_id)?.set_monthly_salary(amount),
        )),
        Command::SetHourlyRate {
            employee_id,
            amount,
        } => Ok(changed_if(
            find_mut(store, employee_id)?.set_hourly_rate(amount),
        )),
        Command::SetHoursWorked {
            employee_id,
            amount,
        } => Ok(changed_if(
            find_mut(store, employee_id)?.set_hours_worked_per_month(amount),
        )),
        Command::SetBonus {
            employee_id,
            amount,
        } => Ok(changed_if(find_mut(store, employee_id)?.set_bonus(amount))),
    }
}

fn find_mut(store: &mut RecordStore, employee_id: EmployeeId) -> Result<&mut Employee, CoreError> {
    store
        .find_mut(&employee_id)
        .ok_or(CoreError::EmployeeNotFound(employee_id))
}

const fn changed_if(applied: bool) -> Applied {
    if applied {
        Applied::Changed
    } else {
        Applied::Unchanged
    }
}
