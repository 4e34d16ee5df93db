// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use payroll_domain::{Employee, EmployeeId};

/// A requested change to the record store, as data only.
///
/// Commands are the only way the persistence layer mutates a store.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert a new employee.
    AddEmployee(Employee),
    /// Delete an employee.
    RemoveEmployee(EmployeeId),
    /// Move an employee to another department.
    UpdateDepartment {
        /// The employee to change.
        employee_id: EmployeeId,
        /// The new department.
        department: String,
    },
    /// Change the monthly salary of a full-time employee or manager.
    SetMonthlySalary {
        /// The employee to change.
        employee_id: EmployeeId,
        /// The new salary.
        amount: f64,
    },
    /// Change the hourly rate of a part-time employee.
    SetHourlyRate {
        /// The employee to change.
        employee_id: EmployeeId,
        /// The new rate.
        amount: f64,
    },
    /// Change the monthly hours of a part-time employee.
    SetHoursWorked {
        /// The employee to change.
        employee_id: EmployeeId,
        /// The new hours.
        amount: f64,
    },
    /// Change a manager's bonus.
    SetBonus {
        /// The employee to change.
        employee_id: EmployeeId,
        /// The new bonus.
        amount: f64,
    },
}

impl Command {
    /// Returns the id of the employee this command targets.
    #[must_use]
    pub const fn employee_id(&self) -> &EmployeeId {
        match self {
            Self::AddEmployee(employee) => employee.employee_id(),
            Self::RemoveEmployee(employee_id)
            | Self::UpdateDepartment { employee_id, .. }
            | Self::SetMonthlySalary { employee_id, .. }
            | Self::SetHourlyRate { employee_id, .. }
            | Self::SetHoursWorked { employee_id, .. }
            | Self::SetBonus { employee_id, .. } => employee_id,
        }
    }

    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddEmployee(_) => "AddEmployee",
            Self::RemoveEmployee(_) => "RemoveEmployee",
            Self::UpdateDepartment { .. } => "UpdateDepartment",
            Self::SetMonthlySalary { .. } => "SetMonthlySalary",
            Self::SetHourlyRate { .. } => "SetHourlyRate",
            Self::SetHoursWorked { .. } => "SetHoursWorked",
            Self::SetBonus { .. } => "SetBonus",
        }
    }
}
