// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutating operations on the persisted store.
//!
//! Every operation goes through `Persistence::execute`, so the data file is
//! rewritten exactly when the store changes.

use crate::{Persistence, PersistenceError};
use payroll::{Applied, Command, CoreError};
use payroll_domain::{Employee, EmployeeId};
use tracing::debug;

impl Persistence {
    /// Adds an employee and persists the store.
    ///
    /// Returns `Ok(false)` without writing if the id is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file cannot be written.
    pub fn add(&mut self, employee: Employee) -> Result<bool, PersistenceError> {
        match self.execute(Command::AddEmployee(employee)) {
            Ok(_) => Ok(true),
            Err(PersistenceError::Core(CoreError::DuplicateEmployee(employee_id))) => {
                debug!(%employee_id, "Employee id already exists");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Removes an employee and persists the store.
    ///
    /// Returns `Ok(false)` without writing if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file cannot be written.
    pub fn remove(&mut self, employee_id: &EmployeeId) -> Result<bool, PersistenceError> {
        match self.execute(Command::RemoveEmployee(employee_id.clone())) {
            Ok(_) => Ok(true),
            Err(PersistenceError::Core(CoreError::EmployeeNotFound(_))) => {
                debug!(%employee_id, "Employee not found");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Moves an employee to another department.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee does not exist or the data file
    /// cannot be written.
    pub fn update_department(
        &mut self,
        employee_id: &EmployeeId,
        department: &str,
    ) -> Result<Applied, PersistenceError> {
        self.execute(Command::UpdateDepartment {
            employee_id: employee_id.clone(),
            department: department.to_owned(),
        })
    }

    /// Sets the monthly salary of a full-time employee or manager.
    ///
    /// Negative amounts and employees without a monthly salary yield
    /// `Applied::Unchanged` and no write.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee does not exist or the data file
    /// cannot be written.
    pub fn set_monthly_salary(
        &mut self,
        employee_id: &EmployeeId,
        amount: f64,
    ) -> Result<Applied, PersistenceError> {
        self.execute(Command::SetMonthlySalary {
            employee_id: employee_id.clone(),
            amount,
        })
    }

    /// Sets the hourly rate of a part-time employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee does not exist or the data file
    /// cannot be written.
    pub fn set_hourly_rate(
        &mut self,
        employee_id: &EmployeeId,
        amount: f64,
    ) -> Result<Applied, PersistenceError> {
        self.execute(Command::SetHourlyRate {
            employee_id: employee_id.clone(),
            amount,
        })
    }

    /// Sets the monthly hours of a part-time employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee does not exist or the data file
    /// cannot be written.
    pub fn set_hours_worked(
        &mut self,
        employee_id: &EmployeeId,
        amount: f64,
    ) -> Result<Applied, PersistenceError> {
        self.execute(Command::SetHoursWorked {
            employee_id: employee_id.clone(),
            amount,
        })
    }

    /// Sets a manager's bonus.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee does not exist or the data file
    /// cannot be written.
    pub fn set_bonus(
        &mut self,
        employee_id: &EmployeeId,
        amount: f64,
    ) -> Result<Applied, PersistenceError> {
        self.execute(Command::SetBonus {
            employee_id: employee_id.clone(),
            amount,
        })
    }
}
