// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{EmployeeId, EmployeeKind};
use crate::validation::{is_valid_amount, validate_amount};

/// Variant-specific pay fields.
///
/// Every amount held here is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub enum Compensation {
    /// Fixed monthly salary.
    FullTime {
        /// Monthly salary.
        monthly_salary: f64,
    },
    /// Paid by the hour.
    PartTime {
        /// Pay per hour worked.
        hourly_rate: f64,
        /// Hours worked in the month.
        hours_worked_per_month: f64,
    },
    /// Monthly salary plus a bonus.
    Manager {
        /// Monthly salary.
        monthly_salary: f64,
        /// Monthly bonus.
        bonus: f64,
    },
}

impl Compensation {
    /// Returns the variant this compensation belongs to.
    #[must_use]
    pub const fn kind(&self) -> EmployeeKind {
        match self {
            Self::FullTime { .. } => EmployeeKind::FullTime,
            Self::PartTime { .. } => EmployeeKind::PartTime,
            Self::Manager { .. } => EmployeeKind::Manager,
        }
    }

    /// Computes the monthly pay for this compensation.
    #[must_use]
    pub fn monthly_pay(&self) -> f64 {
        match self {
            Self::FullTime { monthly_salary } => *monthly_salary,
            Self::PartTime {
                hourly_rate,
                hours_worked_per_month,
            } => hourly_rate * hours_worked_per_month,
            Self::Manager {
                monthly_salary,
                bonus,
            } => monthly_salary + bonus,
        }
    }
}

/// An employee record.
///
/// The id never changes after construction. The department can be changed
/// freely; pay fields only through setters that refuse negative values.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    employee_id: EmployeeId,
    name: String,
    department: String,
    compensation: Compensation,
}

impl Employee {
    /// Creates a full-time employee from primitive inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the salary is negative.
    pub fn full_time(
        employee_id: &str,
        name: &str,
        department: &str,
        monthly_salary: f64,
    ) -> Result<Self, DomainError> {
        let compensation: Compensation = Compensation::FullTime {
            monthly_salary,
        };
        Self::new(EmployeeId::new(employee_id)?, name, department, compensation)
    }

    /// Creates a part-time employee from primitive inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the rate or hours are negative.
    pub fn part_time(
        employee_id: &str,
        name: &str,
        department: &str,
        hourly_rate: f64,
        hours_worked_per_month: f64,
    ) -> Result<Self, DomainError> {
        let compensation: Compensation = Compensation::PartTime {
            hourly_rate,
            hours_worked_per_month,
        };
        Self::new(EmployeeId::new(employee_id)?, name, department, compensation)
    }

    /// Creates a manager from primitive inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the salary or bonus are negative.
    pub fn manager(
        employee_id: &str,
        name: &str,
        department: &str,
        monthly_salary: f64,
        bonus: f64,
    ) -> Result<Self, DomainError> {
        let compensation: Compensation = Compensation::Manager {
            monthly_salary,
            bonus,
        };
        Self::new(EmployeeId::new(employee_id)?, name, department, compensation)
    }

    /// Creates an employee from an already validated id and compensation.
    ///
    /// # Errors
    ///
    /// Returns an error if any amount inside `compensation` is negative.
    pub fn new(
        employee_id: EmployeeId,
        name: &str,
        department: &str,
        compensation: Compensation,
    ) -> Result<Self, DomainError> {
        match &compensation {
            Compensation::FullTime { monthly_salary } => {
                validate_amount("monthly_salary", *monthly_salary)?;
            }
            Compensation::PartTime {
                hourly_rate,
                hours_worked_per_month,
            } => {
                validate_amount("hourly_rate", *hourly_rate)?;
                validate_amount("hours_worked_per_month", *hours_worked_per_month)?;
            }
            Compensation::Manager {
                monthly_salary,
                bonus,
            } => {
                validate_amount("monthly_salary", *monthly_salary)?;
                validate_amount("bonus", *bonus)?;
            }
        }
        Ok(Self {
            employee_id,
            name: name.to_owned(),
            department: department.to_owned(),
            compensation,
        })
    }

    /// Returns the employee id.
    #[must_use]
    pub const fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    /// Returns the employee name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the variant-specific pay fields.
    #[must_use]
    pub const fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    /// Returns which variant this employee is.
    #[must_use]
    pub const fn kind(&self) -> EmployeeKind {
        self.compensation.kind()
    }

    /// Returns the monthly salary for full-time employees and managers.
    #[must_use]
    pub const fn monthly_salary(&self) -> Option<f64> {
        match &self.compensation {
            Compensation::FullTime { monthly_salary }
            | Compensation::Manager { monthly_salary, .. } => Some(*monthly_salary),
            Compensation::PartTime { .. } => None,
        }
    }

    /// Returns the hourly rate for part-time employees.
    #[must_use]
    pub const fn hourly_rate(&self) -> Option<f64> {
        match &self.compensation {
            Compensation::PartTime { hourly_rate, .. } => Some(*hourly_rate),
            _ => None,
        }
    }

    /// Returns the monthly hours for part-time employees.
    #[must_use]
    pub const fn hours_worked_per_month(&self) -> Option<f64> {
        match &self.compensation {
            Compensation::PartTime {
                hours_worked_per_month,
                ..
            } => Some(*hours_worked_per_month),
            _ => None,
        }
    }

    /// Returns the bonus for managers.
    #[must_use]
    pub const fn bonus(&self) -> Option<f64> {
        match &self.compensation {
            Compensation::Manager { bonus, .. } => Some(*bonus),
            _ => None,
        }
    }

    /// Computes this employee's monthly pay.
    ///
    /// * full-time: the monthly salary
    /// * part-time: hourly rate times hours worked
    /// * manager: monthly salary plus bonus
    #[must_use]
    pub fn calculate_salary(&self) -> f64 {
        self.compensation.monthly_pay()
    }

    /// Formats the employee as a single human-readable line.
    #[must_use]
    pub fn display_details(&self) -> String {
        let base: String = format!(
            "ID: {}, Name: {}, Dept: {}",
            self.employee_id, self.name, self.department
        );
        match &self.compensation {
            Compensation::FullTime { monthly_salary } => {
                format!("{base}, Salary: {monthly_salary:.2}")
            }
            Compensation::PartTime {
                hourly_rate,
                hours_worked_per_month,
            } => format!("{base}, Hourly Rate: {hourly_rate:.2}, Hours: {hours_worked_per_month:.2}"),
            Compensation::Manager {
                monthly_salary,
                bonus,
            } => format!("{base}, Salary: {monthly_salary:.2}, Bonus: {bonus:.2}"),
        }
    }

    /// Moves the employee to another department.
    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    /// Sets the monthly salary of a full-time employee or manager.
    ///
    /// Returns `false` and leaves the record untouched when the value is
    /// negative or the employee has no monthly salary.
    pub fn set_monthly_salary(&mut self, value: f64) -> bool {
        if !is_valid_amount(value) {
            return false;
        }
        match &mut self.compensation {
            Compensation::FullTime { monthly_salary }
            | Compensation::Manager { monthly_salary, .. } => {
                *monthly_salary = value;
                true
            }
            Compensation::PartTime { .. } => false,
        }
    }

    /// Sets the hourly rate of a part-time employee.
    ///
    /// Returns `false` and leaves the record untouched when the value is
    /// negative or the employee is not part-time.
    pub fn set_hourly_rate(&mut self, value: f64) -> bool {
        if !is_valid_amount(value) {
            return false;
        }
        match &mut self.compensation {
            Compensation::PartTime { hourly_rate, .. } => {
                *hourly_rate = value;
                true
            }
            _ => false,
        }
    }

    /// Sets the monthly hours of a part-time employee.
    ///
    /// Returns `false` and leaves the record untouched when the value is
    /// negative or the employee is not part-time.
    pub fn set_hours_worked_per_month(&mut self, value: f64) -> bool {
        if !is_valid_amount(value) {
            return false;
        }
        match &mut self.compensation {
            Compensation::PartTime {
                hours_worked_per_month,
                ..
            } => {
                *hours_worked_per_month = value;
                true
            }
            _ => false,
        }
    }

    /// Sets a manager's bonus.
    ///
    /// Returns `false` and leaves the record untouched when the value is
    /// negative or the employee is not a manager.
    pub fn set_bonus(&mut self, value: f64) -> bool {
        if !is_valid_amount(value) {
            return false;
        }
        match &mut self.compensation {
            Compensation::Manager { bonus, .. } => {
                *bonus = value;
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_details())
    }
}
