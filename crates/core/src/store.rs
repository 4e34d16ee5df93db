// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use payroll_domain::{Employee, EmployeeId};

/// The authoritative in-memory collection of employees.
///
/// Records are keyed by employee id and kept in insertion order so listings
/// and reports are deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    employees: Vec<Employee>,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// Builds a store from a sequence of employees.
    ///
    /// The first employee with a given id wins. Later employees with the same
    /// id are returned so the caller can report them.
    #[must_use]
    pub fn from_employees(employees: impl IntoIterator<Item = Employee>) -> (Self, Vec<Employee>) {
        let mut store: Self = Self::new();
        let mut duplicates: Vec<Employee> = Vec::new();
        for employee in employees {
            if store.contains(employee.employee_id()) {
                duplicates.push(employee);
            } else {
                store.employees.push(employee);
            }
        }
        (store, duplicates)
    }

    /// Inserts an employee.
    ///
    /// Returns `false` and leaves the store untouched if the id is already present.
    pub fn add(&mut self, employee: Employee) -> bool {
        if self.contains(employee.employee_id()) {
            return false;
        }
        self.employees.push(employee);
        true
    }

    /// Removes the employee with the given id.
    ///
    /// Returns `false` if no such employee exists.
    pub fn remove(&mut self, employee_id: &EmployeeId) -> bool {
        self.position(employee_id).is_some_and(|index| {
            self.employees.remove(index);
            true
        })
    }

    /// Looks up an employee by id.
    #[must_use]
    pub fn find(&self, employee_id: &EmployeeId) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|employee| employee.employee_id() == employee_id)
    }

    pub(crate) fn find_mut(&mut self, employee_id: &EmployeeId) -> Option<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|employee| employee.employee_id() == employee_id)
    }

    /// Returns whether an employee with the given id exists.
    #[must_use]
    pub fn contains(&self, employee_id: &EmployeeId) -> bool {
        self.position(employee_id).is_some()
    }

    /// Sums the monthly pay of every employee. Zero for an empty store.
    #[must_use]
    pub fn total_payroll(&self) -> f64 {
        self.employees.iter().map(Employee::calculate_salary).sum()
    }

    /// Returns every employee in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of employees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns whether the store holds no employees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn position(&self, employee_id: &EmployeeId) -> Option<usize> {
        self.employees
            .iter()
            .position(|employee| employee.employee_id() == employee_id)
    }
}
