// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries. None of these touch the data file.

use crate::Persistence;
use payroll::{PayrollReport, RecordStore};
use payroll_domain::{Employee, EmployeeId};

impl Persistence {
    /// Returns the in-memory store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Looks up an employee by id.
    #[must_use]
    pub fn find(&self, employee_id: &EmployeeId) -> Option<&Employee> {
        self.store.find(employee_id)
    }

    /// Returns every employee in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Employee] {
        self.store.all()
    }

    /// Sums the monthly pay of every employee.
    #[must_use]
    pub fn total_payroll(&self) -> f64 {
        self.store.total_payroll()
    }

    /// Builds a payroll report over every employee.
    #[must_use]
    pub fn report(&self) -> PayrollReport {
        PayrollReport::generate(&self.store)
    }
}
