// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::RecordStore;
use payroll_domain::{Employee, EmployeeId, EmployeeKind};

/// One employee's entry in a payroll report.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollLine {
    /// The employee id.
    pub employee_id: EmployeeId,
    /// The employee name.
    pub name: String,
    /// The employee variant.
    pub kind: EmployeeKind,
    /// The computed monthly pay.
    pub salary: f64,
}

impl From<&Employee> for PayrollLine {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id().clone(),
            name: employee.name().to_owned(),
            kind: employee.kind(),
            salary: employee.calculate_salary(),
        }
    }
}

/// A payroll report over every employee in a store.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollReport {
    /// Entries in store order.
    pub lines: Vec<PayrollLine>,
    /// Sum of every entry's salary.
    pub total: f64,
}

impl PayrollReport {
    /// Builds a report from the current contents of a store.
    #[must_use]
    pub fn generate(store: &RecordStore) -> Self {
        Self {
            lines: store.all().iter().map(PayrollLine::from).collect(),
            total: store.total_payroll(),
        }
    }
}

impl std::fmt::Display for PayrollReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Payroll Report:")?;
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "ID: {}", line.employee_id)?;
            writeln!(f, "Name: {}", line.name)?;
            writeln!(f, "Type: {}", line.kind.label())?;
            writeln!(f, "Salary: {:.2}", line.salary)?;
        }
        writeln!(f)?;
        write!(f, "Total Payroll: {:.2}", self.total)
    }
}
