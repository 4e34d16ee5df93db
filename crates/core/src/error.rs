// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use payroll_domain::{DomainError, EmployeeId};
use thiserror::Error;

/// Errors that can occur while applying a command to the record store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// An employee with this id is already in the store.
    #[error("Employee '{0}' already exists")]
    DuplicateEmployee(EmployeeId),
    /// No employee with this id is in the store.
    #[error("Employee '{0}' not found")]
    EmployeeNotFound(EmployeeId),
}
