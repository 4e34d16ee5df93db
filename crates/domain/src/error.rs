// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur while building or decoding employee records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Employee id is empty or whitespace only.
    #[error("Invalid employee id: {0}")]
    InvalidEmployeeId(String),
    /// The employee type tag is not one of the known variants.
    #[error("Unknown employee type: '{0}'")]
    UnknownEmployeeKind(String),
    /// A monetary or hour field was given a negative, NaN or infinite value.
    #[error("Field '{field}' must be a finite non-negative number, got {value}")]
    NegativeAmount {
        /// The field being assigned.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A stored record could not be turned back into an employee.
    #[error("Malformed employee record: {reason}")]
    MalformedRecord {
        /// What was wrong with the record.
        reason: String,
    },
}

impl DomainError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }
}
