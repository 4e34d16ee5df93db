// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between employees and their stored key/value form.
//!
//! A stored record is a JSON object tagged by `type`:
//!
//! ```json
//! { "type": "manager", "employee_id": "E3", "name": "Cy",
//!   "department": "Ops", "monthly_salary": 6000.0, "bonus": 1000.0 }
//! ```

use crate::employee::{Compensation, Employee};
use crate::error::DomainError;
use crate::types::{EmployeeId, EmployeeKind};
use serde_json::{Map, Value};

/// A single stored record.
pub type RecordMap = Map<String, Value>;

/// Field names used in stored records.
pub mod fields {
    /// Variant tag, one of `fulltime`, `parttime`, `manager`.
    pub const TYPE: &str = "type";
    /// Employee id, stored exactly as entered.
    pub const EMPLOYEE_ID: &str = "employee_id";
    /// Employee name.
    pub const NAME: &str = "name";
    /// Department.
    pub const DEPARTMENT: &str = "department";
    /// Monthly salary (full-time and manager).
    pub const MONTHLY_SALARY: &str = "monthly_salary";
    /// Pay per hour (part-time).
    pub const HOURLY_RATE: &str = "hourly_rate";
    /// Hours worked in the month (part-time).
    pub const HOURS_WORKED_PER_MONTH: &str = "hours_worked_per_month";
    /// Monthly bonus (manager).
    pub const BONUS: &str = "bonus";
}

impl Employee {
    /// Converts this employee into its stored form.
    #[must_use]
    pub fn to_record(&self) -> RecordMap {
        let mut record: RecordMap = Map::new();
        record.insert(fields::TYPE.to_owned(), Value::from(self.kind().as_str()));
        record.insert(
            fields::EMPLOYEE_ID.to_owned(),
            Value::from(self.employee_id().value()),
        );
        record.insert(fields::NAME.to_owned(), Value::from(self.name()));
        record.insert(fields::DEPARTMENT.to_owned(), Value::from(self.department()));

        match self.compensation() {
            Compensation::FullTime { monthly_salary } => {
                record.insert(fields::MONTHLY_SALARY.to_owned(), Value::from(*monthly_salary));
            }
            Compensation::PartTime {
                hourly_rate,
                hours_worked_per_month,
            } => {
                record.insert(fields::HOURLY_RATE.to_owned(), Value::from(*hourly_rate));
                record.insert(
                    fields::HOURS_WORKED_PER_MONTH.to_owned(),
                    Value::from(*hours_worked_per_month),
                );
            }
            Compensation::Manager {
                monthly_salary,
                bonus,
            } => {
                record.insert(fields::MONTHLY_SALARY.to_owned(), Value::from(*monthly_salary));
                record.insert(fields::BONUS.to_owned(), Value::from(*bonus));
            }
        }

        record
    }

    /// Rebuilds an employee from its stored form.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedRecord` if the value is not an object or
    /// [`Employee::from_record_map`] rejects it.
    pub fn from_record(value: &Value) -> Result<Self, DomainError> {
        let record: &RecordMap = value
            .as_object()
            .ok_or_else(|| DomainError::malformed("record is not an object"))?;
        Self::from_record_map(record)
    }

    /// Rebuilds an employee from a stored record object.
    ///
    /// Fields other than the ones the variant needs are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedRecord` if the `type` tag is missing or
    /// unrecognized, a required field is missing or has the wrong JSON type, or
    /// a field violates a record invariant.
    pub fn from_record_map(record: &RecordMap) -> Result<Self, DomainError> {
        let tag: &str = string_field(record, fields::TYPE)?;
        let kind: EmployeeKind = EmployeeKind::from_tag(tag)
            .map_err(|_| DomainError::malformed(format!("unrecognized type '{tag}'")))?;

        let employee_id: EmployeeId = EmployeeId::new(string_field(record, fields::EMPLOYEE_ID)?)
            .map_err(|err| DomainError::malformed(err.to_string()))?;
        let name: &str = string_field(record, fields::NAME)?;
        let department: &str = string_field(record, fields::DEPARTMENT)?;

        let compensation: Compensation = match kind {
            EmployeeKind::FullTime => Compensation::FullTime {
                monthly_salary: number_field(record, fields::MONTHLY_SALARY)?,
            },
            EmployeeKind::PartTime => Compensation::PartTime {
                hourly_rate: number_field(record, fields::HOURLY_RATE)?,
                hours_worked_per_month: number_field(record, fields::HOURS_WORKED_PER_MONTH)?,
            },
            EmployeeKind::Manager => Compensation::Manager {
                monthly_salary: number_field(record, fields::MONTHLY_SALARY)?,
                bonus: number_field(record, fields::BONUS)?,
            },
        };

        Self::new(employee_id, name, department, compensation)
            .map_err(|err| DomainError::malformed(err.to_string()))
    }
}

fn string_field<'a>(record: &'a RecordMap, field: &str) -> Result<&'a str, DomainError> {
    match record.get(field) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(DomainError::malformed(format!(
            "field '{field}' must be a string"
        ))),
        None => Err(DomainError::malformed(format!("missing field '{field}'"))),
    }
}

fn number_field(record: &RecordMap, field: &str) -> Result<f64, DomainError> {
    match record.get(field) {
        Some(Value::Number(value)) => value
            .as_f64()
            .ok_or_else(|| DomainError::malformed(format!("field '{field}' is out of range"))),
        Some(_) => Err(DomainError::malformed(format!(
            "field '{field}' must be a number"
        ))),
        None => Err(DomainError::malformed(format!("missing field '{field}'"))),
    }
}
