// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Identifies an employee within a record store.
///
/// The id is immutable once created and is never empty or whitespace only.
/// It is stored exactly as given, so ids differing only in padding are
/// distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId {
    value: String,
}

impl EmployeeId {
    /// Creates a new `EmployeeId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmployeeId` if the value is empty or only
    /// whitespace.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidEmployeeId(String::from(
                "Employee id cannot be empty",
            )));
        }
        Ok(Self {
            value: value.to_owned(),
        })
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.value
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq<str> for EmployeeId {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for EmployeeId {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

/// The closed set of employee variants.
///
/// The wire tag (`as_str`) is what the data file stores in its `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeKind {
    /// Salaried full-time employee.
    FullTime,
    /// Hourly part-time employee.
    PartTime,
    /// Salaried manager with a bonus.
    Manager,
}

impl EmployeeKind {
    /// All variants, in declaration order.
    pub const ALL: [Self; 3] = [Self::FullTime, Self::PartTime, Self::Manager];

    /// Returns the wire tag stored in the `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "fulltime",
            Self::PartTime => "parttime",
            Self::Manager => "manager",
        }
    }

    /// Looks up the variant for a stored `type` tag. The match is exact.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEmployeeKind` if no variant uses `tag`.
    pub fn from_tag(tag: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| DomainError::UnknownEmployeeKind(tag.to_owned()))
    }

    /// Returns the label used in payroll reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "FullTime",
            Self::PartTime => "PartTime",
            Self::Manager => "Manager",
        }
    }
}

impl std::fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
