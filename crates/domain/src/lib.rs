// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee records for the payroll system.
//!
//! An [`Employee`] is one of a closed set of variants (full-time, part-time,
//! manager). Each variant carries its own pay fields and salary rule, and
//! converts to and from a `type`-tagged key/value record for storage.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod employee;
mod error;
mod record;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use employee::{Compensation, Employee};
pub use error::DomainError;
pub use record::{RecordMap, fields};
pub use types::{EmployeeId, EmployeeKind};
pub use validation::{is_valid_amount, validate_amount};
