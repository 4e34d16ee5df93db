// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Returns whether a monetary or hour value is finite and non-negative.
///
/// NaN and infinities are never valid amounts; JSON has no encoding for them.
#[must_use]
pub const fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Validates a monetary or hour value supplied at construction time.
///
/// # Arguments
///
/// * `field` - The field name, used in the error
/// * `value` - The value to validate
///
/// # Errors
///
/// Returns `DomainError::NegativeAmount` if the value is negative, NaN or
/// infinite.
pub const fn validate_amount(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if is_valid_amount(value) {
        Ok(value)
    } else {
        Err(DomainError::NegativeAmount { field, value })
    }
}
