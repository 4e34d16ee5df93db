// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidEmployeeId(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid employee id: test");

    let err: DomainError = DomainError::UnknownEmployeeKind(String::from("contractor"));
    assert_eq!(format!("{err}"), "Unknown employee type: 'contractor'");

    let err: DomainError = DomainError::NegativeAmount {
        field: "bonus",
        value: -2.5,
    };
    assert_eq!(
        format!("{err}"),
        "Field 'bonus' must be a finite non-negative number, got -2.5"
    );

    let err: DomainError = DomainError::MalformedRecord {
        reason: String::from("missing field 'name'"),
    };
    assert_eq!(
        format!("{err}"),
        "Malformed employee record: missing field 'name'"
    );
}
