// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]

mod error;

use crate::Employee;

pub fn create_full_time() -> Employee {
    Employee::full_time("E1", "Ann", "Eng", 5000.0).unwrap()
}

pub fn create_part_time() -> Employee {
    Employee::part_time("E2", "Bo", "Ops", 20.0, 80.0).unwrap()
}

pub fn create_manager() -> Employee {
    Employee::manager("E3", "Cy", "Ops", 6000.0, 1000.0).unwrap()
}
