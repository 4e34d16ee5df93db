// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod apply;
mod command;
mod error;
mod report;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{Applied, apply};
pub use command::Command;
pub use error::CoreError;
pub use report::{PayrollLine, PayrollReport};
pub use store::RecordStore;
