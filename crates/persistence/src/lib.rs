// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the payroll system.
//!
//! Employee records live in a single JSON file. The [`Persistence`] adapter
//! loads the file once when opened and keeps the [`RecordStore`] in memory;
//! every mutation that changes the store rewrites the whole file before it
//! returns.
//!
//! ## File Format
//!
//! ```json
//! [
//!     {
//!         "type": "fulltime",
//!         "employee_id": "E1",
//!         "name": "Ann",
//!         "department": "Eng",
//!         "monthly_salary": 5000.0
//!     }
//! ]
//! ```
//!
//! ## Failure Semantics
//!
//! - A missing file is an empty store.
//! - A file that is not a JSON array of objects fails the load.
//! - Individual records that cannot be decoded are skipped with a warning.
//! - If a write fails, the in-memory store keeps the change and remains the
//!   source of truth; the error is returned to the caller.
//! - A crash in the middle of a write leaves either the old or the new file,
//!   never a mix, since writes go through a temporary file and a rename.

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

use payroll::{Applied, Command, RecordStore, apply};
use std::path::{Path, PathBuf};
use tracing::info;

mod error;
mod file;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use file::{load, save};

/// Persistence adapter owning the record store and its data file.
#[derive(Debug)]
pub struct Persistence {
    path: PathBuf,
    store: RecordStore,
}

impl Persistence {
    /// Opens the data file at `path`, loading any existing records.
    ///
    /// # Arguments
    ///
    /// * `path` - The JSON data file; it does not need to exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let store: RecordStore = file::load(&path)?;
        Ok(Self { path, store })
    }

    /// Returns the data file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the data file from the in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn persist(&self) -> Result<(), PersistenceError> {
        file::save(&self.path, &self.store)
    }

    /// Applies a command and persists the store if it changed.
    ///
    /// The store is only written when the command actually modified it.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is rejected by the store or the file
    /// cannot be written. In the latter case the change stays applied in memory.
    pub fn execute(&mut self, command: Command) -> Result<Applied, PersistenceError> {
        let name: &'static str = command.name();
        let applied: Applied = apply(&mut self.store, command)?;
        if applied.is_changed() {
            self.persist()?;
            info!(command = name, employees = self.store.len(), "Persisted employee records");
        }
        Ok(applied)
    }
}
