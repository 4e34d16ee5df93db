// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reading and writing the JSON data file.
//!
//! The file holds one pretty-printed JSON array of employee records. It is
//! always rewritten in full: the new contents go to a temporary file in the
//! same directory, which is then renamed over the old one.

use crate::error::PersistenceError;
use payroll::RecordStore;
use payroll_domain::{Employee, RecordMap};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Loads a record store from the data file at `path`.
///
/// A missing file yields an empty store. Records that cannot be decoded
/// (unknown `type`, missing fields) and records repeating an earlier id are
/// skipped with a warning.
///
/// # Errors
///
/// Returns `PersistenceError::Load` if the file exists but cannot be read and
/// `PersistenceError::Parse` if it is not a JSON array of objects.
pub fn load(path: &Path) -> Result<RecordStore, PersistenceError> {
    let contents: String = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "Data file not found, starting with an empty store");
            return Ok(RecordStore::new());
        }
        Err(source) => {
            return Err(PersistenceError::Load {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let store: RecordStore = decode(&contents).map_err(|source| PersistenceError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), employees = store.len(), "Loaded employee records");
    Ok(store)
}

/// Writes every record in `store` to the data file at `path`.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns `PersistenceError::Persist` if the file cannot be written.
pub fn save(path: &Path, store: &RecordStore) -> Result<(), PersistenceError> {
    let contents: Vec<u8> = encode(store)?;
    let persist_error = |source: io::Error| PersistenceError::Persist {
        path: path.to_path_buf(),
        source,
    };

    let dir: &Path = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(persist_error)?;

    let mut file: NamedTempFile = NamedTempFile::new_in(dir).map_err(persist_error)?;
    file.write_all(&contents).map_err(persist_error)?;
    file.as_file().sync_all().map_err(persist_error)?;
    file.persist(path).map_err(|err| persist_error(err.error))?;

    debug!(path = %path.display(), employees = store.len(), bytes = contents.len(), "Wrote data file");
    Ok(())
}

/// Encodes a store as the pretty-printed JSON array stored on disk.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(store: &RecordStore) -> Result<Vec<u8>, serde_json::Error> {
    let records: Vec<RecordMap> = store.all().iter().map(Employee::to_record).collect();

    let mut buffer: Vec<u8> = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Decodes the on-disk JSON array into a store, skipping bad records.
///
/// # Errors
///
/// Returns an error if `contents` is not a JSON array of objects.
pub fn decode(contents: &str) -> Result<RecordStore, serde_json::Error> {
    let records: Vec<RecordMap> = serde_json::from_str(contents)?;

    let employees: Vec<Employee> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match Employee::from_record_map(record) {
            Ok(employee) => Some(employee),
            Err(err) => {
                warn!(index, error = %err, "Skipping employee record");
                None
            }
        })
        .collect();

    let (store, duplicates) = RecordStore::from_employees(employees);
    for duplicate in duplicates {
        warn!(employee_id = %duplicate.employee_id(), "Skipping employee record with duplicate id");
    }

    Ok(store)
}
