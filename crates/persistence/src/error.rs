// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use payroll::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The data file exists but could not be read.
    #[error("Failed to read data file '{}': {source}", .path.display())]
    Load {
        /// The data file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The data file is not a JSON array.
    #[error("Data file '{}' is not a valid record list: {source}", .path.display())]
    Parse {
        /// The data file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The data file could not be written.
    #[error("Failed to write data file '{}': {source}", .path.display())]
    Persist {
        /// The data file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The records could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The command was rejected by the record store.
    #[error(transparent)]
    Core(#[from] CoreError),
}
