//! Alias data loading errors.
//!
//! None of these are fatal: [`AliasIndex::load`](super::AliasIndex::load) logs them and falls
//! back to the embedded dataset.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AliasError {
    /// No file was configured for the table.
    #[error("no {table} file configured")]
    NotConfigured { table: &'static str },

    /// The file could not be opened or read.
    #[error("failed to read {table} at {path}: {source}")]
    Io {
        table: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a well-formed table.
    #[error("malformed {table} at {path}: {reason}")]
    Malformed {
        table: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// The file parsed but yielded no usable rows.
    #[error("{table} at {path} contains no usable rows")]
    Empty { table: &'static str, path: PathBuf },
}

impl AliasError {
    pub(crate) fn from_csv(table: &'static str, path: &std::path::Path, err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(source) => AliasError::Io {
                    table,
                    path: path.to_path_buf(),
                    source,
                },
                other => AliasError::Malformed {
                    table,
                    path: path.to_path_buf(),
                    reason: format!("{:?}", other),
                },
            }
        } else {
            AliasError::Malformed {
                table,
                path: path.to_path_buf(),
                reason: err.to_string(),
            }
        }
    }
}
