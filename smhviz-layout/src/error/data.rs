//! Errors raised while reading input files.

use std::path::PathBuf;

/// Errors that can occur while loading CSV, markdown or configuration files.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV file is malformed.
    #[error("Failed to parse CSV {path}: {source}")]
    Csv {
        /// Path of the CSV file.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the CSV header.
    #[error("Missing column '{column}' in {path}")]
    MissingColumn {
        /// Path of the CSV file.
        path: PathBuf,
        /// Name of the missing column.
        column: String,
    },

    /// The configuration file is not valid JSON for the expected shape.
    #[error("Invalid configuration {path}: {source}")]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl DataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
