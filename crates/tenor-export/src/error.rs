//! Error types for curve export.

use std::path::PathBuf;

use tenor_core::TenorError;
use thiserror::Error;

/// A specialized Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised while writing curve files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// CSV writer failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet writer failed.
    #[error("spreadsheet write failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// Nothing to export.
    #[error("no rows to export for {kind}")]
    Empty {
        /// Curve kind tag.
        kind: &'static str,
    },
}

impl ExportError {
    /// Creates an I/O error bound to a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ExportError> for TenorError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Empty { .. } => TenorError::validation(err.to_string()),
            _ => TenorError::computation(err.to_string()),
        }
    }
}
