//! CLI error types.

use tenor_analytics::AnalyticsError;
use tenor_core::{ErrorKind, TenorError};
use tenor_export::ExportError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument combination the calculation cannot use.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Calculation rejected its input or failed.
    #[error("{message}")]
    Calculation {
        /// Error category.
        kind: ErrorKind,
        /// Description.
        message: String,
    },

    /// Curve files could not be written.
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl From<TenorError> for CliError {
    fn from(err: TenorError) -> Self {
        Self::Calculation {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<AnalyticsError> for CliError {
    fn from(err: AnalyticsError) -> Self {
        TenorError::from(err).into()
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
