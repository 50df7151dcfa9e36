//! Error types for the Tenor library.
//!
//! Every failure a calculation can report falls into one of three kinds:
//!
//! - [`ErrorKind::Validation`]: malformed or inconsistent input, raised before
//!   any computation starts
//! - [`ErrorKind::CurveConstruction`]: a bootstrapping or splicing step cannot
//!   produce a valid rate
//! - [`ErrorKind::Computation`]: a numerical routine failed to converge
//!
//! The per-crate error enums convert into [`TenorError`], so a boundary layer
//! only ever has to map these three kinds onto its own failure responses.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A specialized Result type for Tenor operations.
pub type TenorResult<T> = Result<T, TenorError>;

/// Coarse classification of a [`TenorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed or inconsistent input shape.
    Validation,
    /// A curve step could not produce a valid rate.
    CurveConstruction,
    /// A numerical routine failed.
    Computation,
}

impl ErrorKind {
    /// Returns the stable machine-readable code for this kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::CurveConstruction => "CURVE_CONSTRUCTION_ERROR",
            ErrorKind::Computation => "COMPUTATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The structured error every Tenor calculation surfaces to its caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TenorError {
    /// Input failed validation.
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the invalid input.
        message: String,
    },

    /// A curve could not be constructed.
    #[error("Curve construction failed{}: {message}", at_maturity(.maturity))]
    CurveConstruction {
        /// Description of the failure.
        message: String,
        /// Maturity (in years) of the offending step, when known.
        maturity: Option<f64>,
    },

    /// A numerical computation failed.
    #[error("Computation failed: {message}")]
    Computation {
        /// Description of the failure.
        message: String,
    },
}

fn at_maturity(maturity: &Option<f64>) -> String {
    maturity.map(|m| format!(" at maturity {m}")).unwrap_or_default()
}

impl TenorError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a curve construction error without a maturity.
    #[must_use]
    pub fn curve_construction(message: impl Into<String>) -> Self {
        Self::CurveConstruction {
            message: message.into(),
            maturity: None,
        }
    }

    /// Creates a curve construction error at a specific maturity.
    #[must_use]
    pub fn curve_construction_at(maturity: f64, message: impl Into<String>) -> Self {
        Self::CurveConstruction {
            message: message.into(),
            maturity: Some(maturity),
        }
    }

    /// Creates a computation error.
    #[must_use]
    pub fn computation(message: impl Into<String>) -> Self {
        Self::Computation {
            message: message.into(),
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::CurveConstruction { .. } => ErrorKind::CurveConstruction,
            Self::Computation { .. } => ErrorKind::Computation,
        }
    }

    /// Returns the bare message, without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::CurveConstruction { message, .. }
            | Self::Computation { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            TenorError::validation("bad").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            TenorError::curve_construction("bad").kind(),
            ErrorKind::CurveConstruction
        );
        assert_eq!(
            TenorError::computation("bad").kind(),
            ErrorKind::Computation
        );
    }

    #[test]
    fn test_curve_construction_display_names_maturity() {
        let err = TenorError::curve_construction_at(2.5, "log of non-positive value");
        let text = err.to_string();
        assert!(text.contains("2.5"));
        assert!(text.contains("log of non-positive value"));

        let err = TenorError::curve_construction("too few points");
        assert_eq!(err.to_string(), "Curve construction failed: too few points");
    }

    #[test]
    fn test_codes() {
        assert_eq!(ErrorKind::Validation.code(), "VALIDATION_ERROR");
        assert_eq!(
            serde_json::to_string(&ErrorKind::CurveConstruction).unwrap(),
            "\"CURVE_CONSTRUCTION\""
        );
    }
}
