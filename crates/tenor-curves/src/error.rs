//! Error types for curve operations.

use tenor_core::TenorError;
use tenor_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Input failed validation before any solving started.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Tenors are not strictly increasing where they must be.
    #[error("Non-monotonic tenors at index {index}: {prev:.4} >= {current:.4}")]
    NonMonotonicTenors {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous tenor value.
        prev: f64,
        /// Current tenor value.
        current: f64,
    },

    /// Not enough distinct points to build a curve.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of distinct points.
        got: usize,
    },

    /// The closed-form zero-rate solve needs the log of a non-positive number.
    #[error(
        "Cannot solve zero rate at maturity {maturity}: ln({numerator:.6} / {denominator:.6}) is undefined"
    )]
    NonPositiveLogArgument {
        /// Maturity of the bond being solved.
        maturity: f64,
        /// Price net of discounted coupons.
        numerator: f64,
        /// Final cash flow.
        denominator: f64,
    },

    /// Interpolation over the merged points failed.
    #[error("Interpolation error: {reason}")]
    Interpolation {
        /// Description of the interpolation error.
        reason: String,
    },
}

impl CurveError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }
}

impl From<TenorError> for CurveError {
    fn from(err: TenorError) -> Self {
        match err {
            TenorError::Validation { message } => Self::InvalidInput { reason: message },
            TenorError::CurveConstruction { message, .. } | TenorError::Computation { message } => {
                Self::Interpolation { reason: message }
            }
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        Self::Interpolation {
            reason: err.to_string(),
        }
    }
}

impl From<CurveError> for TenorError {
    fn from(err: CurveError) -> Self {
        match &err {
            CurveError::InvalidInput { .. } | CurveError::NonMonotonicTenors { .. } => {
                TenorError::validation(err.to_string())
            }
            CurveError::NonPositiveLogArgument { maturity, .. } => {
                TenorError::curve_construction_at(*maturity, err.to_string())
            }
            CurveError::InsufficientPoints { .. } | CurveError::Interpolation { .. } => {
                TenorError::curve_construction(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenor_core::ErrorKind;

    #[test]
    fn test_kind_mapping() {
        let err: TenorError = CurveError::invalid_input("bad").into();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err: TenorError = CurveError::insufficient_points(2, 1).into();
        assert_eq!(err.kind(), ErrorKind::CurveConstruction);

        let err: TenorError = CurveError::NonPositiveLogArgument {
            maturity: 2.0,
            numerator: -1.0,
            denominator: 105.0,
        }
        .into();
        assert!(matches!(
            err,
            TenorError::CurveConstruction {
                maturity: Some(m),
                ..
            } if m == 2.0
        ));
    }

    #[test]
    fn test_validation_round_trip() {
        let err: CurveError = TenorError::validation("lengths differ").into();
        assert_eq!(err, CurveError::invalid_input("lengths differ"));
    }
}
