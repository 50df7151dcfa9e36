//! Error types for the analytics layer.

use tenor_core::TenorError;
use tenor_curves::CurveError;
use tenor_math::MathError;
use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for FRA, bond pricing and tool operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    // ========== Input Errors ==========
    /// Invalid input parameter.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// A rate list that must carry at least one rate was empty.
    #[error("no {what} supplied")]
    EmptyRates {
        /// Which list was empty.
        what: &'static str,
    },

    /// Tool key not present in the catalog.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Tool request body did not match the tool's request shape.
    #[error("invalid request for {tool}: {source}")]
    InvalidRequest {
        /// Tool key the body was sent to.
        tool: &'static str,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    // ========== Solver Errors ==========
    /// Break-even rate search did not converge.
    #[error("break-even rate did not converge: {0}")]
    BreakEvenFailed(#[source] MathError),

    // ========== Upstream Errors ==========
    /// Curve construction failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Core validation or conversion failed.
    #[error(transparent)]
    Core(#[from] TenorError),
}

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl From<AnalyticsError> for TenorError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::InvalidInput { .. }
            | AnalyticsError::UnknownTool(_)
            | AnalyticsError::InvalidRequest { .. } => TenorError::validation(err.to_string()),
            AnalyticsError::EmptyRates { .. } | AnalyticsError::BreakEvenFailed(_) => {
                TenorError::computation(err.to_string())
            }
            AnalyticsError::Curve(e) => e.into(),
            AnalyticsError::Core(e) => e,
        }
    }
}
