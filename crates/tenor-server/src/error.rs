//! API error types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tenor_analytics::AnalyticsError;
use tenor_core::{ErrorKind, TenorError};
use tenor_export::ExportError;
use thiserror::Error;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request body could not be read as JSON.
    #[error("{message}")]
    Rejected {
        /// Status chosen by the extractor.
        status: StatusCode,
        /// Extractor message.
        message: String,
    },

    /// A calculation rejected its input or failed.
    #[error("{}", .0.message())]
    Calculation(#[from] TenorError),

    /// Curve files could not be written.
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorBody,
}

/// Error body details.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    /// HTTP status and error code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Rejected { status, .. } => {
                let code = match *status {
                    StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
                    StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
                    StatusCode::UNPROCESSABLE_ENTITY => ErrorKind::Validation.code(),
                    _ => "BAD_REQUEST",
                };
                (*status, code)
            }
            ApiError::Calculation(err) => {
                let status = match err.kind() {
                    ErrorKind::Validation | ErrorKind::CurveConstruction => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    ErrorKind::Computation => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.kind().code())
            }
            ApiError::Export(_) => (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(code, "{self}");
        }

        let body = Json(ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
        });

        (status, body).into_response()
    }
}

// Conversions from domain errors
impl From<AnalyticsError> for ApiError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::UnknownTool(key) => ApiError::NotFound(format!("tool '{key}'")),
            other => ApiError::Calculation(other.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_statuses() {
        let cases = [
            (TenorError::validation("x"), StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            (
                TenorError::curve_construction("x"),
                StatusCode::UNPROCESSABLE_ENTITY,
                "CURVE_CONSTRUCTION_ERROR",
            ),
            (
                TenorError::computation("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
                "COMPUTATION_ERROR",
            ),
        ];
        for (err, status, code) in cases {
            assert_eq!(ApiError::from(err).status_and_code(), (status, code));
        }
    }

    #[test]
    fn test_unknown_tool_is_not_found() {
        let err = ApiError::from(AnalyticsError::UnknownTool("nope".to_string()));
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_calculation_message_is_bare() {
        let err = ApiError::from(TenorError::validation("rates must not be empty"));
        assert_eq!(err.to_string(), "rates must not be empty");
    }
}
