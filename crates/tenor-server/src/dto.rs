//! Request and response bodies that are specific to the HTTP layer.
//!
//! Calculation requests reuse the tool request types from
//! [`tenor_analytics::tools`].

use axum::extract::FromRequest;
use serde::{Deserialize, Serialize};
use tenor_analytics::tools::ToolKey;
use tenor_core::LabeledResult;
use tenor_export::ExportedFiles;

use crate::error::ApiError;

/// JSON extractor whose rejections render as [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Curve request with an optional export flag.
#[derive(Debug, Clone, Deserialize)]
pub struct CurveRequest<T> {
    /// Calculation inputs.
    #[serde(flatten)]
    pub request: T,

    /// Write the curve to CSV and XLSX.
    #[serde(default)]
    pub export: bool,
}

/// Response of every calculation endpoint.
#[derive(Debug, Serialize)]
pub struct ToolResponse {
    /// Tool key.
    pub tool: &'static str,
    /// Tool title.
    pub title: &'static str,
    /// Labeled results.
    pub result: LabeledResult,
    /// Exported files, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<ExportedFiles>,
}

/// Direction of a rate conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTarget {
    /// m-compounded to continuous.
    #[default]
    Continuous,
    /// Continuous to m-compounded.
    Nominal,
}

/// Rate conversion request.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    /// Rate to convert.
    pub rate: f64,
    /// Compounding frequency per year.
    pub frequency: u32,
    /// Target convention.
    #[serde(default)]
    pub to: RateTarget,
}

/// Catalog entry.
#[derive(Debug, Serialize)]
pub struct ToolInfo {
    /// Tool key.
    pub key: &'static str,
    /// Tool title.
    pub title: &'static str,
    /// Whether the tool accepts `"export": true`.
    pub produces_curve: bool,
}

impl From<ToolKey> for ToolInfo {
    fn from(key: ToolKey) -> Self {
        Self {
            key: key.as_str(),
            title: key.title(),
            produces_curve: key.produces_curve(),
        }
    }
}
