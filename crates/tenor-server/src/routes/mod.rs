//! API route handlers.

pub mod curves;
pub mod fra;
pub mod health;
pub mod rates;
pub mod tools;

use axum::Json;
use tenor_analytics::tools::{ToolKey, ToolOutput};
use tenor_core::LabeledResult;

use crate::dto::ToolResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// Builds the response for a finished tool run, exporting its curve when asked.
pub(crate) async fn respond(
    state: &AppState,
    key: ToolKey,
    output: ToolOutput,
    export: bool,
) -> ApiResult<Json<ToolResponse>> {
    let files = match output.curve {
        Some(rows) if export => Some(state.export(rows).await?),
        _ => None,
    };

    Ok(Json(ToolResponse {
        tool: key.as_str(),
        title: key.title(),
        result: output.result,
        files,
    }))
}

/// Wraps the result of a scalar tool.
pub(crate) fn scalar(key: ToolKey, result: LabeledResult) -> Json<ToolResponse> {
    Json(ToolResponse {
        tool: key.as_str(),
        title: key.title(),
        result,
        files: None,
    })
}
