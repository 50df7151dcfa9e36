//! Tool catalog endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tenor_analytics::tools::{self, ToolKey};

use crate::dto::{ApiJson, ToolInfo, ToolResponse};
use crate::error::{ApiError, ApiResult};
use crate::routes::respond;
use crate::state::AppState;

/// List the tool catalog.
pub async fn list() -> Json<Vec<ToolInfo>> {
    Json(ToolKey::ALL.into_iter().map(ToolInfo::from).collect())
}

/// Run a tool by key.
///
/// A top-level `"export": true` is stripped from the body and exports the
/// curve of curve tools.
pub async fn run(
    State(state): State<AppState>,
    Path(tool_key): Path<String>,
    ApiJson(mut body): ApiJson<Value>,
) -> ApiResult<Json<ToolResponse>> {
    let key: ToolKey = tool_key.parse()?;
    let export = match body.as_object_mut().and_then(|fields| fields.remove("export")) {
        None => false,
        Some(Value::Bool(flag)) => flag,
        Some(other) => {
            return Err(ApiError::Rejected {
                status: axum::http::StatusCode::UNPROCESSABLE_ENTITY,
                message: format!("export must be a boolean, got {other}"),
            })
        }
    };

    let output = tools::dispatch(key, body, &state.tool_settings())?;
    respond(&state, key, output, export).await
}
