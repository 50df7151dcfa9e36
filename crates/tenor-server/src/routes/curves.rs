//! Curve construction endpoints.

use axum::{extract::State, Json};
use tenor_analytics::tools::{
    self, CurveExtensionRequest, ForwardCurveRequest, ToolKey, ZeroRatesRequest,
};

use crate::dto::{ApiJson, CurveRequest, ToolResponse};
use crate::error::ApiResult;
use crate::routes::respond;
use crate::state::AppState;

/// Bootstrap zero rates from bond prices.
pub async fn bootstrap(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CurveRequest<ZeroRatesRequest>>,
) -> ApiResult<Json<ToolResponse>> {
    let output = tools::determining_zero_rates(&body.request)?;
    tracing::debug!(rows = output.curve.as_ref().map_or(0, |c| c.len()), "bootstrapped zero curve");
    respond(&state, ToolKey::DeterminingZeroRates, output, body.export).await
}

/// Extend a base curve with swap rates.
pub async fn splice_swap(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CurveRequest<CurveExtensionRequest>>,
) -> ApiResult<Json<ToolResponse>> {
    let request = with_sample_points(&state, body.request);
    let output = tools::extend_with_swap_rates(&request)?;
    respond(&state, ToolKey::ExtendWithSwapRates, output, body.export).await
}

/// Extend a base curve with FRA rates.
pub async fn splice_fra(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CurveRequest<CurveExtensionRequest>>,
) -> ApiResult<Json<ToolResponse>> {
    let request = with_sample_points(&state, body.request);
    let output = tools::extend_with_fra_rates(&request)?;
    respond(&state, ToolKey::ExtendWithFraRates, output, body.export).await
}

/// Forward rates between consecutive spot maturities.
pub async fn forward(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CurveRequest<ForwardCurveRequest>>,
) -> ApiResult<Json<ToolResponse>> {
    let output = tools::forward_rate_curve(&body.request)?;
    respond(&state, ToolKey::ForwardRateCalculation, output, body.export).await
}

fn with_sample_points(state: &AppState, mut request: CurveExtensionRequest) -> CurveExtensionRequest {
    request
        .sample_points
        .get_or_insert(state.config.sample_points);
    request
}
