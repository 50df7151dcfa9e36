//! FRA endpoints.

use axum::Json;
use tenor_analytics::tools::{self, BreakEvenRequest, FraPayoffRequest, FraValuationRequest, ToolKey};

use crate::dto::{ApiJson, ToolResponse};
use crate::error::ApiResult;
use crate::routes::scalar;

/// Total settlement payoff of an FRA strip.
pub async fn payoff(ApiJson(req): ApiJson<FraPayoffRequest>) -> ApiResult<Json<ToolResponse>> {
    let result = tools::fra_payoff(&req)?;
    Ok(scalar(ToolKey::PayoffOfFra, result))
}

/// Value of an FRA strip against forward rates.
pub async fn valuation(ApiJson(req): ApiJson<FraValuationRequest>) -> ApiResult<Json<ToolResponse>> {
    let result = tools::fra_valuation(&req)?;
    Ok(scalar(ToolKey::ValuationOfFra, result))
}

/// Contract rate at which the strip is worth zero.
pub async fn break_even(ApiJson(req): ApiJson<BreakEvenRequest>) -> ApiResult<Json<ToolResponse>> {
    let result = tools::fra_break_even_rate(&req)?;
    Ok(scalar(ToolKey::FraBreakEvenRate, result))
}
