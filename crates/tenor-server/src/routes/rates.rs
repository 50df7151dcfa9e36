//! Rate conversion and flat-rate bond pricing endpoints.

use axum::Json;
use tenor_analytics::tools::{
    self, BondPricingRequest, ContinuousRateRequest, NominalRateRequest, ToolKey,
};

use crate::dto::{ApiJson, ConvertRequest, RateTarget, ToolResponse};
use crate::error::ApiResult;
use crate::routes::scalar;

/// Convert between m-compounded and continuous rates.
pub async fn convert(ApiJson(req): ApiJson<ConvertRequest>) -> ApiResult<Json<ToolResponse>> {
    let response = match req.to {
        RateTarget::Continuous => scalar(
            ToolKey::ContinuousCompoundingRate,
            tools::continuous_compounding_rate(&ContinuousRateRequest {
                rate_m: req.rate,
                frequency_m: req.frequency,
            })?,
        ),
        RateTarget::Nominal => scalar(
            ToolKey::MCompoundingRate,
            tools::m_compounding_rate(&NominalRateRequest {
                rate_c: req.rate,
                frequency_m: req.frequency,
            })?,
        ),
    };
    Ok(response)
}

/// Price a bond at a flat market rate.
pub async fn bond_price(ApiJson(req): ApiJson<BondPricingRequest>) -> ApiResult<Json<ToolResponse>> {
    let result = tools::bond_pricing(&req)?;
    Ok(scalar(ToolKey::BondPricing, result))
}
