//! Labeled calculation tools.
//!
//! Each tool takes a strongly typed request, runs one calculation and
//! returns a [`LabeledResult`] whose labels a presentation layer can render
//! as-is. Curve tools also hand back the computed rows so callers can
//! export them.
//!
//! Tools are addressed by a stable key (see [`ToolKey`]); [`dispatch`] runs
//! a tool from its key and a JSON body.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tenor_core::{validate, LabeledResult};
use tenor_curves::prelude::*;

use crate::bond::flat_rate_price;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::fra::{self, FraPosition};

// ============================================================================
// CATALOG
// ============================================================================

/// Key of a catalog tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKey {
    /// m-compounded rate to continuous rate.
    ContinuousCompoundingRate,
    /// Continuous rate to m-compounded rate.
    MCompoundingRate,
    /// Flat-rate bond price.
    BondPricing,
    /// Zero rates bootstrapped from bond prices.
    DeterminingZeroRates,
    /// Base curve extended with swap rates.
    ExtendWithSwapRates,
    /// Base curve extended with FRA rates.
    ExtendWithFraRates,
    /// Forward curve from spot rates.
    ForwardRateCalculation,
    /// Payoff of an FRA strip.
    PayoffOfFra,
    /// Forward-implied FRA valuation.
    ValuationOfFra,
    /// FRA break-even rate.
    FraBreakEvenRate,
}

impl ToolKey {
    /// Every tool in catalog order.
    pub const ALL: [ToolKey; 10] = [
        ToolKey::ContinuousCompoundingRate,
        ToolKey::MCompoundingRate,
        ToolKey::BondPricing,
        ToolKey::DeterminingZeroRates,
        ToolKey::ExtendWithSwapRates,
        ToolKey::ExtendWithFraRates,
        ToolKey::ForwardRateCalculation,
        ToolKey::PayoffOfFra,
        ToolKey::ValuationOfFra,
        ToolKey::FraBreakEvenRate,
    ];

    /// Stable URL-safe key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContinuousCompoundingRate => "continuous-compounding-rate",
            Self::MCompoundingRate => "m-to-continuous-compounding-rate",
            Self::BondPricing => "bond-pricing",
            Self::DeterminingZeroRates => "determining-zero-rates",
            Self::ExtendWithSwapRates => "extending-libor-curve-with-swap-rates",
            Self::ExtendWithFraRates => "extending-zero-curve-with-fra",
            Self::ForwardRateCalculation => "forward-rate-calculation",
            Self::PayoffOfFra => "payoff-of-fra",
            Self::ValuationOfFra => "valuation-of-fra",
            Self::FraBreakEvenRate => "fra-break-even-rate",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::ContinuousCompoundingRate => "Continuous Compounding Rate",
            Self::MCompoundingRate => "Continuous to m-Compounding Rate",
            Self::BondPricing => "Bond Pricing",
            Self::DeterminingZeroRates => "Determining Zero Rates",
            Self::ExtendWithSwapRates => "Extending the Zero Curve with Swap Rates",
            Self::ExtendWithFraRates => "Extending the Zero Curve with FRA Rates",
            Self::ForwardRateCalculation => "Forward Rate Calculation",
            Self::PayoffOfFra => "Payoff of FRA",
            Self::ValuationOfFra => "Valuation of FRA",
            Self::FraBreakEvenRate => "FRA Break-Even Rate",
        }
    }

    /// Whether the tool produces curve rows.
    #[must_use]
    pub fn produces_curve(self) -> bool {
        matches!(
            self,
            Self::DeterminingZeroRates
                | Self::ExtendWithSwapRates
                | Self::ExtendWithFraRates
                | Self::ForwardRateCalculation
        )
    }
}

impl fmt::Display for ToolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolKey {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AnalyticsError::UnknownTool(s.to_string()))
    }
}

// ============================================================================
// CURVE ROWS
// ============================================================================

/// Which curve a set of rows describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Bootstrapped zero rates.
    ZeroRates,
    /// Base curve extended with swap rates.
    SwapCurve,
    /// Base curve extended with FRA rates.
    FraCurve,
    /// Forward periods.
    ForwardRates,
}

impl CurveKind {
    /// Tag used in file names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZeroRates => "zero_rates",
            Self::SwapCurve => "swap_curve",
            Self::FraCurve => "fra_curve",
            Self::ForwardRates => "forward_rates",
        }
    }
}

/// Rows of a computed curve, ready for tabular export.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveRows {
    /// `(maturity, rate)` rows.
    Points {
        /// Curve the points belong to.
        kind: CurveKind,
        /// Rows in ascending maturity order.
        points: Vec<RateCurvePoint>,
    },
    /// `(start, end, forward)` rows.
    Periods(Vec<ForwardPeriod>),
}

impl CurveRows {
    /// Curve kind.
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        match self {
            Self::Points { kind, .. } => *kind,
            Self::Periods(_) => CurveKind::ForwardRates,
        }
    }

    /// Column names.
    #[must_use]
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Self::Points { .. } => &["maturity", "rate"],
            Self::Periods(_) => &["start_maturity", "end_maturity", "forward_rate"],
        }
    }

    /// Numeric rows in header order.
    #[must_use]
    pub fn records(&self) -> Vec<Vec<f64>> {
        match self {
            Self::Points { points, .. } => points.iter().map(|p| vec![p.maturity, p.rate]).collect(),
            Self::Periods(periods) => periods
                .iter()
                .map(|p| vec![p.start_maturity, p.end_maturity, p.forward_rate])
                .collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Points { points, .. } => points.len(),
            Self::Periods(periods) => periods.len(),
        }
    }

    /// Whether there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of a tool run.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Labeled values for presentation.
    pub result: LabeledResult,
    /// Curve rows, for curve tools.
    pub curve: Option<CurveRows>,
}

impl ToolOutput {
    fn scalar(result: LabeledResult) -> Self {
        Self { result, curve: None }
    }
}

/// Defaults applied to requests that leave an option unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    /// Spline sample count for curve extension tools.
    pub sample_points: usize,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            sample_points: tenor_curves::splice::DEFAULT_SAMPLE_POINTS,
        }
    }
}

// ============================================================================
// REQUESTS
// ============================================================================

/// Nominal rate with compounding frequency `m`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContinuousRateRequest {
    /// Rate compounded `m` times per year.
    pub rate_m: f64,
    /// Compounding frequency per year.
    pub frequency_m: u32,
}

/// Continuously compounded rate and a target frequency `m`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominalRateRequest {
    /// Continuously compounded rate.
    pub rate_c: f64,
    /// Target compounding frequency per year.
    pub frequency_m: u32,
}

/// Flat-rate bond pricing inputs. Rates are percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BondPricingRequest {
    /// Face value.
    pub face_value: f64,
    /// Annual coupon rate in percent.
    pub coupon_rate: f64,
    /// Maturity in years.
    pub maturity: f64,
    /// Market rate in percent.
    pub market_rate: f64,
}

/// Bond columns for bootstrapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZeroRatesRequest {
    /// Dirty prices.
    pub bond_prices: Vec<f64>,
    /// Face values.
    pub face_values: Vec<f64>,
    /// Maturities in years.
    pub maturities: Vec<f64>,
    /// Annual coupon rates as decimals.
    pub coupon_rates: Vec<f64>,
    /// Coupon payments per year.
    pub compounding_frequencies: Vec<u32>,
    /// Treatment of coupons with no solved rate.
    #[serde(default)]
    pub coupon_discounting: CouponDiscounting,
}

/// Base curve plus instrument quotes to splice in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveExtensionRequest {
    /// Base curve tenors.
    pub base_tenors: Vec<f64>,
    /// Base curve rates.
    pub base_rates: Vec<f64>,
    /// Instrument tenors.
    #[serde(alias = "swap_tenors", alias = "fra_tenors")]
    pub instrument_tenors: Vec<f64>,
    /// Instrument rates.
    #[serde(alias = "swap_rates", alias = "fra_rates")]
    pub instrument_rates: Vec<f64>,
    /// Spline sample count; the tool default when absent.
    #[serde(default)]
    pub sample_points: Option<usize>,
    /// FRA anchoring policy.
    #[serde(default)]
    pub fra_anchor: FraAnchor,
}

/// Spot curve for forward rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardCurveRequest {
    /// Spot rates.
    pub spot_rates: Vec<f64>,
    /// Maturities in years, strictly increasing.
    pub maturities: Vec<f64>,
    /// Compounding identity.
    #[serde(default)]
    pub convention: ForwardConvention,
}

/// FRA strip payoff inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraPayoffRequest {
    /// Fixed contract rate.
    pub contract_rate: f64,
    /// Realized settlement rates.
    pub settlement_rates: Vec<f64>,
    /// Notional principal.
    #[serde(alias = "notional")]
    pub notional_value: f64,
    /// Accrual interval in years.
    #[serde(alias = "interval_between_payments")]
    pub interval: f64,
}

/// FRA strip valuation inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraValuationRequest {
    /// Fixed contract rate.
    pub contract_rate: f64,
    /// Forward rates.
    pub forward_rates: Vec<f64>,
    /// Notional principal.
    #[serde(alias = "notional")]
    pub notional_value: f64,
    /// Accrual interval in years.
    #[serde(alias = "interval_between_payments")]
    pub interval: f64,
    /// Side of the contract.
    #[serde(default)]
    pub position: FraPosition,
}

/// FRA break-even inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakEvenRequest {
    /// Forward rates.
    pub forward_rates: Vec<f64>,
    /// Accrual interval in years.
    #[serde(alias = "interval_between_payments")]
    pub interval: f64,
}

// ============================================================================
// TOOLS
// ============================================================================

/// Converts an m-compounded rate to its continuous equivalent.
pub fn continuous_compounding_rate(req: &ContinuousRateRequest) -> AnalyticsResult<LabeledResult> {
    validate::finite("rate_m", req.rate_m)?;
    let rate = tenor_core::compounding::nominal_to_continuous(req.rate_m, req.frequency_m)?;
    Ok(LabeledResult::new().with_scalar("rate_c", "Rate (Continuous Compounding)", rate))
}

/// Converts a continuous rate to its m-compounded equivalent.
pub fn m_compounding_rate(req: &NominalRateRequest) -> AnalyticsResult<LabeledResult> {
    validate::finite("rate_c", req.rate_c)?;
    let rate = tenor_core::compounding::continuous_to_nominal(req.rate_c, req.frequency_m)?;
    Ok(LabeledResult::new().with_scalar("rate_m", "Rate (m-Compounding)", rate))
}

/// Prices a bond at a flat market rate.
pub fn bond_pricing(req: &BondPricingRequest) -> AnalyticsResult<LabeledResult> {
    let price = flat_rate_price(
        req.face_value,
        req.coupon_rate / 100.0,
        req.maturity,
        req.market_rate / 100.0,
    )?;
    Ok(LabeledResult::new().with_scalar("bond_price", "Bond Price", price))
}

/// Bootstraps zero rates from bond prices.
pub fn determining_zero_rates(req: &ZeroRatesRequest) -> AnalyticsResult<ToolOutput> {
    let bonds = BondInstrument::from_columns(
        &req.bond_prices,
        &req.maturities,
        &req.face_values,
        &req.coupon_rates,
        &req.compounding_frequencies,
    )?;
    let curve = ZeroCurveBootstrapper::new()
        .with_coupon_discounting(req.coupon_discounting)
        .bootstrap_curve(&bonds)?;

    let result = LabeledResult::new()
        .with_series("maturities", "Maturities", curve.maturities())
        .with_series("zero_rates", "Zero Rates", curve.rates());
    Ok(ToolOutput {
        result,
        curve: Some(CurveRows::Points {
            kind: CurveKind::ZeroRates,
            points: curve.into_points(),
        }),
    })
}

/// Extends a base curve with swap rates.
pub fn extend_with_swap_rates(req: &CurveExtensionRequest) -> AnalyticsResult<ToolOutput> {
    extend(req, SpliceKind::Swap)
}

/// Extends a base curve with FRA rates.
pub fn extend_with_fra_rates(req: &CurveExtensionRequest) -> AnalyticsResult<ToolOutput> {
    extend(req, SpliceKind::Fra)
}

fn extend(req: &CurveExtensionRequest, kind: SpliceKind) -> AnalyticsResult<ToolOutput> {
    let config = SpliceConfig::default()
        .with_sample_points(
            req.sample_points
                .unwrap_or(tenor_curves::splice::DEFAULT_SAMPLE_POINTS),
        )
        .with_fra_anchor(req.fra_anchor);
    let input = SpliceInput::from_columns(
        &req.base_tenors,
        &req.base_rates,
        &req.instrument_tenors,
        &req.instrument_rates,
    )?;
    let curve = CurveSplicer::new().with_config(config).splice(&input, kind)?;

    let result = LabeledResult::new()
        .with_series("tenors", "Tenors", curve.tenors())
        .with_series("extended_zero_curve", "Extended Zero Curve", curve.rates());
    let kind = match kind {
        SpliceKind::Swap => CurveKind::SwapCurve,
        SpliceKind::Fra => CurveKind::FraCurve,
    };
    Ok(ToolOutput {
        result,
        curve: Some(CurveRows::Points {
            kind,
            points: curve.samples,
        }),
    })
}

/// Builds forward rates between consecutive spot maturities.
pub fn forward_rate_curve(req: &ForwardCurveRequest) -> AnalyticsResult<ToolOutput> {
    let periods = ForwardRateCurveBuilder::new()
        .with_convention(req.convention)
        .build(&req.spot_rates, &req.maturities)?;

    let result = LabeledResult::new()
        .with_series(
            "start_maturities",
            "Start Maturities",
            periods.iter().map(|p| p.start_maturity).collect(),
        )
        .with_series(
            "end_maturities",
            "End Maturities",
            periods.iter().map(|p| p.end_maturity).collect(),
        )
        .with_series(
            "forward_rates",
            "Forward Rates",
            periods.iter().map(|p| p.forward_rate).collect(),
        );
    Ok(ToolOutput {
        result,
        curve: Some(CurveRows::Periods(periods)),
    })
}

/// Total payoff of an FRA strip.
pub fn fra_payoff(req: &FraPayoffRequest) -> AnalyticsResult<LabeledResult> {
    let payoff = fra::total_payoff(
        req.contract_rate,
        &req.settlement_rates,
        req.notional_value,
        req.interval,
    )?;
    Ok(LabeledResult::new().with_scalar("total_fra_payoff", "Total FRA Payoff", payoff))
}

/// Forward-implied value of an FRA strip.
pub fn fra_valuation(req: &FraValuationRequest) -> AnalyticsResult<LabeledResult> {
    let value = fra::position_valuation(
        req.position,
        req.contract_rate,
        &req.forward_rates,
        req.notional_value,
        req.interval,
    )?;
    Ok(LabeledResult::new().with_scalar("fra_valuation", "FRA Valuation", value))
}

/// Break-even fixed rate of an FRA strip.
pub fn fra_break_even_rate(req: &BreakEvenRequest) -> AnalyticsResult<LabeledResult> {
    let rate = fra::break_even_rate(&req.forward_rates, req.interval)?;
    Ok(LabeledResult::new().with_scalar("break_even_rate", "Break-Even Rate", rate))
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Runs the tool named by `key` on a JSON request body.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::tools::{dispatch, ToolKey, ToolSettings};
///
/// let body = serde_json::json!({"forward_rates": [0.03], "interval": 0.5});
/// let output = dispatch(ToolKey::FraBreakEvenRate, body, &ToolSettings::default()).unwrap();
/// assert!((output.result.scalar("break_even_rate").unwrap() - 0.03).abs() < 1e-12);
/// ```
pub fn dispatch(
    key: ToolKey,
    body: serde_json::Value,
    settings: &ToolSettings,
) -> AnalyticsResult<ToolOutput> {
    log::debug!("running tool {key}");
    match key {
        ToolKey::ContinuousCompoundingRate => {
            continuous_compounding_rate(&parse(key, body)?).map(ToolOutput::scalar)
        }
        ToolKey::MCompoundingRate => m_compounding_rate(&parse(key, body)?).map(ToolOutput::scalar),
        ToolKey::BondPricing => bond_pricing(&parse(key, body)?).map(ToolOutput::scalar),
        ToolKey::DeterminingZeroRates => determining_zero_rates(&parse(key, body)?),
        ToolKey::ExtendWithSwapRates => {
            extend_with_swap_rates(&with_defaults(parse(key, body)?, settings))
        }
        ToolKey::ExtendWithFraRates => {
            extend_with_fra_rates(&with_defaults(parse(key, body)?, settings))
        }
        ToolKey::ForwardRateCalculation => forward_rate_curve(&parse(key, body)?),
        ToolKey::PayoffOfFra => fra_payoff(&parse(key, body)?).map(ToolOutput::scalar),
        ToolKey::ValuationOfFra => fra_valuation(&parse(key, body)?).map(ToolOutput::scalar),
        ToolKey::FraBreakEvenRate => fra_break_even_rate(&parse(key, body)?).map(ToolOutput::scalar),
    }
}

fn parse<T: serde::de::DeserializeOwned>(key: ToolKey, body: serde_json::Value) -> AnalyticsResult<T> {
    serde_json::from_value(body).map_err(|source| AnalyticsError::InvalidRequest {
        tool: key.as_str(),
        source,
    })
}

fn with_defaults(mut req: CurveExtensionRequest, settings: &ToolSettings) -> CurveExtensionRequest {
    req.sample_points.get_or_insert(settings.sample_points);
    req
}
