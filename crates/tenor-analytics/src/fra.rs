//! Forward rate agreement analytics.
//!
//! Settlement payoffs, forward-implied valuations and break-even fixed
//! rates for a strip of FRAs sharing one notional and accrual interval,
//! plus the textbook single-FRA lender/borrower cash flows and valuations.
//!
//! Every strip function present-values each period at its own floating
//! rate: `L · (R_s − R_K) · τ / (1 + R_s · τ)`. That is the buyer's view
//! (pays fixed, receives floating); [`FraPosition::Seller`] flips the sign.

use serde::{Deserialize, Serialize};
use tenor_core::validate;
use tenor_math::solvers::{hybrid, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Side of an FRA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraPosition {
    /// Pays the fixed contract rate, receives floating.
    #[default]
    Buyer,
    /// Receives the fixed contract rate, pays floating.
    Seller,
}

impl FraPosition {
    /// Sign applied to a buyer-view amount.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Buyer => 1.0,
            Self::Seller => -1.0,
        }
    }
}

// ============================================================================
// STRIP PAYOFF AND VALUATION
// ============================================================================

/// Payoff of a single FRA period, settled at the start of the period.
///
/// `notional · (settlement_rate − contract_rate) · interval / (1 + settlement_rate · interval)`
#[must_use]
pub fn settlement_payoff(
    contract_rate: f64,
    settlement_rate: f64,
    notional: f64,
    interval: f64,
) -> f64 {
    notional * (settlement_rate - contract_rate) * interval / (1.0 + settlement_rate * interval)
}

/// Total payoff of a strip of FRAs against realized settlement rates.
///
/// # Arguments
///
/// * `contract_rate` - Fixed rate agreed in the contract
/// * `settlement_rates` - Observed floating rate for each period
/// * `notional` - Notional principal
/// * `interval` - Accrual period in years
///
/// # Example
///
/// ```rust
/// use tenor_analytics::fra::total_payoff;
///
/// let payoff = total_payoff(0.03, &[0.032], 1_000_000.0, 0.5).unwrap();
/// assert!((payoff - 984.25).abs() < 0.01);
/// ```
pub fn total_payoff(
    contract_rate: f64,
    settlement_rates: &[f64],
    notional: f64,
    interval: f64,
) -> AnalyticsResult<f64> {
    check_strip("settlement rates", contract_rate, settlement_rates, notional, interval)?;
    Ok(strip_sum(contract_rate, settlement_rates, notional, interval))
}

/// Forward-implied value of a strip of FRAs, from the buyer's side.
///
/// Same formula as [`total_payoff`] with forward rates in place of
/// observed settlement rates.
pub fn total_valuation(
    contract_rate: f64,
    forward_rates: &[f64],
    notional: f64,
    interval: f64,
) -> AnalyticsResult<f64> {
    position_valuation(FraPosition::Buyer, contract_rate, forward_rates, notional, interval)
}

/// Forward-implied value of a strip of FRAs for either side.
pub fn position_valuation(
    position: FraPosition,
    contract_rate: f64,
    forward_rates: &[f64],
    notional: f64,
    interval: f64,
) -> AnalyticsResult<f64> {
    check_strip("forward rates", contract_rate, forward_rates, notional, interval)?;
    Ok(position.sign() * strip_sum(contract_rate, forward_rates, notional, interval))
}

// ============================================================================
// BREAK-EVEN RATE
// ============================================================================

/// Fixed rate at which a strip of FRAs has zero forward-implied value.
///
/// Solves `Σ (R_s − R_f) · τ / (1 + R_s · τ) = 0` with Newton-Raphson seeded
/// at the mean forward rate, falling back to Brent when Newton fails. The
/// root does not depend on notional or position.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::fra::{break_even_rate, total_valuation};
///
/// let forwards = [0.02, 0.025, 0.03];
/// let rate = break_even_rate(&forwards, 0.5).unwrap();
/// assert!(total_valuation(rate, &forwards, 1.0, 0.5).unwrap().abs() < 1e-9);
/// ```
pub fn break_even_rate(forward_rates: &[f64], interval: f64) -> AnalyticsResult<f64> {
    break_even_rate_with(forward_rates, interval, &SolverConfig::default())
}

/// [`break_even_rate`] with an explicit solver configuration.
pub fn break_even_rate_with(
    forward_rates: &[f64],
    interval: f64,
    config: &SolverConfig,
) -> AnalyticsResult<f64> {
    check_strip("forward rates", 0.0, forward_rates, 1.0, interval)?;

    let seed = forward_rates.iter().sum::<f64>() / forward_rates.len() as f64;
    let weights: Vec<f64> = forward_rates
        .iter()
        .map(|r| interval / (1.0 + r * interval))
        .collect();

    let f = |fixed: f64| {
        forward_rates
            .iter()
            .zip(&weights)
            .map(|(r, w)| (r - fixed) * w)
            .sum::<f64>()
    };
    let df = |_: f64| -weights.iter().sum::<f64>();

    let result = hybrid(f, df, seed, None, config).map_err(AnalyticsError::BreakEvenFailed)?;
    log::debug!(
        "break-even rate {:.8} after {} iterations (seed {seed:.8})",
        result.root,
        result.iterations
    );
    Ok(result.root)
}

// ============================================================================
// SINGLE FRA CASH FLOWS
// ============================================================================

/// Cash flow at `T1` to the lender receiving `RK` on notional `L` for
/// `[T1, T2]` when the realized rate is `RM`.
///
/// `L · (RK − RM) · (T2 − T1) / (1 + RM · (T2 − T1))`
pub fn lender_cash_flow(
    notional: f64,
    contract_rate: f64,
    realized_rate: f64,
    t1: f64,
    t2: f64,
) -> AnalyticsResult<f64> {
    let tau = check_period(notional, t1, t2)?;
    Ok(notional * (contract_rate - realized_rate) * tau / (1.0 + realized_rate * tau))
}

/// Cash flow to the borrower: the negative of [`lender_cash_flow`].
pub fn borrower_cash_flow(
    notional: f64,
    contract_rate: f64,
    realized_rate: f64,
    t1: f64,
    t2: f64,
) -> AnalyticsResult<f64> {
    lender_cash_flow(notional, contract_rate, realized_rate, t1, t2).map(|v| -v)
}

/// Value of an FRA receiving the fixed rate `RK`, given forward rate `RF`
/// for `[T1, T2]` and the continuously compounded zero rate `R2` for `T2`.
///
/// `L · (RK − RF) · (T2 − T1) · e^(−R2 · T2)`
pub fn value_receive_fixed(
    notional: f64,
    contract_rate: f64,
    forward_rate: f64,
    t1: f64,
    t2: f64,
    zero_rate: f64,
) -> AnalyticsResult<f64> {
    let tau = check_period(notional, t1, t2)?;
    validate::finite("zero_rate", zero_rate)?;
    Ok(notional * (contract_rate - forward_rate) * tau * (-zero_rate * t2).exp())
}

/// Value of an FRA paying the fixed rate: the negative of
/// [`value_receive_fixed`].
pub fn value_pay_fixed(
    notional: f64,
    contract_rate: f64,
    forward_rate: f64,
    t1: f64,
    t2: f64,
    zero_rate: f64,
) -> AnalyticsResult<f64> {
    value_receive_fixed(notional, contract_rate, forward_rate, t1, t2, zero_rate).map(|v| -v)
}

// ============================================================================
// HELPERS
// ============================================================================

fn strip_sum(contract_rate: f64, rates: &[f64], notional: f64, interval: f64) -> f64 {
    rates
        .iter()
        .map(|&r| settlement_payoff(contract_rate, r, notional, interval))
        .sum()
}

fn check_strip(
    what: &'static str,
    contract_rate: f64,
    rates: &[f64],
    notional: f64,
    interval: f64,
) -> AnalyticsResult<()> {
    if rates.is_empty() {
        return Err(AnalyticsError::EmptyRates { what });
    }
    validate::finite("contract_rate", contract_rate)?;
    validate::finite("notional", notional)?;
    validate::positive("interval", interval)?;
    validate::all_finite(what, rates)?;
    if let Some((i, r)) = rates
        .iter()
        .enumerate()
        .find(|(_, r)| 1.0 + *r * interval <= 0.0)
    {
        return Err(AnalyticsError::invalid_input(format!(
            "{what}[{i}] = {r} gives a non-positive discount denominator for interval {interval}"
        )));
    }
    Ok(())
}

fn check_period(notional: f64, t1: f64, t2: f64) -> AnalyticsResult<f64> {
    validate::positive("notional", notional)?;
    validate::non_negative("t1", t1)?;
    if !(t2 > t1) {
        return Err(AnalyticsError::invalid_input(format!(
            "period end {t2} must be after period start {t1}"
        )));
    }
    Ok(t2 - t1)
}
