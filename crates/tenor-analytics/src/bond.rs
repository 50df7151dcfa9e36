//! Textbook bond pricing at a flat rate.
//!
//! These price a bond off a single rate rather than a curve. Curve-based
//! zero rates come from [`tenor_curves::bootstrap`].

use tenor_core::validate;
use tenor_curves::instrument::MAX_COUPON_PERIODS;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Price of a bond with annual coupons discounted at one annually
/// compounded market rate.
///
/// Coupons of `face_value · coupon_rate` fall at `t = 1..=⌊maturity⌋`; the
/// principal is discounted at `(1 + market_rate)^maturity`. Rates are
/// decimals.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::bond::flat_rate_price;
///
/// // Par bond
/// let price = flat_rate_price(1000.0, 0.05, 10.0, 0.05).unwrap();
/// assert!((price - 1000.0).abs() < 1e-9);
/// ```
pub fn flat_rate_price(
    face_value: f64,
    coupon_rate: f64,
    maturity: f64,
    market_rate: f64,
) -> AnalyticsResult<f64> {
    validate::positive("face_value", face_value)?;
    validate::non_negative("coupon_rate", coupon_rate)?;
    validate::positive("maturity", maturity)?;
    if maturity > MAX_COUPON_PERIODS {
        return Err(AnalyticsError::invalid_input(format!(
            "maturity must be at most {MAX_COUPON_PERIODS} years, got {maturity}"
        )));
    }
    validate::finite("market_rate", market_rate)?;
    if market_rate <= -1.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "market_rate must be greater than -1, got {market_rate}"
        )));
    }

    let coupon = face_value * coupon_rate;
    let growth = 1.0 + market_rate;
    let coupons: f64 = (1..=maturity.floor() as u32)
        .map(|t| coupon / growth.powi(t as i32))
        .sum();
    Ok(coupons + face_value / growth.powf(maturity))
}

/// Price of a bond paying `coupon` at `t = 1..=periods`, discounted at a
/// continuously compounded rate.
pub fn price_continuous(coupon: f64, rate: f64, periods: u32, face_value: f64) -> AnalyticsResult<f64> {
    check_cash_flows(coupon, rate, periods, face_value)?;
    let coupons: f64 = (1..=periods)
        .map(|t| coupon * (-rate * f64::from(t)).exp())
        .sum();
    Ok(coupons + face_value * (-rate * f64::from(periods)).exp())
}

/// Price of a bond paying `coupon` at `t = 1..=periods`, discounted at a
/// nominal rate compounded `m` times per year.
pub fn price_discrete(
    coupon: f64,
    rate: f64,
    m: u32,
    periods: u32,
    face_value: f64,
) -> AnalyticsResult<f64> {
    check_cash_flows(coupon, rate, periods, face_value)?;
    let base = 1.0 + rate / f64::from(positive_frequency(m)?);
    let discount = |t: u32| base.powf(f64::from(m) * f64::from(t));
    let coupons: f64 = (1..=periods).map(|t| coupon / discount(t)).sum();
    Ok(coupons + face_value / discount(periods))
}

/// Price per 100 face of a zero-coupon bond at a continuously compounded
/// rate: `100 · e^(−R·t)`.
pub fn zero_coupon_price_continuous(rate: f64, t: f64) -> AnalyticsResult<f64> {
    validate::finite("rate", rate)?;
    validate::non_negative("t", t)?;
    Ok(100.0 * (-rate * t).exp())
}

/// Price of a zero-coupon bond at a nominal rate compounded `m` times per
/// year: `F / (1 + r/m)^(m·n)`.
pub fn zero_coupon_price_discrete(face_value: f64, rate: f64, m: u32, years: u32) -> AnalyticsResult<f64> {
    validate::positive("face_value", face_value)?;
    validate::non_negative("rate", rate)?;
    let m = positive_frequency(m)?;
    if years == 0 {
        return Err(AnalyticsError::invalid_input("years must be a positive integer"));
    }
    Ok(face_value / (1.0 + rate / f64::from(m)).powf(f64::from(m) * f64::from(years)))
}

/// Continuously compounded zero rate implied by a price per 100 face:
/// `−ln(P/100) / t`.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::bond::{zero_coupon_price_continuous, zero_coupon_rate};
///
/// let price = zero_coupon_price_continuous(0.05, 2.0).unwrap();
/// assert!((zero_coupon_rate(price, 2.0).unwrap() - 0.05).abs() < 1e-12);
/// ```
pub fn zero_coupon_rate(price: f64, t: f64) -> AnalyticsResult<f64> {
    validate::positive("price", price)?;
    validate::positive("t", t)?;
    Ok(-(price / 100.0).ln() / t)
}

fn check_cash_flows(coupon: f64, rate: f64, periods: u32, face_value: f64) -> AnalyticsResult<()> {
    validate::non_negative("coupon", coupon)?;
    validate::non_negative("rate", rate)?;
    validate::non_negative("face_value", face_value)?;
    if periods == 0 {
        return Err(AnalyticsError::invalid_input("periods must be a positive integer"));
    }
    if f64::from(periods) > MAX_COUPON_PERIODS {
        return Err(AnalyticsError::invalid_input(format!(
            "periods must be at most {MAX_COUPON_PERIODS}, got {periods}"
        )));
    }
    Ok(())
}

fn positive_frequency(m: u32) -> AnalyticsResult<u32> {
    if m == 0 {
        return Err(AnalyticsError::invalid_input(
            "compounding frequency must be a positive integer",
        ));
    }
    Ok(m)
}
