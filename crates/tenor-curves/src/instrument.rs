//! Bond instruments used as bootstrapping inputs.

use serde::{Deserialize, Serialize};
use tenor_core::validate;

use crate::error::{CurveError, CurveResult};

/// Largest accepted number of coupon periods (`maturity · frequency`) per bond.
pub const MAX_COUPON_PERIODS: f64 = 100_000.0;

/// A coupon-bearing (or zero-coupon) bond quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondInstrument {
    /// Dirty price, in the same units as `face_value`.
    pub price: f64,
    /// Principal repaid at maturity.
    pub face_value: f64,
    /// Annual coupon rate as a decimal.
    pub coupon_rate: f64,
    /// Coupon payments per year.
    pub compounding_frequency: u32,
    /// Maturity in years.
    pub maturity: f64,
}

impl BondInstrument {
    /// Creates a bond.
    #[must_use]
    pub fn new(
        price: f64,
        face_value: f64,
        coupon_rate: f64,
        compounding_frequency: u32,
        maturity: f64,
    ) -> Self {
        Self {
            price,
            face_value,
            coupon_rate,
            compounding_frequency,
            maturity,
        }
    }

    /// Creates a zero-coupon bond.
    #[must_use]
    pub fn zero_coupon(price: f64, face_value: f64, maturity: f64) -> Self {
        Self::new(price, face_value, 0.0, 1, maturity)
    }

    /// Builds bonds from the five parallel input columns.
    pub fn from_columns(
        prices: &[f64],
        maturities: &[f64],
        face_values: &[f64],
        coupon_rates: &[f64],
        frequencies: &[u32],
    ) -> CurveResult<Vec<Self>> {
        validate::same_len("prices", prices, "maturities", maturities)?;
        validate::same_len("prices", prices, "face_values", face_values)?;
        validate::same_len("prices", prices, "coupon_rates", coupon_rates)?;
        validate::same_len("prices", prices, "frequencies", frequencies)?;

        Ok((0..prices.len())
            .map(|i| {
                Self::new(
                    prices[i],
                    face_values[i],
                    coupon_rates[i],
                    frequencies[i],
                    maturities[i],
                )
            })
            .collect())
    }

    /// Checks the per-bond preconditions; `index` locates the bond in error messages.
    pub fn validate(&self, index: usize) -> CurveResult<()> {
        validate::positive(&format!("bond[{index}].price"), self.price)?;
        validate::positive(&format!("bond[{index}].face_value"), self.face_value)?;
        validate::non_negative(&format!("bond[{index}].coupon_rate"), self.coupon_rate)?;
        validate::positive(&format!("bond[{index}].maturity"), self.maturity)?;
        if self.compounding_frequency == 0 {
            return Err(CurveError::invalid_input(format!(
                "bond[{index}].compounding_frequency must be at least 1"
            )));
        }
        let periods = self.maturity * f64::from(self.compounding_frequency);
        if periods > MAX_COUPON_PERIODS {
            return Err(CurveError::invalid_input(format!(
                "bond[{index}] has {periods} coupon periods, more than {MAX_COUPON_PERIODS}"
            )));
        }
        Ok(())
    }

    /// Returns true if the bond pays no coupons.
    pub fn is_zero_coupon(&self) -> bool {
        self.coupon_rate == 0.0
    }

    /// Coupon paid on each payment date.
    pub fn coupon_per_payment(&self) -> f64 {
        self.face_value * self.coupon_rate / f64::from(self.compounding_frequency)
    }

    /// Intermediate coupon times `k / m` strictly before maturity.
    ///
    /// `tolerance` keeps a payment that lands on maturity (up to rounding)
    /// out of the list; that payment is the final cash flow.
    pub fn intermediate_payment_times(&self, tolerance: f64) -> Vec<f64> {
        let m = f64::from(self.compounding_frequency);
        let last = (self.maturity * m).ceil() as u32;
        (1..=last)
            .map(|k| f64::from(k) / m)
            .take_while(|t| *t < self.maturity - tolerance)
            .collect()
    }

    /// Sort key giving a total order, so shuffled inputs bootstrap identically.
    pub(crate) fn ordering(&self, other: &Self) -> std::cmp::Ordering {
        self.maturity
            .total_cmp(&other.maturity)
            .then(self.coupon_rate.total_cmp(&other.coupon_rate))
            .then(self.compounding_frequency.cmp(&other.compounding_frequency))
            .then(self.price.total_cmp(&other.price))
            .then(self.face_value.total_cmp(&other.face_value))
    }
}
