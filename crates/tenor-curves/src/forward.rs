//! Forward-rate term structures from spot rates.
//!
//! For consecutive maturities `T1 < T2` with spot rates `r1`, `r2`:
//!
//! - Discrete (annual compounding): `f = ((1 + r2)^T2 / (1 + r1)^T1)^(1 / (T2 - T1)) - 1`
//! - Continuous: `f = (r2·T2 - r1·T1) / (T2 - T1)`

use serde::{Deserialize, Serialize};
use tenor_core::validate;

use crate::error::{CurveError, CurveResult};
use crate::point::ensure_increasing;

/// One forward period `[start_maturity, end_maturity]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardPeriod {
    /// Start of the period in years.
    pub start_maturity: f64,
    /// End of the period in years.
    pub end_maturity: f64,
    /// Forward rate over the period.
    pub forward_rate: f64,
}

/// Compounding identity used to derive forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForwardConvention {
    /// Annually compounded spot and forward rates.
    #[default]
    Discrete,
    /// Continuously compounded spot and forward rates.
    Continuous,
}

/// Builds a forward curve from spot rates at strictly increasing maturities.
///
/// # Example
///
/// ```rust
/// use tenor_curves::forward::ForwardRateCurveBuilder;
///
/// let periods = ForwardRateCurveBuilder::new()
///     .build(&[0.02, 0.025], &[1.0, 2.0])
///     .unwrap();
/// assert_eq!(periods.len(), 1);
/// assert!((periods[0].forward_rate - 0.030_02).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardRateCurveBuilder {
    convention: ForwardConvention,
}

impl ForwardRateCurveBuilder {
    /// Creates a builder using the discrete convention.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compounding convention.
    #[must_use]
    pub fn with_convention(mut self, convention: ForwardConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Emits one [`ForwardPeriod`] per consecutive pair of maturities.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidInput`] on mismatched lengths or
    /// non-finite values and [`CurveError::NonMonotonicTenors`] if maturities
    /// are not strictly increasing.
    pub fn build(&self, spot_rates: &[f64], maturities: &[f64]) -> CurveResult<Vec<ForwardPeriod>> {
        validate::same_len("spot_rates", spot_rates, "maturities", maturities)?;
        validate::all_finite("spot_rates", spot_rates)?;
        validate::all_finite("maturities", maturities)?;
        for (i, m) in maturities.iter().enumerate() {
            validate::non_negative(&format!("maturities[{i}]"), *m)?;
        }
        ensure_increasing(maturities.iter().copied())?;

        let mut periods = Vec::with_capacity(maturities.len().saturating_sub(1));
        for i in 1..maturities.len() {
            let (t1, t2) = (maturities[i - 1], maturities[i]);
            let (r1, r2) = (spot_rates[i - 1], spot_rates[i]);
            let forward_rate = match self.convention {
                ForwardConvention::Discrete => discrete_forward_rate(r1, t1, r2, t2)?,
                ForwardConvention::Continuous => continuous_forward_rate(r1, t1, r2, t2)?,
            };
            periods.push(ForwardPeriod {
                start_maturity: t1,
                end_maturity: t2,
                forward_rate,
            });
        }
        Ok(periods)
    }

    /// Recovers spot rates from a forward curve and the first spot rate.
    ///
    /// Inverse of [`build`](Self::build) under the same convention.
    pub fn spot_rates_from_forwards(
        &self,
        first_spot: f64,
        periods: &[ForwardPeriod],
    ) -> CurveResult<Vec<f64>> {
        let mut spots = Vec::with_capacity(periods.len() + 1);
        spots.push(first_spot);
        let mut previous = first_spot;
        for p in periods {
            let (t1, t2) = (p.start_maturity, p.end_maturity);
            if t2 <= 0.0 {
                return Err(CurveError::invalid_input(format!(
                    "forward period end {t2} must be positive"
                )));
            }
            let spot = match self.convention {
                ForwardConvention::Discrete => {
                    let growth =
                        (1.0 + previous).powf(t1) * (1.0 + p.forward_rate).powf(t2 - t1);
                    growth.powf(1.0 / t2) - 1.0
                }
                ForwardConvention::Continuous => (previous * t1 + p.forward_rate * (t2 - t1)) / t2,
            };
            spots.push(spot);
            previous = spot;
        }
        Ok(spots)
    }
}

/// Annually compounded forward rate over `[t1, t2]`.
pub fn discrete_forward_rate(r1: f64, t1: f64, r2: f64, t2: f64) -> CurveResult<f64> {
    check_period(t1, t2)?;
    if 1.0 + r1 <= 0.0 || 1.0 + r2 <= 0.0 {
        return Err(CurveError::invalid_input(format!(
            "spot rates must exceed -100%, got {r1} and {r2}"
        )));
    }
    let ratio = (1.0 + r2).powf(t2) / (1.0 + r1).powf(t1);
    Ok(ratio.powf(1.0 / (t2 - t1)) - 1.0)
}

/// Continuously compounded forward rate over `[t1, t2]`.
pub fn continuous_forward_rate(r1: f64, t1: f64, r2: f64, t2: f64) -> CurveResult<f64> {
    check_period(t1, t2)?;
    Ok((r2 * t2 - r1 * t1) / (t2 - t1))
}

/// Instantaneous forward rate `R + T·dR/dT` from a zero rate and its slope.
#[must_use]
pub fn instantaneous_forward_rate(rate: f64, t: f64, slope: f64) -> f64 {
    rate + t * slope
}

fn check_period(t1: f64, t2: f64) -> CurveResult<()> {
    if !(t1 >= 0.0 && t2 > t1) {
        return Err(CurveError::invalid_input(format!(
            "forward period needs 0 <= t1 < t2, got t1 = {t1}, t2 = {t2}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_two_point_forward() {
        let periods = ForwardRateCurveBuilder::new()
            .build(&[0.02, 0.025], &[1.0, 2.0])
            .unwrap();

        assert_eq!(periods.len(), 1);
        assert_relative_eq!(periods[0].start_maturity, 1.0);
        assert_relative_eq!(periods[0].end_maturity, 2.0);
        assert_relative_eq!(
            periods[0].forward_rate,
            1.025_f64.powi(2) / 1.02 - 1.0,
            epsilon = 1e-15
        );
        assert_relative_eq!(periods[0].forward_rate, 0.030_025, epsilon = 1e-6);
    }

    #[test]
    fn test_output_length() {
        let periods = ForwardRateCurveBuilder::new()
            .build(&[0.01, 0.015, 0.02, 0.022], &[0.5, 1.0, 2.0, 5.0])
            .unwrap();
        assert_eq!(periods.len(), 3);

        assert!(ForwardRateCurveBuilder::new().build(&[0.01], &[1.0]).unwrap().is_empty());
        assert!(ForwardRateCurveBuilder::new().build(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_non_increasing_maturities_rejected() {
        let err = ForwardRateCurveBuilder::new()
            .build(&[0.01, 0.02, 0.03], &[1.0, 3.0, 2.0])
            .unwrap_err();
        assert!(matches!(err, CurveError::NonMonotonicTenors { index: 2, .. }));

        let err = ForwardRateCurveBuilder::new()
            .build(&[0.01, 0.02], &[1.0, 1.0])
            .unwrap_err();
        assert!(matches!(err, CurveError::NonMonotonicTenors { .. }));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = ForwardRateCurveBuilder::new()
            .build(&[0.01, 0.02], &[1.0])
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidInput { .. }));
    }

    #[test]
    fn test_continuous_forward() {
        // Hull Table 4.5: 3% at 1y, 4% at 2y gives 5% for year 2
        assert_relative_eq!(
            continuous_forward_rate(0.03, 1.0, 0.04, 2.0).unwrap(),
            0.05,
            epsilon = 1e-15
        );
        let periods = ForwardRateCurveBuilder::new()
            .with_convention(ForwardConvention::Continuous)
            .build(&[0.03, 0.04, 0.046], &[1.0, 2.0, 3.0])
            .unwrap();
        assert_relative_eq!(periods[1].forward_rate, 0.058, epsilon = 1e-12);
    }

    #[test]
    fn test_instantaneous_forward() {
        assert_relative_eq!(instantaneous_forward_rate(0.04, 2.0, 0.005), 0.05);
    }

    #[test]
    fn test_round_trip_three_maturities() {
        let spots = [0.02, 0.025, 0.031];
        let maturities = [1.0, 2.0, 3.5];
        let builder = ForwardRateCurveBuilder::new();
        let periods = builder.build(&spots, &maturities).unwrap();
        let recovered = builder.spot_rates_from_forwards(spots[0], &periods).unwrap();
        for (a, b) in spots.iter().zip(recovered.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    proptest! {
        #[test]
        fn prop_forward_spot_round_trip(
            spots in proptest::collection::vec(-0.01f64..0.12, 3..10),
            continuous in proptest::bool::ANY,
        ) {
            let maturities: Vec<f64> = (0..spots.len()).map(|i| 0.5 + i as f64 * 0.75).collect();
            let convention = if continuous {
                ForwardConvention::Continuous
            } else {
                ForwardConvention::Discrete
            };
            let builder = ForwardRateCurveBuilder::new().with_convention(convention);
            let periods = builder.build(&spots, &maturities).unwrap();
            prop_assert_eq!(periods.len(), spots.len() - 1);

            let recovered = builder.spot_rates_from_forwards(spots[0], &periods).unwrap();
            for (a, b) in spots.iter().zip(recovered.iter()) {
                prop_assert!((a - b).abs() < 1e-10);
            }
        }
    }
}
