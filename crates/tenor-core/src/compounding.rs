//! Compounding conventions and rate conversions.
//!
//! Curve rates are continuously compounded throughout Tenor. Quoted market
//! rates usually are not, so the conversions here sit at the edge of every
//! calculation:
//!
//! - Nominal (m-compounding) to continuous: `R_c = m * ln(1 + R_m / m)`
//! - Continuous to nominal: `R_m = m * (exp(R_c / m) - 1)`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TenorError, TenorResult};

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Simple interest (no compounding)
    Simple,
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year)
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Arbitrary number of compounding periods per year
    Periodic(u32),
    /// Continuous compounding
    #[default]
    Continuous,
}

impl Compounding {
    /// Builds a convention from a payments-per-year count.
    ///
    /// Well-known frequencies map onto their named variants.
    pub fn from_periods(periods: u32) -> TenorResult<Self> {
        match periods {
            0 => Err(TenorError::validation(
                "compounding frequency must be at least 1 per year",
            )),
            1 => Ok(Compounding::Annual),
            2 => Ok(Compounding::SemiAnnual),
            4 => Ok(Compounding::Quarterly),
            12 => Ok(Compounding::Monthly),
            m => Ok(Compounding::Periodic(m)),
        }
    }

    /// Returns the number of compounding periods per year.
    ///
    /// `None` for simple and continuous compounding.
    #[must_use]
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Compounding::Simple | Compounding::Continuous => None,
            Compounding::Annual => Some(1),
            Compounding::SemiAnnual => Some(2),
            Compounding::Quarterly => Some(4),
            Compounding::Monthly => Some(12),
            Compounding::Periodic(m) => Some(*m),
        }
    }

    /// Discount factor for `rate` over `t` years.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        match self {
            Compounding::Simple => 1.0 / (1.0 + rate * t),
            Compounding::Continuous => (-rate * t).exp(),
            periodic => {
                let m = periodic.periods_per_year().unwrap_or(1) as f64;
                (1.0 + rate / m).powf(-m * t)
            }
        }
    }

    /// Rate under this convention implied by discount factor `df` over `t` years.
    pub fn zero_rate(&self, df: f64, t: f64) -> TenorResult<f64> {
        if df <= 0.0 {
            return Err(TenorError::validation(format!(
                "discount factor must be positive, got {df}"
            )));
        }
        if t <= 0.0 {
            return Err(TenorError::validation(format!(
                "time must be positive, got {t}"
            )));
        }

        Ok(match self {
            Compounding::Simple => (1.0 / df - 1.0) / t,
            Compounding::Continuous => -df.ln() / t,
            periodic => {
                let m = periodic.periods_per_year().unwrap_or(1) as f64;
                m * (df.powf(-1.0 / (m * t)) - 1.0)
            }
        })
    }

    /// Converts `rate` quoted under this convention into `target`.
    ///
    /// Equivalence is taken over `t` years, which only matters when either
    /// side is simple interest.
    pub fn convert_to(&self, rate: f64, target: Compounding, t: f64) -> TenorResult<f64> {
        if *self == target {
            return Ok(rate);
        }
        target.zero_rate(self.discount_factor(rate, t), t)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compounding::Simple => write!(f, "Simple"),
            Compounding::Annual => write!(f, "Annual"),
            Compounding::SemiAnnual => write!(f, "Semi-Annual"),
            Compounding::Quarterly => write!(f, "Quarterly"),
            Compounding::Monthly => write!(f, "Monthly"),
            Compounding::Periodic(m) => write!(f, "{m}x per year"),
            Compounding::Continuous => write!(f, "Continuous"),
        }
    }
}

/// Converts a rate compounded `m` times per year into its continuous equivalent.
pub fn nominal_to_continuous(rate_m: f64, m: u32) -> TenorResult<f64> {
    let from = Compounding::from_periods(m)?;
    if 1.0 + rate_m / m as f64 <= 0.0 {
        return Err(TenorError::validation(format!(
            "rate {rate_m} is below -{m} and has no continuous equivalent"
        )));
    }
    from.convert_to(rate_m, Compounding::Continuous, 1.0)
}

/// Converts a continuously compounded rate into its `m`-times-per-year equivalent.
pub fn continuous_to_nominal(rate_c: f64, m: u32) -> TenorResult<f64> {
    Compounding::Continuous.convert_to(rate_c, Compounding::from_periods(m)?, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_nominal_to_continuous() {
        // 10% semi-annual is 9.7580% continuous
        let rc = nominal_to_continuous(0.10, 2).unwrap();
        assert_relative_eq!(rc, 2.0 * 1.05_f64.ln(), epsilon = 1e-14);
        assert_relative_eq!(rc, 0.097_580, epsilon = 1e-6);
    }

    #[test]
    fn test_continuous_to_nominal() {
        // 8% continuous is 8.0805% quarterly
        let rm = continuous_to_nominal(0.08, 4).unwrap();
        assert_relative_eq!(rm, 0.080_805_4, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        assert!(nominal_to_continuous(0.05, 0).is_err());
        assert!(continuous_to_nominal(0.05, 0).is_err());
        assert!(Compounding::from_periods(0).is_err());
    }

    #[test]
    fn test_from_periods() {
        assert_eq!(Compounding::from_periods(2).unwrap(), Compounding::SemiAnnual);
        assert_eq!(
            Compounding::from_periods(3).unwrap(),
            Compounding::Periodic(3)
        );
        assert_eq!(Compounding::Periodic(3).periods_per_year(), Some(3));
        assert_eq!(Compounding::Continuous.periods_per_year(), None);
    }

    #[test]
    fn test_discount_factor_conventions() {
        assert_relative_eq!(
            Compounding::Continuous.discount_factor(0.05, 2.0),
            (-0.1_f64).exp(),
            epsilon = 1e-14
        );
        assert_relative_eq!(
            Compounding::Annual.discount_factor(0.05, 2.0),
            1.0 / 1.05_f64.powi(2),
            epsilon = 1e-14
        );
        assert_relative_eq!(
            Compounding::Simple.discount_factor(0.05, 0.5),
            1.0 / 1.025,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_convert_to_matches_free_functions() {
        let rc = Compounding::SemiAnnual
            .convert_to(0.06, Compounding::Continuous, 3.0)
            .unwrap();
        assert_relative_eq!(rc, nominal_to_continuous(0.06, 2).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_rejects_bad_inputs() {
        assert!(Compounding::Continuous.zero_rate(0.0, 1.0).is_err());
        assert!(Compounding::Continuous.zero_rate(0.9, 0.0).is_err());
    }

    proptest! {
        #[test]
        fn prop_round_trip(rate in -0.05f64..0.25, m in 1u32..=365) {
            let rc = nominal_to_continuous(rate, m).unwrap();
            let back = continuous_to_nominal(rc, m).unwrap();
            prop_assert!((back - rate).abs() < 1e-10);
        }
    }
}
