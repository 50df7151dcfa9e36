//! Sequential zero-rate bootstrapping from bond prices.
//!
//! Bonds are processed in ascending maturity order. Each bond's zero rate is
//! solved in closed form from
//!
//! `price = Σ coupon · exp(-r(t_k) · t_k) + (face + coupon) · exp(-r · T)`
//!
//! where the intermediate coupons are discounted with rates already solved
//! for shorter bonds. A zero-coupon bond reduces to `r = ln(face / price) / T`
//! and should come first to seed the recursion.

use serde::{Deserialize, Serialize};
use tenor_core::validate;
use tenor_math::interpolation::{Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};
use crate::instrument::BondInstrument;
use crate::point::{RateCurve, RateCurvePoint};

/// Default tolerance when matching a coupon time to a solved maturity.
pub const DEFAULT_MATURITY_TOLERANCE: f64 = 1e-9;

/// How a coupon is discounted when no bond has been solved at its payment time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponDiscounting {
    /// Leave the coupon out of the discounted sum.
    #[default]
    OmitUnmatched,
    /// Linearly interpolate the rates solved so far, flat beyond both ends.
    InterpolateSolved,
}

/// Configuration for [`ZeroCurveBootstrapper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootstrapConfig {
    /// Policy for coupons falling between solved maturities.
    pub coupon_discounting: CouponDiscounting,
    /// Two times closer than this are the same maturity.
    pub maturity_tolerance: f64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            coupon_discounting: CouponDiscounting::OmitUnmatched,
            maturity_tolerance: DEFAULT_MATURITY_TOLERANCE,
        }
    }
}

/// The zero rate solved for one bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolvedZeroRate {
    /// Maturity in years.
    pub maturity: f64,
    /// Continuously compounded zero rate.
    pub rate: f64,
}

/// Sequential bootstrapper producing zero rates from bond prices.
///
/// # Example
///
/// ```rust
/// use tenor_curves::bootstrap::ZeroCurveBootstrapper;
/// use tenor_curves::instrument::BondInstrument;
///
/// let bonds = [
///     BondInstrument::zero_coupon(97.5, 100.0, 0.5),
///     BondInstrument::zero_coupon(94.9, 100.0, 1.0),
///     BondInstrument::new(101.6, 100.0, 0.08, 2, 1.5),
/// ];
/// let solved = ZeroCurveBootstrapper::new().bootstrap(&bonds).unwrap();
/// assert_eq!(solved.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZeroCurveBootstrapper {
    config: BootstrapConfig,
}

impl ZeroCurveBootstrapper {
    /// Creates a bootstrapper with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bootstrap configuration.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the coupon discounting policy.
    #[must_use]
    pub fn with_coupon_discounting(mut self, policy: CouponDiscounting) -> Self {
        self.config.coupon_discounting = policy;
        self
    }

    /// Solves one zero rate per bond, returned in ascending maturity order.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidInput`] if any bond fails validation (checked
    ///   for every bond before solving starts)
    /// - [`CurveError::NonPositiveLogArgument`] if a bond's price does not
    ///   exceed its discounted coupons
    pub fn bootstrap(&self, bonds: &[BondInstrument]) -> CurveResult<Vec<SolvedZeroRate>> {
        self.solve(bonds).map(|(results, _)| results)
    }

    /// Bootstraps and collects the result into a [`RateCurve`].
    ///
    /// Bonds sharing a maturity contribute the mean of their solved rates.
    /// Longer bonds discount their coupons at that same mean, so every rate
    /// used during solving appears on the returned curve.
    pub fn bootstrap_curve(&self, bonds: &[BondInstrument]) -> CurveResult<RateCurve> {
        let (_, solved) = self.solve(bonds)?;
        RateCurve::from_sorted(solved.into_points())
    }

    fn solve(&self, bonds: &[BondInstrument]) -> CurveResult<(Vec<SolvedZeroRate>, SolvedRates)> {
        validate::non_empty("bonds", bonds)?;
        for (i, bond) in bonds.iter().enumerate() {
            bond.validate(i)?;
        }

        let mut ordered = bonds.to_vec();
        ordered.sort_by(BondInstrument::ordering);
        if !ordered[0].is_zero_coupon() {
            log::warn!(
                "shortest bond (maturity {}) pays coupons; early coupons cannot be discounted",
                ordered[0].maturity
            );
        }

        let mut solved = SolvedRates::new(self.config.maturity_tolerance);
        let mut results = Vec::with_capacity(ordered.len());
        for bond in &ordered {
            let rate = if bond.is_zero_coupon() {
                (bond.face_value / bond.price).ln() / bond.maturity
            } else {
                self.solve_coupon_bond(bond, &solved)?
            };
            log::debug!("bootstrapped maturity {} -> zero rate {rate:.8}", bond.maturity);

            solved.record(bond.maturity, rate);
            results.push(SolvedZeroRate {
                maturity: bond.maturity,
                rate,
            });
        }

        Ok((results, solved))
    }

    fn solve_coupon_bond(&self, bond: &BondInstrument, solved: &SolvedRates) -> CurveResult<f64> {
        let coupon = bond.coupon_per_payment();
        let fallback = match self.config.coupon_discounting {
            CouponDiscounting::OmitUnmatched => None,
            CouponDiscounting::InterpolateSolved => solved.interpolator()?,
        };

        let mut discounted = 0.0;
        let mut omitted = 0usize;
        for t in bond.intermediate_payment_times(self.config.maturity_tolerance) {
            let rate = match solved.exact(t) {
                Some(r) => Some(r),
                None => fallback.as_ref().map(|f| f.rate(t)).transpose()?,
            };
            match rate {
                Some(r) => discounted += coupon * (-r * t).exp(),
                None => omitted += 1,
            }
        }
        if omitted > 0 {
            log::warn!(
                "bond maturing at {}: {omitted} coupon(s) had no solved rate and were omitted",
                bond.maturity
            );
        }

        let numerator = bond.price - discounted;
        let denominator = bond.face_value + coupon;
        if numerator <= 0.0 || denominator <= 0.0 {
            return Err(CurveError::NonPositiveLogArgument {
                maturity: bond.maturity,
                numerator,
                denominator,
            });
        }

        Ok(-(numerator / denominator).ln() / bond.maturity)
    }
}

/// Rates solved so far, ascending by maturity.
///
/// Bonds sharing a maturity are held as the mean of their rates.
struct SolvedRates {
    points: Vec<RateCurvePoint>,
    group_len: usize,
    group_sum: f64,
    tolerance: f64,
}

impl SolvedRates {
    fn new(tolerance: f64) -> Self {
        Self {
            points: Vec::new(),
            group_len: 0,
            group_sum: 0.0,
            tolerance,
        }
    }

    /// Bonds arrive in ascending maturity, so a repeat can only match the last point.
    fn record(&mut self, maturity: f64, rate: f64) {
        match self.points.last_mut() {
            Some(last) if (last.maturity - maturity).abs() <= self.tolerance => {
                self.group_len += 1;
                self.group_sum += rate;
                last.rate = self.group_sum / self.group_len as f64;
            }
            _ => {
                self.group_len = 1;
                self.group_sum = rate;
                self.points.push(RateCurvePoint::new(maturity, rate));
            }
        }
    }

    fn into_points(self) -> Vec<RateCurvePoint> {
        self.points
    }

    fn exact(&self, t: f64) -> Option<f64> {
        let idx = self.points.partition_point(|p| p.maturity < t - self.tolerance);
        self.points
            .get(idx)
            .filter(|p| (p.maturity - t).abs() <= self.tolerance)
            .map(|p| p.rate)
    }

    fn interpolator(&self) -> CurveResult<Option<SolvedInterpolation>> {
        Ok(match self.points.as_slice() {
            [] => None,
            [only] => Some(SolvedInterpolation::Flat(only.rate)),
            points => {
                let xs = points.iter().map(|p| p.maturity).collect();
                let ys = points.iter().map(|p| p.rate).collect();
                Some(SolvedInterpolation::Linear(
                    LinearInterpolator::new(xs, ys)?.with_flat_extrapolation(),
                ))
            }
        })
    }
}

enum SolvedInterpolation {
    Flat(f64),
    Linear(LinearInterpolator),
}

impl SolvedInterpolation {
    fn rate(&self, t: f64) -> CurveResult<f64> {
        match self {
            Self::Flat(r) => Ok(*r),
            Self::Linear(interp) => Ok(interp.interpolate(t)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hull_bonds() -> Vec<BondInstrument> {
        vec![
            BondInstrument::zero_coupon(97.5, 100.0, 0.25),
            BondInstrument::zero_coupon(94.9, 100.0, 0.5),
            BondInstrument::zero_coupon(90.0, 100.0, 1.0),
            BondInstrument::new(96.0, 100.0, 0.08, 2, 1.5),
            BondInstrument::new(101.6, 100.0, 0.12, 2, 2.0),
        ]
    }

    #[test]
    fn test_zero_coupon_seed() {
        let solved = ZeroCurveBootstrapper::new()
            .bootstrap(&[BondInstrument::new(95.0, 100.0, 0.0, 1, 1.0)])
            .unwrap();

        assert_eq!(solved.len(), 1);
        assert_relative_eq!(solved[0].rate, (100.0_f64 / 95.0).ln(), epsilon = 1e-15);
        assert_relative_eq!(solved[0].rate, 0.05129, epsilon = 1e-5);
    }

    #[test]
    fn test_textbook_curve() {
        // Hull, Options Futures and Other Derivatives, Table 4.3
        let solved = ZeroCurveBootstrapper::new().bootstrap(&hull_bonds()).unwrap();
        let rates: Vec<f64> = solved.iter().map(|s| s.rate).collect();

        assert_relative_eq!(rates[0], 0.10127, epsilon = 1e-5);
        assert_relative_eq!(rates[1], 0.10469, epsilon = 1e-5);
        assert_relative_eq!(rates[2], 0.10536, epsilon = 1e-5);
        assert_relative_eq!(rates[3], 0.10681, epsilon = 1e-5);
        assert_relative_eq!(rates[4], 0.10808, epsilon = 1e-5);
    }

    #[test]
    fn test_coupon_bond_uses_solved_rates() {
        let bonds = [
            BondInstrument::zero_coupon(95.0, 100.0, 1.0),
            BondInstrument::new(100.0, 100.0, 0.06, 1, 2.0),
        ];
        let solved = ZeroCurveBootstrapper::new().bootstrap(&bonds).unwrap();

        let r1 = (100.0_f64 / 95.0).ln();
        let expected = -((100.0 - 6.0 * (-r1).exp()) / 106.0).ln() / 2.0;
        assert_relative_eq!(solved[1].rate, expected, epsilon = 1e-14);
    }

    #[test]
    fn test_unmatched_coupon_is_omitted_by_default() {
        // 1.5y semi-annual bond: coupons at 0.5 (missing) and 1.0 (solved)
        let bonds = [
            BondInstrument::zero_coupon(95.0, 100.0, 1.0),
            BondInstrument::new(98.0, 100.0, 0.04, 2, 1.5),
        ];
        let solved = ZeroCurveBootstrapper::new().bootstrap(&bonds).unwrap();

        let r1 = (100.0_f64 / 95.0).ln();
        let expected = -((98.0 - 2.0 * (-r1).exp()) / 102.0).ln() / 1.5;
        assert_relative_eq!(solved[1].rate, expected, epsilon = 1e-14);
    }

    #[test]
    fn test_interpolated_policy_discounts_every_coupon() {
        let bonds = [
            BondInstrument::zero_coupon(95.0, 100.0, 1.0),
            BondInstrument::new(98.0, 100.0, 0.04, 2, 1.5),
        ];
        let solved = ZeroCurveBootstrapper::new()
            .with_coupon_discounting(CouponDiscounting::InterpolateSolved)
            .bootstrap(&bonds)
            .unwrap();

        // Only one solved point, so the 0.5y coupon is discounted flat at r1
        let r1 = (100.0_f64 / 95.0).ln();
        let coupons = 2.0 * (-r1 * 0.5).exp() + 2.0 * (-r1).exp();
        let expected = -((98.0 - coupons) / 102.0).ln() / 1.5;
        assert_relative_eq!(solved[1].rate, expected, epsilon = 1e-14);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let mut bonds = hull_bonds();
        bonds.reverse();
        let reversed = ZeroCurveBootstrapper::new().bootstrap(&bonds).unwrap();
        let sorted = ZeroCurveBootstrapper::new().bootstrap(&hull_bonds()).unwrap();
        assert_eq!(reversed, sorted);
    }

    #[test]
    fn test_coupon_sum_exceeding_price_fails() {
        let bonds = [
            BondInstrument::zero_coupon(95.0, 100.0, 1.0),
            BondInstrument::new(10.0, 100.0, 0.5, 1, 2.0),
        ];
        let err = ZeroCurveBootstrapper::new().bootstrap(&bonds).unwrap_err();
        assert!(matches!(
            err,
            CurveError::NonPositiveLogArgument { maturity, .. } if maturity == 2.0
        ));
    }

    #[test]
    fn test_validation_happens_before_solving() {
        let bonds = [
            BondInstrument::zero_coupon(95.0, 100.0, 1.0),
            BondInstrument::zero_coupon(-1.0, 100.0, 2.0),
        ];
        let err = ZeroCurveBootstrapper::new().bootstrap(&bonds).unwrap_err();
        assert!(matches!(err, CurveError::InvalidInput { .. }));

        let err = ZeroCurveBootstrapper::new().bootstrap(&[]).unwrap_err();
        assert!(matches!(err, CurveError::InvalidInput { ref reason } if reason.contains("bonds")));
        assert!(ZeroCurveBootstrapper::new().bootstrap_curve(&[]).is_err());
    }

    #[test]
    fn test_bootstrap_curve_averages_duplicate_maturities() {
        let bonds = [
            BondInstrument::zero_coupon(95.0, 100.0, 1.0),
            BondInstrument::zero_coupon(96.0, 100.0, 1.0),
        ];
        let curve = ZeroCurveBootstrapper::new().bootstrap_curve(&bonds).unwrap();
        assert_eq!(curve.len(), 1);
        let expected = ((100.0_f64 / 95.0).ln() + (100.0_f64 / 96.0).ln()) / 2.0;
        assert_relative_eq!(curve.rate_at(1.0).unwrap(), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_duplicate_maturity_mean_discounts_later_coupons() {
        let bonds = [
            BondInstrument::zero_coupon(96.0, 100.0, 1.0),
            BondInstrument::zero_coupon(95.0, 100.0, 1.0),
            BondInstrument::new(100.0, 100.0, 0.06, 1, 2.0),
        ];
        let curve = ZeroCurveBootstrapper::new().bootstrap_curve(&bonds).unwrap();
        assert_eq!(curve.len(), 2);

        let r1 = ((100.0_f64 / 95.0).ln() + (100.0_f64 / 96.0).ln()) / 2.0;
        assert_relative_eq!(curve.rate_at(1.0).unwrap(), r1, epsilon = 1e-15);
        let r2 = -((100.0 - 6.0 * (-r1).exp()) / 106.0).ln() / 2.0;
        assert_relative_eq!(curve.rate_at(2.0).unwrap(), r2, epsilon = 1e-12);
        assert_relative_eq!(r2, 0.058_637_627_8, epsilon = 1e-9);

        // Per-bond results keep each bond's own rate.
        let solved = ZeroCurveBootstrapper::new().bootstrap(&bonds).unwrap();
        assert_eq!(solved.len(), 3);
        assert_relative_eq!(solved[0].rate, (100.0_f64 / 95.0).ln(), epsilon = 1e-15);
    }
}
