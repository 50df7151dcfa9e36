//! Interpolation methods for curve construction.
//!
//! - [`CubicSpline`]: Natural cubic spline, used to smooth spliced curves
//! - [`LinearInterpolator`]: Piecewise linear, used to fill gaps in a
//!   partially bootstrapped curve
//!
//! | Method | Smoothness | Minimum points |
//! |--------|------------|----------------|
//! | Linear | C0 | 2 |
//! | Cubic Spline | C2 | 2 (a straight line) |

mod cubic_spline;
mod linear;

pub use cubic_spline::CubicSpline;
pub use linear::{LinearExtrapolation, LinearInterpolator};

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Returns `n` evenly spaced values from `start` to `end` inclusive.
///
/// The last value is exactly `end`.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}

/// Shared knot validation: equal lengths, enough points, strictly increasing finite xs.
pub(crate) fn check_knots(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("knots must be finite"));
    }
    if xs.windows(2).any(|w| w[1] <= w[0]) {
        return Err(MathError::invalid_input(
            "x values must be strictly increasing",
        ));
    }
    Ok(())
}

/// Index `i` of the segment `[xs[i], xs[i + 1]]` containing `x`, clamped to the ends.
pub(crate) fn segment_index(xs: &[f64], x: f64) -> usize {
    let upper = xs.partition_point(|&knot| knot <= x);
    upper.saturating_sub(1).min(xs.len() - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace() {
        let pts = linspace(1.0, 3.0, 5);
        assert_eq!(pts, vec![1.0, 1.5, 2.0, 2.5, 3.0]);

        let pts = linspace(1.0, 3.0, 300);
        assert_eq!(pts.len(), 300);
        assert_relative_eq!(pts[0], 1.0);
        assert_eq!(pts[299], 3.0);

        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn test_segment_index() {
        let xs = [1.0, 2.0, 3.0];
        assert_eq!(segment_index(&xs, 0.5), 0);
        assert_eq!(segment_index(&xs, 1.0), 0);
        assert_eq!(segment_index(&xs, 2.0), 1);
        assert_eq!(segment_index(&xs, 2.5), 1);
        assert_eq!(segment_index(&xs, 3.0), 1);
        assert_eq!(segment_index(&xs, 9.0), 1);
    }

    #[test]
    fn test_all_interpolators_through_points() {
        let times = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let rates = vec![0.02, 0.025, 0.03, 0.035, 0.04];

        let linear = LinearInterpolator::new(times.clone(), rates.clone()).unwrap();
        let spline = CubicSpline::new(times.clone(), rates.clone()).unwrap();
        for (t, r) in times.iter().zip(rates.iter()) {
            assert_relative_eq!(linear.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
            assert_relative_eq!(spline.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_check_knots() {
        assert!(check_knots(&[1.0, 2.0], &[0.0], 2).is_err());
        assert!(check_knots(&[1.0], &[0.0], 2).is_err());
        assert!(check_knots(&[1.0, 1.0], &[0.0, 0.0], 2).is_err());
        assert!(check_knots(&[1.0, f64::NAN], &[0.0, 0.0], 2).is_err());
        assert!(check_knots(&[1.0, 2.0], &[0.0, 0.0], 2).is_ok());
    }
}
