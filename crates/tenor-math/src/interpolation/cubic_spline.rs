//! Natural cubic spline interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{check_knots, segment_index, Interpolator};

/// Natural cubic spline interpolation.
///
/// Piecewise cubic through every knot with continuous first and second
/// derivatives. "Natural" means the second derivative is zero at both ends,
/// so two knots give the straight line between them.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{CubicSpline, Interpolator};
///
/// let spline = CubicSpline::new(vec![1.0, 2.0, 3.0], vec![0.02, 0.025, 0.03]).unwrap();
/// assert!((spline.interpolate(2.0).unwrap() - 0.025).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    moments: Vec<f64>,
    allow_extrapolation: bool,
}

impl CubicSpline {
    /// Fits a natural cubic spline through `(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        check_knots(&xs, &ys, 2)?;
        let moments = natural_moments(&xs, &ys)?;

        Ok(Self {
            xs,
            ys,
            moments,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range using the end segments' cubics.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Knot abscissae.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Knot ordinates.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }

    /// Segment index, width and the barycentric weights `(a, b)` of `x` in it.
    fn locate(&self, x: f64) -> (usize, f64, f64, f64) {
        let i = segment_index(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        (i, h, a, b)
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let (i, h, a, b) = self.locate(x);

        let linear = a * self.ys[i] + b * self.ys[i + 1];
        let curvature =
            ((a * a * a - a) * self.moments[i] + (b * b * b - b) * self.moments[i + 1]) * h * h
                / 6.0;
        Ok(linear + curvature)
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;
        let (i, h, a, b) = self.locate(x);

        let slope = (self.ys[i + 1] - self.ys[i]) / h;
        Ok(slope - (3.0 * a * a - 1.0) * h * self.moments[i] / 6.0
            + (3.0 * b * b - 1.0) * h * self.moments[i + 1] / 6.0)
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Solves the tridiagonal system for the knot second derivatives with
/// `M[0] = M[n-1] = 0` (Thomas algorithm over the interior knots).
fn natural_moments(xs: &[f64], ys: &[f64]) -> MathResult<Vec<f64>> {
    let n = xs.len();
    let mut moments = vec![0.0; n];
    if n < 3 {
        return Ok(moments);
    }

    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let interior = n - 2;
    let mut diag = Vec::with_capacity(interior);
    let mut rhs = Vec::with_capacity(interior);
    for i in 1..n - 1 {
        diag.push(2.0 * (h[i - 1] + h[i]));
        rhs.push(6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]));
    }

    // Forward elimination; sub- and super-diagonals are h[k] for row k + 1.
    for k in 1..interior {
        let pivot = diag[k - 1];
        if pivot.abs() < f64::EPSILON {
            return Err(MathError::DivisionByZero { value: pivot });
        }
        let w = h[k] / pivot;
        diag[k] -= w * h[k];
        rhs[k] -= w * rhs[k - 1];
    }

    // Back substitution.
    moments[interior] = rhs[interior - 1] / diag[interior - 1];
    for k in (0..interior - 1).rev() {
        moments[k + 1] = (rhs[k] - h[k + 1] * moments[k + 2]) / diag[k];
    }

    Ok(moments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_cubic_spline_through_points() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];

        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_points_is_linear() {
        let spline = CubicSpline::new(vec![1.0, 3.0], vec![0.02, 0.03]).unwrap();

        assert_relative_eq!(spline.interpolate(2.0).unwrap(), 0.025, epsilon = 1e-14);
        assert_relative_eq!(spline.derivative(1.5).unwrap(), 0.005, epsilon = 1e-14);
    }

    #[test]
    fn test_linear_data_reproduced() {
        // Natural spline through collinear points is the line itself
        let xs = vec![1.0, 2.0, 4.0, 7.0];
        let ys: Vec<f64> = xs.iter().map(|x| 0.01 + 0.002 * x).collect();
        let spline = CubicSpline::new(xs, ys).unwrap();

        for x in [1.3, 2.9, 5.5, 6.99] {
            assert_relative_eq!(spline.interpolate(x).unwrap(), 0.01 + 0.002 * x, epsilon = 1e-14);
            assert_relative_eq!(spline.derivative(x).unwrap(), 0.002, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_known_moments() {
        // Three equally spaced knots: M1 = 6 * (y2 - 2 y1 + y0) / (4 h^2)
        let spline = CubicSpline::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
        assert_relative_eq!(spline.moments[1], -3.0, epsilon = 1e-14);
        assert_relative_eq!(spline.interpolate(0.5).unwrap(), 0.6875, epsilon = 1e-14);
    }

    #[test]
    fn test_extrapolation_rejected_by_default() {
        let spline = CubicSpline::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            spline.interpolate(3.5),
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));

        let spline = spline.with_extrapolation();
        assert_relative_eq!(spline.interpolate(3.5).unwrap(), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_insufficient_points() {
        assert!(matches!(
            CubicSpline::new(vec![1.0], vec![1.0]),
            Err(MathError::InsufficientData { required: 2, actual: 1 })
        ));
    }

    proptest! {
        #[test]
        fn prop_passes_through_knots(
            steps in proptest::collection::vec(0.05f64..2.0, 2..12),
            seed in proptest::collection::vec(-0.02f64..0.08, 12),
        ) {
            let mut xs = Vec::with_capacity(steps.len());
            let mut x = 0.25;
            for step in &steps {
                x += step;
                xs.push(x);
            }
            let ys: Vec<f64> = seed.iter().take(xs.len()).copied().collect();
            let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
            for (x, y) in xs.iter().zip(ys.iter()) {
                prop_assert!((spline.interpolate(*x).unwrap() - y).abs() < 1e-10);
            }
        }
    }
}
