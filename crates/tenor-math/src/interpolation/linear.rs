//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{check_knots, segment_index, Interpolator};

/// How a [`LinearInterpolator`] answers queries outside its knots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinearExtrapolation {
    /// Out-of-range queries are an error.
    #[default]
    None,
    /// Hold the end values constant.
    Flat,
    /// Extend the end segments.
    Linear,
}

/// Linear interpolation between data points.
///
/// # Example
///
/// ```rust
/// use tenor_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![0.02, 0.03]).unwrap();
/// assert!((interp.interpolate(1.5).unwrap() - 0.025).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    extrapolation: LinearExtrapolation,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        check_knots(&xs, &ys, 2)?;
        Ok(Self {
            xs,
            ys,
            extrapolation: LinearExtrapolation::None,
        })
    }

    /// Holds the end values constant outside the knots.
    #[must_use]
    pub fn with_flat_extrapolation(mut self) -> Self {
        self.extrapolation = LinearExtrapolation::Flat;
        self
    }

    /// Extends the end segments outside the knots.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.extrapolation = LinearExtrapolation::Linear;
        self
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if !self.in_range(x) {
            match self.extrapolation {
                LinearExtrapolation::None => {
                    return Err(MathError::ExtrapolationNotAllowed {
                        x,
                        min: self.min_x(),
                        max: self.max_x(),
                    })
                }
                LinearExtrapolation::Flat => {
                    let y = if x < self.min_x() {
                        self.ys[0]
                    } else {
                        self.ys[self.ys.len() - 1]
                    };
                    return Ok(y);
                }
                LinearExtrapolation::Linear => {}
            }
        }

        let i = segment_index(&self.xs, x);
        let t = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        Ok(self.ys[i] + t * (self.ys[i + 1] - self.ys[i]))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        if !self.in_range(x) {
            match self.extrapolation {
                LinearExtrapolation::None => {
                    return Err(MathError::ExtrapolationNotAllowed {
                        x,
                        min: self.min_x(),
                        max: self.max_x(),
                    })
                }
                LinearExtrapolation::Flat => return Ok(0.0),
                LinearExtrapolation::Linear => {}
            }
        }

        let i = segment_index(&self.xs, x);
        Ok((self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]))
    }

    fn allows_extrapolation(&self) -> bool {
        self.extrapolation != LinearExtrapolation::None
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_basic() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 3.0], vec![0.0, 1.0, 5.0]).unwrap();

        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(interp.derivative(2.0).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation_modes() {
        let xs = vec![1.0, 2.0];
        let ys = vec![0.02, 0.03];

        let strict = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
        assert!(strict.interpolate(0.5).is_err());

        let flat = strict.clone().with_flat_extrapolation();
        assert_relative_eq!(flat.interpolate(0.5).unwrap(), 0.02);
        assert_relative_eq!(flat.interpolate(4.0).unwrap(), 0.03);
        assert_relative_eq!(flat.derivative(4.0).unwrap(), 0.0);

        let linear = LinearInterpolator::new(xs, ys).unwrap().with_extrapolation();
        assert_relative_eq!(linear.interpolate(3.0).unwrap(), 0.04, epsilon = 1e-12);
    }
}
