//! Root-finding algorithms.
//!
//! - [`newton_raphson`]: Quadratic convergence when a derivative is available
//! - [`brent`]: Guaranteed convergence inside a sign-changing bracket
//! - [`hybrid`]: Newton-Raphson first, Brent on a located bracket if Newton
//!   stalls or diverges
//!
//! # Example: FRA break-even
//!
//! ```rust
//! use tenor_math::solvers::{hybrid, SolverConfig};
//!
//! let forwards = [0.030, 0.032, 0.035];
//! let tau = 0.25;
//! let f = |k: f64| forwards.iter().map(|r| (r - k) * tau / (1.0 + r * tau)).sum::<f64>();
//! let df = |_: f64| -forwards.iter().map(|r| tau / (1.0 + r * tau)).sum::<f64>();
//!
//! let result = hybrid(f, df, 0.032, None, &SolverConfig::default()).unwrap();
//! assert!(f(result.root).abs() < 1e-10);
//! ```

mod brent;
mod hybrid;
mod newton;

pub use brent::brent;
pub use hybrid::{find_bracket, hybrid};
pub use newton::newton_raphson;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert_relative_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_all_solvers_agree_on_flat_yield() {
        // Annual 6% coupon, 7 years, price 98: solve the flat yield
        let price = |y: f64| {
            (1..=7).map(|t| 6.0 / (1.0 + y).powi(t)).sum::<f64>() + 100.0 / (1.0 + y).powi(7)
        };
        let dprice = |y: f64| {
            -(1..=7)
                .map(|t| f64::from(t) * 6.0 / (1.0 + y).powi(t + 1))
                .sum::<f64>()
                - 700.0 / (1.0 + y).powi(8)
        };
        let f = |y: f64| price(y) - 98.0;
        let config = SolverConfig::default();

        let newton = newton_raphson(f, dprice, 0.06, &config).unwrap();
        let bracketed = brent(f, 0.0, 0.2, &config).unwrap();
        let mixed = hybrid(f, dprice, 0.06, None, &config).unwrap();

        assert_relative_eq!(newton.root, bracketed.root, epsilon = 1e-8);
        assert_relative_eq!(newton.root, mixed.root, epsilon = 1e-8);
        assert!(newton.root > 0.06);
    }
}
