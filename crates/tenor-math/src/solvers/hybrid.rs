//! Hybrid root-finding algorithm.
//!
//! Combines Newton-Raphson with Brent's method for robust convergence.

use crate::error::{MathError, MathResult};
use crate::solvers::{brent, SolverConfig, SolverResult};

/// Newton iterations allowed before handing over to Brent.
const NEWTON_BUDGET: u32 = 20;

/// Consecutive residual blow-ups tolerated before Newton is abandoned.
const MAX_DIVERGENT_STEPS: u32 = 3;

/// Hybrid root-finding algorithm.
///
/// Runs Newton-Raphson from `initial_guess` with divergence monitoring. If
/// Newton stalls, diverges or hits a flat derivative, Brent's method takes
/// over on `bounds`, or on a bracket located by expanding outwards from the
/// guess when no bounds are given.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{hybrid, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
///
/// let result = hybrid(f, df, 1.5, Some((1.0, 2.0)), &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    match monitored_newton(&f, &df, initial_guess, config) {
        Ok(result) => Ok(result),
        Err(newton_err) => {
            log::debug!("newton failed from {initial_guess} ({newton_err}), falling back to brent");
            let (a, b) = match bounds {
                Some(bracket) => bracket,
                None => find_bracket(&f, initial_guess).ok_or_else(|| {
                    MathError::invalid_input(format!(
                        "Newton-Raphson failed ({newton_err}) and no bracketing interval was found around {initial_guess}"
                    ))
                })?,
            };
            brent(&f, a, b, config)
        }
    }
}

fn monitored_newton<F, DF>(
    f: &F,
    df: &DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let budget = config.max_iterations.min(NEWTON_BUDGET);
    let mut x = initial_guess;
    let mut fx = f(x);
    let mut divergent = 0;

    for iteration in 0..budget {
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let slope = df(x);
        if slope.abs() < 1e-15 {
            return Err(MathError::DivisionByZero { value: slope });
        }

        let step = fx / slope;
        let next = x - step;
        if !next.is_finite() {
            return Err(MathError::invalid_input("Newton produced non-finite value"));
        }
        let f_next = f(next);

        if f_next.abs() > 2.0 * fx.abs() {
            divergent += 1;
            if divergent >= MAX_DIVERGENT_STEPS {
                return Err(MathError::invalid_input("Newton-Raphson diverging"));
            }
        } else {
            divergent = 0;
        }

        x = next;
        fx = f_next;

        if step.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: fx,
            });
        }
    }

    Err(MathError::convergence_failed(budget, fx.abs()))
}

/// Searches outwards from `guess` for an interval on which `f` changes sign.
///
/// The half-width starts at 10% of the guess (or 0.1 near zero) and doubles
/// until a sign change appears or the search exceeds 1e6.
pub fn find_bracket<F>(f: &F, guess: f64) -> Option<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let f_mid = f(guess);
    if f_mid == 0.0 {
        return Some((guess, guess));
    }

    let mut width = (0.1 * guess.abs()).max(0.1);
    while width <= 1e6 {
        let (lo, hi) = (guess - width, guess + width);
        let (f_lo, f_hi) = (f(lo), f(hi));
        if f_lo.is_finite() && f_lo * f_mid <= 0.0 {
            return Some((lo, guess));
        }
        if f_hi.is_finite() && f_hi * f_mid <= 0.0 {
            return Some((guess, hi));
        }
        width *= 2.0;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_newton_path() {
        let result = hybrid(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            1.5,
            None,
            &SolverConfig::default(),
        )
        .unwrap();
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_falls_back_on_flat_derivative() {
        // Zero derivative at the guess sends Newton nowhere
        let f = |x: f64| x * x * x - 8.0;
        let df = |x: f64| 3.0 * x * x;

        let result = hybrid(f, df, 0.0, None, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_falls_back_to_given_bounds() {
        // atan overshoots from far guesses
        let f = |x: f64| x.atan();
        let df = |x: f64| 1.0 / (1.0 + x * x);

        let result = hybrid(f, df, 3.0, Some((-1.0, 5.0)), &SolverConfig::default()).unwrap();
        assert!(result.root.abs() < 1e-9);
    }

    #[test]
    fn test_no_root_reports_error() {
        let result = hybrid(
            |x| x * x + 1.0,
            |x| 2.0 * x,
            0.0,
            None,
            &SolverConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_find_bracket() {
        let (a, b) = find_bracket(&|x: f64| x - 3.0, 0.0).unwrap();
        assert!(a <= 3.0 && 3.0 <= b);
        assert!(find_bracket(&|x: f64| x * x + 1.0, 0.0).is_none());
    }
}
