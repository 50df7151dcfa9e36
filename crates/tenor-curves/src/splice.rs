//! Curve splicing: extending a known zero curve with swap or FRA quotes.
//!
//! Both variants share one pipeline:
//!
//! 1. Concatenate the base points with the incoming instrument points
//! 2. Average the rates of points sharing an exact tenor
//! 3. Sort ascending by tenor
//! 4. Fit a natural cubic spline through the merged points
//! 5. Sample the spline at evenly spaced tenors across `[min, max]`
//!
//! Swap rates are merged as-is. FRA rates are first turned into implied zero
//! rates with the simple-interest composition
//! `r2 = ((1 + r1·T1)(1 + FRA·(T2 - T1)) - 1) / T2`.

use serde::{Deserialize, Serialize};
use tenor_core::validate;
use tenor_math::interpolation::{linspace, CubicSpline, Interpolator};

use crate::error::{CurveError, CurveResult};
use crate::point::{average_duplicates, RateCurve, RateCurvePoint};

/// Default number of samples taken from the fitted spline.
pub const DEFAULT_SAMPLE_POINTS: usize = 300;

/// Largest accepted sample count.
pub const MAX_SAMPLE_POINTS: usize = 100_000;

/// Which point an FRA quote's implied zero rate is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraAnchor {
    /// Every FRA is composed from the longest-maturity base point.
    #[default]
    LastBasePoint,
    /// FRAs are taken in tenor order, each composed from the previous implied point.
    Chained,
}

/// The kind of instrument being spliced onto the base curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpliceKind {
    /// Swap rates, treated as zero-equivalent.
    Swap,
    /// FRA rates, converted to implied zero rates first.
    Fra,
}

/// Configuration for [`CurveSplicer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpliceConfig {
    /// Number of evenly spaced samples in the output curve.
    pub sample_points: usize,
    /// FRA anchoring rule.
    pub fra_anchor: FraAnchor,
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self {
            sample_points: DEFAULT_SAMPLE_POINTS,
            fra_anchor: FraAnchor::LastBasePoint,
        }
    }
}

impl SpliceConfig {
    /// Sets the sample count.
    #[must_use]
    pub fn with_sample_points(mut self, sample_points: usize) -> Self {
        self.sample_points = sample_points;
        self
    }

    /// Sets the FRA anchoring rule.
    #[must_use]
    pub fn with_fra_anchor(mut self, anchor: FraAnchor) -> Self {
        self.fra_anchor = anchor;
        self
    }
}

/// Inputs to a splice: a base curve plus instrument quotes at their tenors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpliceInput {
    /// Known base curve points, in any order.
    pub base_curve: Vec<RateCurvePoint>,
    /// Instrument quotes (swap rates, or raw FRA rates).
    pub instrument_rates: Vec<f64>,
    /// Tenors of the instrument quotes.
    pub instrument_tenors: Vec<f64>,
}

impl SpliceInput {
    /// Builds an input from the four parallel columns.
    pub fn from_columns(
        base_tenors: &[f64],
        base_rates: &[f64],
        instrument_tenors: &[f64],
        instrument_rates: &[f64],
    ) -> CurveResult<Self> {
        validate::same_len("base_tenors", base_tenors, "base_rates", base_rates)?;
        validate::same_len(
            "instrument_tenors",
            instrument_tenors,
            "instrument_rates",
            instrument_rates,
        )?;
        Ok(Self {
            base_curve: base_tenors
                .iter()
                .zip(base_rates)
                .map(|(&t, &r)| RateCurvePoint::new(t, r))
                .collect(),
            instrument_rates: instrument_rates.to_vec(),
            instrument_tenors: instrument_tenors.to_vec(),
        })
    }

    fn validate(&self) -> CurveResult<()> {
        validate::same_len(
            "instrument_tenors",
            &self.instrument_tenors,
            "instrument_rates",
            &self.instrument_rates,
        )?;
        for (i, p) in self.base_curve.iter().enumerate() {
            validate::positive(&format!("base_tenors[{i}]"), p.maturity)?;
            validate::finite(&format!("base_rates[{i}]"), p.rate)?;
        }
        validate::all_positive("instrument_tenors", &self.instrument_tenors)?;
        validate::all_finite("instrument_rates", &self.instrument_rates)?;
        Ok(())
    }

    fn instrument_points(&self) -> Vec<RateCurvePoint> {
        self.instrument_tenors
            .iter()
            .zip(&self.instrument_rates)
            .map(|(&t, &r)| RateCurvePoint::new(t, r))
            .collect()
    }
}

/// The spliced curve: merged knots and the spline sampled across them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolatedCurve {
    /// De-duplicated, sorted points the spline passes through.
    pub knots: RateCurve,
    /// Evenly spaced samples of the spline from the first to the last knot.
    pub samples: Vec<RateCurvePoint>,
}

impl InterpolatedCurve {
    /// Sampled tenors.
    pub fn tenors(&self) -> Vec<f64> {
        self.samples.iter().map(|p| p.maturity).collect()
    }

    /// Sampled rates.
    pub fn rates(&self) -> Vec<f64> {
        self.samples.iter().map(|p| p.rate).collect()
    }

    /// Refits the spline through the knots, e.g. to evaluate between samples.
    pub fn spline(&self) -> CurveResult<CubicSpline> {
        Ok(CubicSpline::new(self.knots.maturities(), self.knots.rates())?)
    }
}

/// Splices swap or FRA quotes onto a base curve.
#[derive(Debug, Clone, Default)]
pub struct CurveSplicer {
    config: SpliceConfig,
}

impl CurveSplicer {
    /// Creates a splicer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the splice configuration.
    #[must_use]
    pub fn with_config(mut self, config: SpliceConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SpliceConfig {
        &self.config
    }

    /// Extends the base curve with swap rates.
    pub fn splice_with_swaps(
        &self,
        base_tenors: &[f64],
        base_rates: &[f64],
        swap_tenors: &[f64],
        swap_rates: &[f64],
    ) -> CurveResult<InterpolatedCurve> {
        let input = SpliceInput::from_columns(base_tenors, base_rates, swap_tenors, swap_rates)?;
        self.splice(&input, SpliceKind::Swap)
    }

    /// Extends the base curve with FRA rates.
    pub fn splice_with_fra(
        &self,
        base_tenors: &[f64],
        base_rates: &[f64],
        fra_tenors: &[f64],
        fra_rates: &[f64],
    ) -> CurveResult<InterpolatedCurve> {
        let input = SpliceInput::from_columns(base_tenors, base_rates, fra_tenors, fra_rates)?;
        self.splice(&input, SpliceKind::Fra)
    }

    /// Runs the merge and interpolate pipeline for either instrument kind.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidInput`] for mismatched columns, non-positive
    ///   tenors, an empty base curve (FRA only) or an FRA tenor not beyond
    ///   its anchor
    /// - [`CurveError::InsufficientPoints`] if fewer than two distinct tenors
    ///   remain after merging
    pub fn splice(&self, input: &SpliceInput, kind: SpliceKind) -> CurveResult<InterpolatedCurve> {
        input.validate()?;

        let incoming = match kind {
            SpliceKind::Swap => input.instrument_points(),
            SpliceKind::Fra => self.implied_fra_zeros(input)?,
        };

        let mut candidates = input.base_curve.clone();
        candidates.extend(incoming);
        let knots = merge_points(candidates)?;
        let samples = sample_spline(&knots, self.config.sample_points)?;

        log::debug!(
            "spliced {kind:?}: {} knots from {} to {}, {} samples",
            knots.len(),
            knots.points()[0].maturity,
            knots.points()[knots.len() - 1].maturity,
            samples.len()
        );
        Ok(InterpolatedCurve { knots, samples })
    }

    fn implied_fra_zeros(&self, input: &SpliceInput) -> CurveResult<Vec<RateCurvePoint>> {
        let base = average_duplicates(input.base_curve.clone());
        let Some(&anchor) = base.last() else {
            return Err(CurveError::invalid_input(
                "FRA splicing needs at least one base curve point to anchor on",
            ));
        };

        match self.config.fra_anchor {
            FraAnchor::LastBasePoint => input
                .instrument_points()
                .into_iter()
                .map(|fra| implied_zero_from_fra(anchor, fra.maturity, fra.rate))
                .collect(),
            FraAnchor::Chained => {
                let mut fras = input.instrument_points();
                fras.sort_by(|a, b| a.maturity.total_cmp(&b.maturity));
                let mut current = anchor;
                let mut implied = Vec::with_capacity(fras.len());
                for fra in fras {
                    current = implied_zero_from_fra(current, fra.maturity, fra.rate)?;
                    implied.push(current);
                }
                Ok(implied)
            }
        }
    }
}

/// Zero rate at `fra_tenor` implied by composing `anchor` with an FRA quote.
///
/// `r2 = ((1 + r1·T1)(1 + FRA·(T2 - T1)) - 1) / T2`
pub fn implied_zero_from_fra(
    anchor: RateCurvePoint,
    fra_tenor: f64,
    fra_rate: f64,
) -> CurveResult<RateCurvePoint> {
    let (t1, r1) = (anchor.maturity, anchor.rate);
    if fra_tenor <= t1 {
        return Err(CurveError::invalid_input(format!(
            "FRA tenor {fra_tenor} must be beyond its anchor tenor {t1}"
        )));
    }
    let growth = (1.0 + r1 * t1) * (1.0 + fra_rate * (fra_tenor - t1));
    Ok(RateCurvePoint::new(fra_tenor, (growth - 1.0) / fra_tenor))
}

/// Averages duplicate tenors, sorts, and requires at least two distinct points.
pub fn merge_points(points: Vec<RateCurvePoint>) -> CurveResult<RateCurve> {
    let merged = RateCurve::merged(points)?;
    if merged.len() < 2 {
        return Err(CurveError::insufficient_points(2, merged.len()));
    }
    Ok(merged)
}

fn sample_spline(knots: &RateCurve, sample_points: usize) -> CurveResult<Vec<RateCurvePoint>> {
    if !(2..=MAX_SAMPLE_POINTS).contains(&sample_points) {
        return Err(CurveError::invalid_input(format!(
            "sample_points must be between 2 and {MAX_SAMPLE_POINTS}, got {sample_points}"
        )));
    }
    let spline = CubicSpline::new(knots.maturities(), knots.rates())?;
    linspace(spline.min_x(), spline.max_x(), sample_points)
        .into_iter()
        .map(|t| Ok(RateCurvePoint::new(t, spline.interpolate(t)?)))
        .collect()
}
