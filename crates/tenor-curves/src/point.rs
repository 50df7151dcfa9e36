//! Rate curve data model.

use serde::{Deserialize, Serialize};
use tenor_core::validate;

use crate::error::{CurveError, CurveResult};

/// A single `(maturity, rate)` pillar.
///
/// Maturities are in years; rates are continuously compounded annual
/// decimals unless a builder documents otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCurvePoint {
    /// Maturity in years.
    pub maturity: f64,
    /// Annual rate as a decimal.
    pub rate: f64,
}

impl RateCurvePoint {
    /// Creates a point.
    #[must_use]
    pub fn new(maturity: f64, rate: f64) -> Self {
        Self { maturity, rate }
    }
}

impl From<(f64, f64)> for RateCurvePoint {
    fn from((maturity, rate): (f64, f64)) -> Self {
        Self::new(maturity, rate)
    }
}

/// An ordered rate curve: sorted ascending by maturity, unique by maturity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateCurve {
    points: Vec<RateCurvePoint>,
}

impl RateCurve {
    /// Builds a curve from parallel maturity and rate columns.
    ///
    /// Points sharing a maturity are replaced by one point at the mean rate.
    pub fn from_columns(maturities: &[f64], rates: &[f64]) -> CurveResult<Self> {
        validate::same_len("maturities", maturities, "rates", rates)?;
        let points = maturities
            .iter()
            .zip(rates)
            .map(|(&m, &r)| RateCurvePoint::new(m, r))
            .collect();
        Self::merged(points)
    }

    /// Sorts `points` by maturity and averages the rates of any exact duplicates.
    pub fn merged(points: Vec<RateCurvePoint>) -> CurveResult<Self> {
        for (i, p) in points.iter().enumerate() {
            validate::positive(&format!("maturity[{i}]"), p.maturity)?;
            validate::finite(&format!("rate[{i}]"), p.rate)?;
        }
        Ok(Self {
            points: average_duplicates(points),
        })
    }

    /// Wraps points that are already strictly increasing in maturity.
    pub fn from_sorted(points: Vec<RateCurvePoint>) -> CurveResult<Self> {
        ensure_increasing(points.iter().map(|p| p.maturity))?;
        Ok(Self { points })
    }

    /// The points in ascending maturity order.
    pub fn points(&self) -> &[RateCurvePoint] {
        &self.points
    }

    /// Maturity column.
    pub fn maturities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.maturity).collect()
    }

    /// Rate column.
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate).collect()
    }

    /// Rate stored at exactly `maturity`, if any.
    pub fn rate_at(&self, maturity: f64) -> Option<f64> {
        self.points
            .binary_search_by(|p| p.maturity.total_cmp(&maturity))
            .ok()
            .map(|i| self.points[i].rate)
    }

    /// The longest-maturity point.
    pub fn last(&self) -> Option<&RateCurvePoint> {
        self.points.last()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the curve, returning its points.
    pub fn into_points(self) -> Vec<RateCurvePoint> {
        self.points
    }
}

/// Groups points by exact maturity, averages each group's rates and returns
/// the groups sorted ascending by maturity.
pub(crate) fn average_duplicates(mut points: Vec<RateCurvePoint>) -> Vec<RateCurvePoint> {
    points.sort_by(|a, b| a.maturity.total_cmp(&b.maturity));

    let mut merged: Vec<RateCurvePoint> = Vec::with_capacity(points.len());
    let mut group_len = 0usize;
    let mut group_sum = 0.0;
    for p in points {
        match merged.last_mut() {
            Some(last) if last.maturity == p.maturity => {
                group_len += 1;
                group_sum += p.rate;
                last.rate = group_sum / group_len as f64;
            }
            _ => {
                group_len = 1;
                group_sum = p.rate;
                merged.push(p);
            }
        }
    }
    merged
}

/// Fails with [`CurveError::NonMonotonicTenors`] at the first maturity that
/// does not exceed its predecessor.
pub(crate) fn ensure_increasing(maturities: impl IntoIterator<Item = f64>) -> CurveResult<()> {
    let mut prev: Option<f64> = None;
    for (index, current) in maturities.into_iter().enumerate() {
        if let Some(prev) = prev {
            if current <= prev {
                return Err(CurveError::NonMonotonicTenors {
                    index,
                    prev,
                    current,
                });
            }
        }
        prev = Some(current);
    }
    Ok(())
}
