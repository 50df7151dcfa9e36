//! Curve construction commands: bootstrap, splice and forward.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use tenor_analytics::tools::{
    self, CurveExtensionRequest, ForwardCurveRequest, ZeroRatesRequest,
};
use tenor_curves::prelude::{CouponDiscounting, FraAnchor, ForwardConvention};
use tenor_curves::splice::DEFAULT_SAMPLE_POINTS;

use crate::commands::{finish, Context};
use crate::error::{CliError, CliResult};

/// Arguments for the bootstrap command.
#[derive(Args, Debug)]
pub struct BootstrapArgs {
    /// Bond prices (comma-separated, e.g., "97.5,94.9,101.6")
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub prices: Vec<f64>,

    /// Maturities in years (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub maturities: Vec<f64>,

    /// Face values (comma-separated). Defaults to 100 for every bond.
    #[arg(long, value_delimiter = ',')]
    pub face_values: Option<Vec<f64>>,

    /// Annual coupon rates as decimals (comma-separated). Defaults to zero-coupon.
    #[arg(short, long, value_delimiter = ',')]
    pub coupon_rates: Option<Vec<f64>>,

    /// Coupon payments per year (comma-separated). Defaults to 2.
    #[arg(long, value_delimiter = ',')]
    pub frequencies: Option<Vec<u32>>,

    /// Discount coupons falling between solved maturities off the
    /// interpolated curve instead of omitting them
    #[arg(long)]
    pub interpolate_coupons: bool,

    /// Write the curve as CSV and XLSX into this directory
    #[arg(long, env = "TENOR_EXPORT_DIR")]
    pub export: Option<PathBuf>,
}

/// Arguments for the splice command.
#[derive(Args, Debug)]
pub struct SpliceArgs {
    #[command(subcommand)]
    pub command: SpliceCommand,
}

/// Splice subcommands.
#[derive(Subcommand, Debug)]
pub enum SpliceCommand {
    /// Extend the base curve with swap rates
    Swap(SpliceCurveArgs),

    /// Extend the base curve with FRA rates
    Fra(FraSpliceArgs),
}

/// Base curve and instrument quotes.
#[derive(Args, Debug)]
pub struct SpliceCurveArgs {
    /// Base curve tenors (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub base_tenors: Vec<f64>,

    /// Base curve rates (comma-separated)
    #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub base_rates: Vec<f64>,

    /// Instrument tenors (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub tenors: Vec<f64>,

    /// Instrument rates (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub rates: Vec<f64>,

    /// Number of evenly spaced spline samples
    #[arg(long, default_value_t = DEFAULT_SAMPLE_POINTS)]
    pub samples: usize,

    /// Write the curve as CSV and XLSX into this directory
    #[arg(long, env = "TENOR_EXPORT_DIR")]
    pub export: Option<PathBuf>,
}

/// FRA splice arguments.
#[derive(Args, Debug)]
pub struct FraSpliceArgs {
    #[command(flatten)]
    pub curve: SpliceCurveArgs,

    /// Anchor each FRA on the previously implied point instead of the
    /// last base point
    #[arg(long)]
    pub chained: bool,
}

/// Arguments for the forward command.
#[derive(Args, Debug)]
pub struct ForwardArgs {
    /// Spot rates (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub spot_rates: Vec<f64>,

    /// Maturities in years, strictly increasing (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub maturities: Vec<f64>,

    /// Treat spot rates as continuously compounded
    #[arg(long)]
    pub continuous: bool,

    /// Write the curve as CSV and XLSX into this directory
    #[arg(long, env = "TENOR_EXPORT_DIR")]
    pub export: Option<PathBuf>,
}

/// Execute the bootstrap command.
pub fn execute_bootstrap(args: BootstrapArgs, ctx: Context) -> Result<()> {
    let n = args.prices.len();
    let request = ZeroRatesRequest {
        face_values: column_or("face-values", args.face_values, n, 100.0)?,
        coupon_rates: column_or("coupon-rates", args.coupon_rates, n, 0.0)?,
        compounding_frequencies: column_or("frequencies", args.frequencies, n, 2)?,
        bond_prices: args.prices,
        maturities: args.maturities,
        coupon_discounting: if args.interpolate_coupons {
            CouponDiscounting::InterpolateSolved
        } else {
            CouponDiscounting::OmitUnmatched
        },
    };
    tracing::debug!("bootstrapping {n} bonds");

    let output = tools::determining_zero_rates(&request).map_err(CliError::from)?;
    finish("Bootstrapped Zero Curve", &output, args.export.as_deref(), ctx)
}

/// Execute the splice command.
pub fn execute_splice(args: SpliceArgs, ctx: Context) -> Result<()> {
    let (curve, anchor, is_fra) = match args.command {
        SpliceCommand::Swap(curve) => (curve, FraAnchor::default(), false),
        SpliceCommand::Fra(fra) => {
            let anchor = if fra.chained {
                FraAnchor::Chained
            } else {
                FraAnchor::LastBasePoint
            };
            (fra.curve, anchor, true)
        }
    };

    let request = CurveExtensionRequest {
        base_tenors: curve.base_tenors,
        base_rates: curve.base_rates,
        instrument_tenors: curve.tenors,
        instrument_rates: curve.rates,
        sample_points: Some(curve.samples),
        fra_anchor: anchor,
    };

    let (title, output) = if is_fra {
        ("Zero Curve Extended with FRA Rates", tools::extend_with_fra_rates(&request))
    } else {
        ("Zero Curve Extended with Swap Rates", tools::extend_with_swap_rates(&request))
    };
    let output = output.map_err(CliError::from)?;
    finish(title, &output, curve.export.as_deref(), ctx)
}

/// Execute the forward command.
pub fn execute_forward(args: ForwardArgs, ctx: Context) -> Result<()> {
    let request = ForwardCurveRequest {
        spot_rates: args.spot_rates,
        maturities: args.maturities,
        convention: if args.continuous {
            ForwardConvention::Continuous
        } else {
            ForwardConvention::Discrete
        },
    };

    let output = tools::forward_rate_curve(&request).map_err(CliError::from)?;
    finish("Forward Rates", &output, args.export.as_deref(), ctx)
}

/// Uses the given column or repeats `fill` for every bond.
fn column_or<T: Copy>(name: &str, column: Option<Vec<T>>, n: usize, fill: T) -> CliResult<Vec<T>> {
    match column {
        Some(values) if values.len() != n => Err(CliError::InvalidArgument(format!(
            "--{name} has {} values but --prices has {n}",
            values.len()
        ))),
        Some(values) => Ok(values),
        None => Ok(vec![fill; n]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_or_fills_default() {
        assert_eq!(column_or("face-values", None, 3, 100.0).unwrap(), vec![100.0; 3]);
    }

    #[test]
    fn test_column_or_rejects_length_mismatch() {
        let err = column_or("frequencies", Some(vec![2u32]), 2, 2).unwrap_err();
        assert!(err.to_string().contains("--frequencies has 1 values"));
    }
}
