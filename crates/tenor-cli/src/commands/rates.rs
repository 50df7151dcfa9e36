//! Rate conversion and bond pricing commands.

use anyhow::Result;
use clap::{Args, ValueEnum};
use tenor_analytics::tools::{
    self, BondPricingRequest, ContinuousRateRequest, NominalRateRequest, ToolOutput,
};

use crate::commands::{finish, Context};
use crate::error::CliError;

/// Arguments for the convert command.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Rate to convert, as a decimal (e.g., 0.05)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Compounding frequency per year (m)
    #[arg(short = 'm', long)]
    pub frequency: u32,

    /// Convention to convert into
    #[arg(long, value_enum, default_value = "continuous")]
    pub to: ConvertTarget,
}

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ConvertTarget {
    /// From m-compounded to continuous
    #[default]
    Continuous,
    /// From continuous to m-compounded
    Nominal,
}

/// Arguments for the bond-price command.
#[derive(Args, Debug)]
pub struct BondPriceArgs {
    /// Face value
    #[arg(long, default_value = "100")]
    pub face_value: f64,

    /// Annual coupon rate in percent (e.g., 5.0)
    #[arg(short, long)]
    pub coupon_rate: f64,

    /// Maturity in years
    #[arg(short, long)]
    pub maturity: f64,

    /// Market rate in percent (e.g., 4.5)
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    pub market_rate: f64,
}

/// Execute the convert command.
pub fn execute_convert(args: ConvertArgs, ctx: Context) -> Result<()> {
    let result = match args.to {
        ConvertTarget::Continuous => tools::continuous_compounding_rate(&ContinuousRateRequest {
            rate_m: args.rate,
            frequency_m: args.frequency,
        }),
        ConvertTarget::Nominal => tools::m_compounding_rate(&NominalRateRequest {
            rate_c: args.rate,
            frequency_m: args.frequency,
        }),
    }
    .map_err(CliError::from)?;

    let output = ToolOutput { result, curve: None };
    finish("Rate Conversion", &output, None, ctx)
}

/// Execute the bond-price command.
pub fn execute_bond_price(args: BondPriceArgs, ctx: Context) -> Result<()> {
    let result = tools::bond_pricing(&BondPricingRequest {
        face_value: args.face_value,
        coupon_rate: args.coupon_rate,
        maturity: args.maturity,
        market_rate: args.market_rate,
    })
    .map_err(CliError::from)?;

    let output = ToolOutput { result, curve: None };
    finish("Bond Price", &output, None, ctx)
}
