//! FRA commands: payoff, valuation and break-even rate.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use tenor_analytics::fra::FraPosition;
use tenor_analytics::tools::{
    self, BreakEvenRequest, FraPayoffRequest, FraValuationRequest, ToolOutput,
};

use crate::commands::{finish, Context};
use crate::error::CliError;

/// Arguments for the fra command.
#[derive(Args, Debug)]
pub struct FraArgs {
    #[command(subcommand)]
    pub command: FraCommand,
}

/// FRA subcommands.
#[derive(Subcommand, Debug)]
pub enum FraCommand {
    /// Total payoff against realized settlement rates
    Payoff(PayoffArgs),

    /// Forward-implied value of the strip
    Valuation(ValuationArgs),

    /// Fixed rate at which the strip is worth zero
    BreakEven(BreakEvenArgs),
}

/// Arguments for FRA payoff.
#[derive(Args, Debug)]
pub struct PayoffArgs {
    /// Fixed contract rate as a decimal
    #[arg(short, long, allow_negative_numbers = true)]
    pub contract_rate: f64,

    /// Settlement rates (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub settlement_rates: Vec<f64>,

    /// Notional principal
    #[arg(short, long, default_value = "1000000")]
    pub notional: f64,

    /// Accrual interval in years
    #[arg(short, long)]
    pub interval: f64,
}

/// Arguments for FRA valuation.
#[derive(Args, Debug)]
pub struct ValuationArgs {
    /// Fixed contract rate as a decimal
    #[arg(short, long, allow_negative_numbers = true)]
    pub contract_rate: f64,

    /// Forward rates (comma-separated)
    #[arg(short = 'r', long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub forward_rates: Vec<f64>,

    /// Notional principal
    #[arg(short, long, default_value = "1000000")]
    pub notional: f64,

    /// Accrual interval in years
    #[arg(short, long)]
    pub interval: f64,

    /// Side of the contract
    #[arg(long, value_enum, default_value = "buyer")]
    pub position: PositionChoice,
}

/// Arguments for FRA break-even rate.
#[derive(Args, Debug)]
pub struct BreakEvenArgs {
    /// Forward rates (comma-separated)
    #[arg(short = 'r', long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
    pub forward_rates: Vec<f64>,

    /// Accrual interval in years
    #[arg(short, long)]
    pub interval: f64,
}

/// Position choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum PositionChoice {
    /// Pays fixed, receives floating
    #[default]
    Buyer,
    /// Receives fixed, pays floating
    Seller,
}

impl From<PositionChoice> for FraPosition {
    fn from(choice: PositionChoice) -> Self {
        match choice {
            PositionChoice::Buyer => FraPosition::Buyer,
            PositionChoice::Seller => FraPosition::Seller,
        }
    }
}

/// Execute the fra command.
pub fn execute(args: FraArgs, ctx: Context) -> Result<()> {
    let (title, result) = match args.command {
        FraCommand::Payoff(a) => (
            "FRA Payoff",
            tools::fra_payoff(&FraPayoffRequest {
                contract_rate: a.contract_rate,
                settlement_rates: a.settlement_rates,
                notional_value: a.notional,
                interval: a.interval,
            }),
        ),
        FraCommand::Valuation(a) => (
            "FRA Valuation",
            tools::fra_valuation(&FraValuationRequest {
                contract_rate: a.contract_rate,
                forward_rates: a.forward_rates,
                notional_value: a.notional,
                interval: a.interval,
                position: a.position.into(),
            }),
        ),
        FraCommand::BreakEven(a) => (
            "FRA Break-Even Rate",
            tools::fra_break_even_rate(&BreakEvenRequest {
                forward_rates: a.forward_rates,
                interval: a.interval,
            }),
        ),
    };

    let output = ToolOutput {
        result: result.map_err(CliError::from)?,
        curve: None,
    };
    finish(title, &output, None, ctx)
}
