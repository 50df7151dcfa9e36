//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    BondPriceArgs, BootstrapArgs, ConvertArgs, ForwardArgs, FraArgs, SpliceArgs,
};

/// Tenor - zero-curve construction and FRA analytics
#[derive(Parser)]
#[command(name = "tenor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log calculation steps to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Convert between m-compounded and continuously compounded rates
    Convert(ConvertArgs),

    /// Price a bond at a flat market rate
    BondPrice(BondPriceArgs),

    /// Bootstrap zero rates from bond prices
    Bootstrap(BootstrapArgs),

    /// Extend a base curve with swap or FRA rates
    Splice(SpliceArgs),

    /// Build forward rates from a spot curve
    Forward(ForwardArgs),

    /// FRA payoff, valuation and break-even rate
    Fra(FraArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (values only)
    Minimal,
}
