//! Tenor CLI - zero-curve construction and FRA analytics from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Bootstrap zero rates from bond prices
//! tenor bootstrap --prices 97.5,94.9,90.0 --maturities 0.25,0.5,1.0
//!
//! # Extend a base curve with swap rates and export it
//! tenor splice swap --base-tenors 1 --base-rates 0.02 --tenors 2,3 --rates 0.025,0.03 --export ./output
//!
//! # Forward rates from a spot curve
//! tenor forward --spot-rates 0.02,0.025 --maturities 1,2
//!
//! # FRA break-even rate
//! tenor fra break-even --forward-rates 0.02,0.025,0.03 --interval 0.5
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Convert(args) => commands::rates::execute_convert(args, ctx),
        Commands::BondPrice(args) => commands::rates::execute_bond_price(args, ctx),
        Commands::Bootstrap(args) => commands::curves::execute_bootstrap(args, ctx),
        Commands::Splice(args) => commands::curves::execute_splice(args, ctx),
        Commands::Forward(args) => commands::curves::execute_forward(args, ctx),
        Commands::Fra(args) => commands::fra::execute(args, ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool) {
    let default = if verbose { "info,tenor=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
