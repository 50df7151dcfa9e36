//! Tenor server entry point.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tenor_server::{run_server, AppState, ServerConfig};

/// Tenor curve and FRA analytics server.
#[derive(Debug, Parser)]
#[command(name = "tenor-server", version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "TENOR_CONFIG")]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config and TENOR_HOST)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on (overrides config and TENOR_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory for exported curve files
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Verbose request and solver logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tenor=debug"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Tenor Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ServerConfig::from_file(path)?
        }
        None => {
            info!("Using default configuration");
            ServerConfig::default()
        }
    };
    let mut config = config.with_env_overrides()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(dir) = args.export_dir {
        config.export_dir = dir;
    }

    run_server(AppState::new(config)).await
}
