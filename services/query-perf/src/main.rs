//! Query performance dashboard CLI
//!
//! Command-line interface for serving scheduled query performance pills.

use std::path::PathBuf;

use clap::Parser;
use query_perf::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "query-perf")]
#[command(about = "Dashboard serving scheduled query performance impact pills")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dashboard port (overrides config file)
    #[arg(long)]
    dashboard_port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, dashboard_port={:?}, log_level={:?}",
        args.config,
        args.dashboard_port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(dashboard_port) = args.dashboard_port {
        config.dashboard.port = dashboard_port;
    }

    tracing::debug!(
        "Pill options: id_prefix={:?}, host_details={}",
        config.dashboard.id_prefix,
        config.dashboard.host_details
    );
    for query in &config.queries {
        tracing::debug!(
            "Scheduled query {:?} (id={:?}): {}",
            query.name,
            query.id,
            query.performance
        );
    }

    tracing::info!(
        "Starting query performance dashboard with {} scheduled queries",
        config.queries.len()
    );

    query_perf::run(config).await?;

    Ok(())
}
