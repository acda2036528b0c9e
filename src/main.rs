//! spa-bridge: serve single-page front-ends from a server-rendered host.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────────┐
//!                      │                      SPA BRIDGE                       │
//!                      │                                                       │
//!   Browser request    │  ┌────────┐    ┌────────────┐    ┌────────────────┐   │
//!   ───────────────────┼─▶│  http  │───▶│ dispatcher │───▶│ static files   │───┼──▶ build/static
//!                      │  │ server │    │            │    └────────────────┘   │
//!                      │  └────────┘    │   miss     │    ┌────────────────┐   │
//!                      │                │  ───────▶  │───▶│ routing        │───┼──▶ 302 dev server
//!                      │                │            │    │ (Referer)      │   │
//!                      │                └─────┬──────┘    └────────────────┘   │
//!                      │                      │ page path                      │
//!                      │                      ▼                                 │
//!                      │               ┌─────────────┐   live?  ┌──────────┐    │
//!                      │               │ shell loader│────────▶│  health  │    │
//!                      │               └─────────────┘          └──────────┘    │
//!                      │                                                       │
//!                      │   config → registry → liveness   (once, at startup)   │
//!                      └──────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use spa_bridge::config::load_config;
use spa_bridge::lifecycle::{initialize, Shutdown};
use spa_bridge::observability::{logging, metrics};
use spa_bridge::HttpServer;

#[derive(Parser)]
#[command(name = "spa-bridge")]
#[command(about = "Serve single-page front-ends with dev-server fallback", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "spa-bridge.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        "spa-bridge starting"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let runtime = initialize(config).await?;

    let listener = TcpListener::bind(&runtime.config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        debug = runtime.registry.mode().is_development(),
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(runtime);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
