//! Market Data Gateway
//!
//! A small HTTP gateway in front of the Coinbase public market API, built
//! with Tokio, Axum and reqwest.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌──────────────────────────────────────────┐
//!     ────────────────────────┼─▶ http::server ─▶ http::handlers         │
//!                             │                       │                  │
//!                             │                       ▼                  │
//!                             │               upstream::client ─────────┼──▶ Coinbase
//!                             │                       │   (deadline)     │    market API
//!     Client Response         │                       ▼                  │
//!     ◀───────────────────────┼── http::error ◀── UpstreamError / JSON   │
//!                             │                                          │
//!                             │  config · observability · lifecycle      │
//!                             └──────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use market_gateway::config::load_or_default;
use market_gateway::lifecycle::Shutdown;
use market_gateway::observability::{logging, metrics};
use market_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "market-gateway")]
#[command(about = "HTTP gateway for Coinbase public market data", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!("market-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        candles_timeout_secs = config.upstream.candles_timeout_secs,
        ticker_timeout_secs = config.upstream.ticker_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validated at load time.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();
    let server_task = tokio::spawn(server.run(listener, server_shutdown));

    shutdown.trigger_on_signal().await;
    server_task.await??;

    tracing::info!(drained = shutdown.is_drained(), "Shutdown complete");
    Ok(())
}
