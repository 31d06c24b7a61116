//! History-mode host for the application route table.
//!
//! Serves `/` (Home) and `/Counter` (Counter) as the rendered application
//! shell, answers everything else with the not-found shell, and exposes the
//! table under `/api`.

use std::path::PathBuf;

use clap::Parser;

use spa_router::lifecycle::{self, signals, Shutdown};
use spa_router::HttpServer;

#[derive(Parser)]
#[command(name = "spa-router")]
#[command(about = "Serve the application's client-side routes", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let started = lifecycle::start(args.config.as_deref()).await?;

    tracing::info!("spa-router v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_ctrl_c(shutdown.clone()));

    let server = HttpServer::new(started.config, started.router);
    server.run(started.listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
