//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and metrics
//! - Install the routing runtime and build the router
//! - Bind the listener
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::app;
use crate::config::{loader::load_or_default, AppConfig, ConfigError};
use crate::observability::{logging, metrics};
use crate::routing::{Router, RouterError};
use crate::runtime::HistoryRuntime;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("router: {0}")]
    Router(#[from] RouterError),

    #[error("metrics: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Everything `main` needs to serve.
pub struct Started {
    pub config: AppConfig,
    pub router: Arc<Router>,
    pub listener: TcpListener,
}

/// Bring the process up in dependency order.
pub async fn start(config_path: Option<&Path>) -> Result<Started, StartupError> {
    let config = load_or_default(config_path)?;

    if let Err(e) = logging::init_logging(&config.logging) {
        // A subscriber is already set (embedding or tests); keep it.
        tracing::debug!(error = %e, "Logging already initialised");
    }

    tracing::info!(
        config = ?config_path,
        bind_address = %config.server.bind_address,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    if config.metrics.enabled {
        // Validated during load.
        if let Ok(addr) = config.metrics.address.parse::<SocketAddr>() {
            metrics::init_metrics(addr)?;
        }
    }

    let runtime = HistoryRuntime::new();
    let router = Arc::new(app::bootstrap(&runtime)?);
    for entry in router.routes() {
        tracing::info!(path = %entry.path, name = %entry.name, view = entry.view.name(), "Route registered");
    }

    let listener = TcpListener::bind(&config.server.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.server.bind_address.clone(),
            source,
        })?;

    Ok(Started {
        config,
        router,
        listener,
    })
}
