//! Shared utilities for integration tests.

use std::sync::Arc;

use spa_router::{app, AppConfig, HistoryRuntime, HttpServer, Router};

/// The application router, built the way `main` builds it.
pub fn app_router() -> Arc<Router> {
    Arc::new(app::bootstrap(&HistoryRuntime::new()).unwrap())
}

/// An in-process Axum router for the host with `config`.
#[allow(dead_code)]
pub fn host(config: AppConfig) -> axum::Router {
    HttpServer::new(config, app_router()).into_router()
}
