//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router: history-mode view handler plus the JSON API
//! - Wire up middleware (request ID, tracing, timeout, cache headers)
//! - Resolve every request path through the application `Router`
//! - Serve until the shutdown signal fires

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{AppConfig, ShellConfig};
use crate::http::api::api_router;
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::http::response::render_shell;
use crate::observability::metrics;
use crate::routing::Router as AppRouter;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<AppRouter>,
    pub shell: Arc<ShellConfig>,
}

/// History-mode HTTP host for the application.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    pub fn new(config: AppConfig, routes: Arc<AppRouter>) -> Self {
        let state = AppState {
            router: routes,
            shell: Arc::new(config.shell.clone()),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(view_handler))
            .route("/{*path}", get(view_handler))
            .merge(api_router())
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache"),
            ))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        path = %req.uri().path(),
                        request_id = %request_id(req.headers()),
                    )
                }),
            )
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The Axum router, for embedding or in-process tests.
    pub fn into_router(self) -> Router {
        self.router
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve the request path and render the shell around the matched view.
/// Unmatched paths get the not-found shell with a 404.
async fn view_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let start = Instant::now();
    let path = uri.path();

    match state.router.resolve(path) {
        Some(entry) => {
            tracing::debug!(path = %path, route = %entry.name, "Route matched");
            metrics::record_request(&entry.name, 200, start);
            Html(render_shell(&state.shell, Some(entry))).into_response()
        }
        None => {
            tracing::warn!(path = %path, "No route matched");
            metrics::record_request("none", 404, start);
            (StatusCode::NOT_FOUND, Html(render_shell(&state.shell, None))).into_response()
        }
    }
}
