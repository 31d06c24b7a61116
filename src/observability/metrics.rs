//! Metrics collection and exposition.
//!
//! # Metrics
//! - `spa_requests_total` (counter): shell and API requests by route, status
//!   (API hits use `api_routes` / `api_resolve` as the route label)
//! - `spa_request_duration_seconds` (histogram): time to resolve and render
//! - `spa_navigations_total` (counter): history transitions by kind, route

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the global recorder and start the scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Record a served request. `route` is `"none"` for unmatched shell paths.
pub fn record_request(route: &str, status: u16, start: Instant) {
    counter!(
        "spa_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("spa_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_navigation(kind: &'static str, route: Option<&str>) {
    counter!(
        "spa_navigations_total",
        "kind" => kind,
        "route" => route.unwrap_or("none").to_string()
    )
    .increment(1);
}
