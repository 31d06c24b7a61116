//! JSON inspection API.
//!
//! - `GET /api/routes`: the declared table, in order
//! - `GET /api/resolve?path=/Counter`: the route a location resolves to

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::http::response::ApiResponse;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::RouteEntry;

#[derive(Debug, Serialize)]
pub struct RoutesResult {
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Serialize)]
pub struct ResolveResult {
    pub route: RouteEntry,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: Option<String>,
}

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/routes", get(list_routes))
        .route("/api/resolve", get(resolve_route))
}

pub async fn list_routes(State(state): State<AppState>) -> ApiResponse<RoutesResult> {
    let start = Instant::now();
    metrics::record_request("api_routes", 200, start);
    ApiResponse::ok(RoutesResult {
        routes: state.router.routes().to_vec(),
    })
}

pub async fn resolve_route(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> ApiResponse<ResolveResult> {
    let start = Instant::now();
    let Some(path) = query.path else {
        metrics::record_request("api_resolve", 400, start);
        return ApiResponse::error(StatusCode::BAD_REQUEST, "missing `path` query parameter");
    };

    match state.router.resolve_location(&path) {
        Some(entry) => {
            metrics::record_request("api_resolve", 200, start);
            ApiResponse::ok(ResolveResult {
                route: entry.clone(),
            })
        }
        None => {
            metrics::record_request("api_resolve", 404, start);
            ApiResponse::error(
                StatusCode::NOT_FOUND,
                format!("No route matches `{}`", path),
            )
        }
    }
}
