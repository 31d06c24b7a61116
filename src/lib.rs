//! Client-side route table for a two-page single-page application.
//!
//! ```text
//! app (route table) ──▶ runtime (install, create_router) ──▶ routing::Router
//!                                                               │
//!                          routing::History ◀──────────────────┤
//!                          http (history-mode host, JSON API) ◀─┘
//! ```

pub mod app;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod runtime;
pub mod views;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RouteEntry, Router};
pub use runtime::{HistoryRuntime, RoutingRuntime};
