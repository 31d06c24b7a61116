//! Routing runtime seam.
//!
//! # Data Flow
//! ```text
//! bootstrap
//!     → RoutingRuntime::install (once per runtime, idempotent)
//!     → RoutingRuntime::create_router(routes)
//!     → Router (immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - The route table only talks to this trait, so it can be checked against a stub
//! - Installation is explicit, never a side effect of constructing a table
//! - `create_router` refuses to run on an uninstalled runtime

mod history;

pub use history::HistoryRuntime;

use crate::routing::{RouteEntry, Router, RouterError};

/// Capability installed into the view runtime that turns a route list into a `Router`.
pub trait RoutingRuntime {
    /// Install the routing capability. Calling it again has no effect.
    fn install(&self);

    fn is_installed(&self) -> bool;

    /// Build a router bound to `routes`.
    fn create_router(&self, routes: Vec<RouteEntry>) -> Result<Router, RouterError>;
}
