//! Application route table.
//!
//! Declares which view each URL path shows and binds the table to a routing
//! runtime at bootstrap.
//!
//! ```text
//! GET /         → Home
//! GET /Counter  → Counter
//! ```

use crate::routing::{RouteEntry, Router, RouterError};
use crate::runtime::RoutingRuntime;
use crate::views;

/// The declared routes, in order.
pub fn routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/", "Home", views::home()),
        RouteEntry::new("/Counter", "Counter", views::counter()),
    ]
}

/// Install the routing capability into `runtime`.
pub fn install<R: RoutingRuntime + ?Sized>(runtime: &R) {
    runtime.install();
}

/// Build the application router from [`routes`].
pub fn build<R: RoutingRuntime + ?Sized>(runtime: &R) -> Result<Router, RouterError> {
    runtime.create_router(routes())
}

/// Install, then build. Call once at application startup.
pub fn bootstrap<R: RoutingRuntime + ?Sized>(runtime: &R) -> Result<Router, RouterError> {
    install(runtime);
    build(runtime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::HistoryRuntime;

    #[test]
    fn test_table_has_two_entries() {
        let router = bootstrap(&HistoryRuntime::new()).unwrap();
        assert_eq!(router.len(), 2);

        let home = &router.routes()[0];
        assert_eq!(home.path, "/");
        assert_eq!(home.name, "Home");
        assert_eq!(home.view, views::home());

        let counter = &router.routes()[1];
        assert_eq!(counter.path, "/Counter");
        assert_eq!(counter.name, "Counter");
        assert_eq!(counter.view, views::counter());
    }

    #[test]
    fn test_names_and_paths_unique() {
        let routes = routes();
        for (i, a) in routes.iter().enumerate() {
            for b in &routes[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_scenarios() {
        let router = bootstrap(&HistoryRuntime::new()).unwrap();
        assert_eq!(router.resolve("/").unwrap().view, views::home());
        assert_eq!(router.resolve("/Counter").unwrap().view, views::counter());
        assert!(router.resolve("/counter").is_none());
        assert!(router.resolve("/unknown").is_none());
    }

    #[test]
    fn test_build_without_install_fails() {
        assert!(matches!(
            build(&HistoryRuntime::new()),
            Err(RouterError::NotInstalled)
        ));
    }
}
