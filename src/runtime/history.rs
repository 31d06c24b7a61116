use std::sync::atomic::{AtomicBool, Ordering};

use crate::routing::{RouteEntry, Router, RouterError};
use crate::runtime::RoutingRuntime;

/// Default runtime: an install flag guarding `Router::from_routes`.
#[derive(Debug, Default)]
pub struct HistoryRuntime {
    installed: AtomicBool,
}

impl HistoryRuntime {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoutingRuntime for HistoryRuntime {
    fn install(&self) {
        if self.installed.swap(true, Ordering::AcqRel) {
            tracing::debug!("Routing runtime already installed");
        } else {
            tracing::info!(mode = "history", "Routing runtime installed");
        }
    }

    fn is_installed(&self) -> bool {
        self.installed.load(Ordering::Acquire)
    }

    fn create_router(&self, routes: Vec<RouteEntry>) -> Result<Router, RouterError> {
        if !self.is_installed() {
            return Err(RouterError::NotInstalled);
        }

        let router = Router::from_routes(routes)?;
        tracing::info!(routes = router.len(), "Router created");
        Ok(router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views;

    #[test]
    fn test_install_is_idempotent() {
        let runtime = HistoryRuntime::new();
        assert!(!runtime.is_installed());
        runtime.install();
        runtime.install();
        assert!(runtime.is_installed());
    }

    #[test]
    fn test_create_router_requires_install() {
        let runtime = HistoryRuntime::new();
        let err = runtime
            .create_router(vec![RouteEntry::new("/", "Home", views::home())])
            .unwrap_err();
        assert!(matches!(err, RouterError::NotInstalled));

        runtime.install();
        let router = runtime
            .create_router(vec![RouteEntry::new("/", "Home", views::home())])
            .unwrap();
        assert_eq!(router.len(), 1);
    }
}
