//! Route lookup.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Look up the route for a path or a name
//! - Return the matched entry or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc` without locks)
//! - O(n) scan; the table has a handful of entries
//! - Explicit `None` rather than a silent default route

use thiserror::Error;

use crate::routing::matcher::{location_path, ExactPathMatcher, Matcher};
use crate::routing::table::{RouteEntry, RouteTable, RouteTableError};

/// Errors raised while creating a router.
#[derive(Debug, Error)]
pub enum RouterError {
    /// `create_router` was called before the runtime was installed.
    #[error("routing runtime is not installed; call install() before building a router")]
    NotInstalled,

    #[error("invalid route table: {0}")]
    InvalidTable(#[from] RouteTableError),
}

/// A compiled, immutable route table.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    matchers: Vec<ExactPathMatcher>,
}

impl Router {
    /// Compile matchers for a validated table.
    pub fn new(table: RouteTable) -> Self {
        let matchers = table
            .iter()
            .map(|entry| ExactPathMatcher::new(entry.path.clone()))
            .collect();
        Self { table, matchers }
    }

    /// Validate `routes` and compile them.
    pub fn from_routes(routes: Vec<RouteEntry>) -> Result<Self, RouterError> {
        Ok(Self::new(RouteTable::new(routes)?))
    }

    /// Find the entry whose path is exactly `path`.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.matchers
            .iter()
            .position(|m| m.matches(path))
            .map(|i| &self.table.entries()[i])
    }

    /// Resolve a full location, ignoring its query string and fragment.
    pub fn resolve_location(&self, location: &str) -> Option<&RouteEntry> {
        self.resolve(location_path(location))
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.table.iter().find(|e| e.name == name)
    }

    /// Path registered under `name`, for named navigation.
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.by_name(name).map(|e| e.path.as_str())
    }

    pub fn routes(&self) -> &[RouteEntry] {
        self.table.entries()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views;

    fn router() -> Router {
        Router::from_routes(vec![
            RouteEntry::new("/", "Home", views::home()),
            RouteEntry::new("/Counter", "Counter", views::counter()),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve() {
        let router = router();
        assert_eq!(router.resolve("/").map(|e| e.view), Some(views::home()));
        assert_eq!(router.resolve("/Counter").map(|e| e.view), Some(views::counter()));
        assert!(router.resolve("/unknown").is_none());
        assert!(router.resolve("/counter").is_none());
    }

    #[test]
    fn test_resolve_location_ignores_query_and_fragment() {
        let router = router();
        assert_eq!(router.resolve_location("/Counter?x=1").unwrap().name, "Counter");
        assert_eq!(router.resolve_location("/#intro").unwrap().name, "Home");
    }

    #[test]
    fn test_lookup_by_name() {
        let router = router();
        assert_eq!(router.path_for("Counter"), Some("/Counter"));
        assert_eq!(router.path_for("Home"), Some("/"));
        assert_eq!(router.path_for("counter"), None);
    }

    #[test]
    fn test_invalid_table_is_rejected() {
        let err = Router::from_routes(vec![
            RouteEntry::new("/", "Home", views::home()),
            RouteEntry::new("/", "Counter", views::counter()),
        ])
        .unwrap_err();
        assert!(matches!(err, RouterError::InvalidTable(RouteTableError::DuplicatePath { .. })));
    }
}
