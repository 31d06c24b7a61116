//! In-memory navigation history.
//!
//! # Responsibilities
//! - Keep a stack of visited locations with a cursor
//! - Resolve the active location through the shared `Router`
//! - Broadcast a `NavigationEvent` for every transition
//!
//! # Design Decisions
//! - Single owner (`&mut self`); only the router is shared
//! - Unmatched locations are valid history entries (the host decides the fallback)
//! - Pushing the current location again is rejected, not silently merged
//! - Moving past either end of the stack is a no-op without an event

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::observability::metrics;
use crate::routing::router::Router;
use crate::routing::table::RouteEntry;

const EVENT_CAPACITY: usize = 64;

/// How the active location changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationKind {
    Push,
    Replace,
    Back,
    Forward,
}

impl NavigationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationKind::Push => "push",
            NavigationKind::Replace => "replace",
            NavigationKind::Back => "back",
            NavigationKind::Forward => "forward",
        }
    }
}

/// Emitted after the active location changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEvent {
    pub kind: NavigationKind,
    pub from: Option<String>,
    pub to: String,
    /// Name of the matched route, if any.
    pub route: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("location `{0}` is not absolute")]
    NotAbsolute(String),

    #[error("already at `{0}`")]
    Duplicated(String),

    #[error("no route named `{0}`")]
    UnknownName(String),
}

/// Browser-style history driving a `Router`.
pub struct History {
    router: Arc<Router>,
    entries: Vec<String>,
    index: usize,
    events: broadcast::Sender<NavigationEvent>,
}

impl History {
    /// Start a history whose only entry is `initial`.
    pub fn new(router: Arc<Router>, initial: impl Into<String>) -> Result<Self, NavigationError> {
        let initial = initial.into();
        ensure_absolute(&initial)?;
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Ok(Self {
            router,
            entries: vec![initial],
            index: 0,
            events,
        })
    }

    /// Subscribe to navigation events.
    pub fn subscribe(&self) -> broadcast::Receiver<NavigationEvent> {
        self.events.subscribe()
    }

    pub fn current_location(&self) -> &str {
        &self.entries[self.index]
    }

    /// Route matched by the current location.
    pub fn current_route(&self) -> Option<&RouteEntry> {
        self.router.resolve_location(self.current_location())
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Navigate to `location`, dropping any forward entries.
    pub fn push(&mut self, location: impl Into<String>) -> Result<Option<&RouteEntry>, NavigationError> {
        let location = location.into();
        ensure_absolute(&location)?;
        if location == self.current_location() {
            return Err(NavigationError::Duplicated(location));
        }

        let from = self.current_location().to_string();
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
        self.notify(NavigationKind::Push, Some(from));
        Ok(self.current_route())
    }

    /// Navigate to the route registered under `name`.
    pub fn push_named(&mut self, name: &str) -> Result<Option<&RouteEntry>, NavigationError> {
        let path = self
            .router
            .path_for(name)
            .ok_or_else(|| NavigationError::UnknownName(name.to_string()))?
            .to_string();
        self.push(path)
    }

    /// Swap the current entry for `location` without growing the stack.
    pub fn replace(&mut self, location: impl Into<String>) -> Result<Option<&RouteEntry>, NavigationError> {
        let location = location.into();
        ensure_absolute(&location)?;

        let from = std::mem::replace(&mut self.entries[self.index], location);
        self.notify(NavigationKind::Replace, Some(from));
        Ok(self.current_route())
    }

    /// Step back one entry. Returns false at the start of the stack.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let from = self.current_location().to_string();
        self.index -= 1;
        self.notify(NavigationKind::Back, Some(from));
        true
    }

    /// Step forward one entry. Returns false at the end of the stack.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        let from = self.current_location().to_string();
        self.index += 1;
        self.notify(NavigationKind::Forward, Some(from));
        true
    }

    fn notify(&self, kind: NavigationKind, from: Option<String>) {
        let to = self.current_location().to_string();
        let route = self.current_route().map(|e| e.name.clone());

        tracing::debug!(
            kind = kind.as_str(),
            from = from.as_deref().unwrap_or(""),
            to = %to,
            route = route.as_deref().unwrap_or("none"),
            "Navigation"
        );
        metrics::record_navigation(kind.as_str(), route.as_deref());

        // No subscribers is fine.
        let _ = self.events.send(NavigationEvent { kind, from, to, route });
    }
}

fn ensure_absolute(location: &str) -> Result<(), NavigationError> {
    if location.starts_with('/') {
        Ok(())
    } else {
        Err(NavigationError::NotAbsolute(location.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views;

    fn history() -> History {
        let router = Router::from_routes(vec![
            RouteEntry::new("/", "Home", views::home()),
            RouteEntry::new("/Counter", "Counter", views::counter()),
        ])
        .unwrap();
        History::new(Arc::new(router), "/").unwrap()
    }

    #[test]
    fn test_initial_location() {
        let history = history();
        assert_eq!(history.current_location(), "/");
        assert_eq!(history.current_route().unwrap().name, "Home");
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_push_and_back_forward() {
        let mut history = history();
        let route = history.push("/Counter").unwrap();
        assert_eq!(route.unwrap().view, views::counter());

        assert!(history.back());
        assert_eq!(history.current_route().unwrap().name, "Home");
        assert!(!history.back());

        assert!(history.forward());
        assert_eq!(history.current_location(), "/Counter");
        assert!(!history.forward());
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = history();
        history.push("/Counter").unwrap();
        history.back();
        history.push("/unknown").unwrap();
        assert!(!history.can_go_forward());
        assert!(history.current_route().is_none());
    }

    #[test]
    fn test_push_rejects_duplicate_and_relative() {
        let mut history = history();
        assert_eq!(history.push("/"), Err(NavigationError::Duplicated("/".into())));
        assert_eq!(
            history.push("Counter").map(|r| r.cloned()),
            Err(NavigationError::NotAbsolute("Counter".into()))
        );
    }

    #[test]
    fn test_lowercase_path_does_not_match() {
        let mut history = history();
        assert!(history.push("/counter").unwrap().is_none());
    }

    #[test]
    fn test_push_named() {
        let mut history = history();
        assert_eq!(history.push_named("Counter").unwrap().unwrap().path, "/Counter");
        assert_eq!(
            history.push_named("Missing").map(|r| r.cloned()),
            Err(NavigationError::UnknownName("Missing".into()))
        );
    }

    #[test]
    fn test_replace_keeps_stack_size() {
        let mut history = history();
        history.replace("/Counter").unwrap();
        assert_eq!(history.current_location(), "/Counter");
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_edge_moves_are_silent_and_replace_emits() {
        use tokio::sync::broadcast::error::TryRecvError;

        let mut history = history();
        let mut rx = history.subscribe();

        assert!(!history.back());
        assert!(!history.forward());
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

        history.replace("/Counter").unwrap();
        assert_eq!(
            rx.try_recv(),
            Ok(NavigationEvent {
                kind: NavigationKind::Replace,
                from: Some("/".into()),
                to: "/Counter".into(),
                route: Some("Counter".into()),
            })
        );
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn test_events_are_broadcast() {
        let mut history = history();
        let mut rx = history.subscribe();

        history.push("/Counter?from=home").unwrap();
        history.back();

        let push = rx.recv().await.unwrap();
        assert_eq!(
            push,
            NavigationEvent {
                kind: NavigationKind::Push,
                from: Some("/".into()),
                to: "/Counter?from=home".into(),
                route: Some("Counter".into()),
            }
        );

        let back = rx.recv().await.unwrap();
        assert_eq!(back.kind, NavigationKind::Back);
        assert_eq!(back.route.as_deref(), Some("Home"));
    }
}
