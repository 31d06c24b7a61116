//! Route matching logic.
//!
//! # Responsibilities
//! - Match a location path against a declared route path
//!
//! # Design Decisions
//! - Path matching is exact and case-sensitive (`/counter` is not `/Counter`)
//! - No trailing-slash normalisation (`/Counter/` is not `/Counter`)
//! - No regex, no parameters

/// Trait for matching a location path against a condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if `path` satisfies this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one literal path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        self.path == path
    }
}

/// Strip `?query` and `#fragment` from a location, leaving the path.
pub fn location_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matcher() {
        let matcher = ExactPathMatcher::new("/");
        assert!(matcher.matches("/"));
        assert!(!matcher.matches(""));
        assert!(!matcher.matches("/Counter"));
    }

    #[test]
    fn test_path_matcher_is_case_sensitive() {
        let matcher = ExactPathMatcher::new("/Counter");
        assert!(matcher.matches("/Counter"));
        assert!(!matcher.matches("/counter"));
        assert!(!matcher.matches("/COUNTER"));
        assert!(!matcher.matches("/Counter/"));
        assert!(!matcher.matches("/Counter/1"));
    }

    #[test]
    fn test_location_path() {
        assert_eq!(location_path("/Counter?step=2"), "/Counter");
        assert_eq!(location_path("/#top"), "/");
        assert_eq!(location_path("/Counter#a?b"), "/Counter");
        assert_eq!(location_path("/"), "/");
    }
}
