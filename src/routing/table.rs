//! Route table data model.
//!
//! # Responsibilities
//! - Bind a path to a name and a view handle
//! - Reject malformed tables before a router is built
//!
//! # Design Decisions
//! - Validation runs once, at construction
//! - The first violation is reported; tables are tiny and hand-written

use serde::Serialize;
use thiserror::Error;

use crate::views::ViewHandle;

/// One row of the routing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Absolute URL path, starting with `/`.
    pub path: String,

    /// Unique human identifier.
    pub name: String,

    /// The view rendered when `path` is active.
    #[serde(rename = "component", serialize_with = "serialize_view")]
    pub view: ViewHandle,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: ViewHandle) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
}

fn serialize_view<S: serde::Serializer>(view: &ViewHandle, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(view.name())
}

/// Errors detected while building a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route `{name}` has relative path `{path}`; paths must start with `/`")]
    RelativePath { name: String, path: String },

    #[error("route with path `{path}` has an empty name")]
    EmptyName { path: String },

    #[error("path `{path}` is declared by both `{first}` and `{second}`")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),
}

/// Ordered, validated sequence of route entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Validate `entries` and freeze them in declaration order.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        for (i, entry) in entries.iter().enumerate() {
            if !entry.path.starts_with('/') {
                return Err(RouteTableError::RelativePath {
                    name: entry.name.clone(),
                    path: entry.path.clone(),
                });
            }
            if entry.name.is_empty() {
                return Err(RouteTableError::EmptyName {
                    path: entry.path.clone(),
                });
            }

            let earlier = &entries[..i];
            if let Some(prev) = earlier.iter().find(|e| e.path == entry.path) {
                return Err(RouteTableError::DuplicatePath {
                    path: entry.path.clone(),
                    first: prev.name.clone(),
                    second: entry.name.clone(),
                });
            }
            if earlier.iter().any(|e| e.name == entry.name) {
                return Err(RouteTableError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
