//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteEntry[]
//!     → table.rs (validate: absolute paths, unique paths and names)
//!     → matcher.rs (compile exact path matchers)
//!     → Freeze as immutable Router
//!
//! Navigation:
//!     location (path, optional ?query / #fragment)
//!     → history.rs (push / replace / back / forward)
//!     → router.rs (route lookup)
//!     → Return: matched RouteEntry or no match
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact, case-sensitive path comparison; no patterns, no parameters
//! - Declaration order preserved; first match wins
//! - Unmatched paths are not errors; the fallback belongs to the host

pub mod history;
pub mod matcher;
pub mod router;
pub mod table;

pub use history::{History, NavigationError, NavigationEvent, NavigationKind};
pub use router::{Router, RouterError};
pub use table::{RouteEntry, RouteTable, RouteTableError};
