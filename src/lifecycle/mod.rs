//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Init logging/metrics → Install runtime → Build router → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → HTTP host stops accepting and drains
//!
//! Signals (signals.rs):
//!     Ctrl+C → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last (traffic only when the router exists)

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{start, StartupError, Started};
