//! HTTP host subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign / propagate x-request-id)
//!     → routing::Router (resolve path)
//!     → response.rs (HTML shell or JSON envelope)
//!     → Send to client
//! ```

pub mod api;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::ApiResponse;
pub use server::{AppState, HttpServer};
