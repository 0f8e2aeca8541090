//! HTTP server layer
//!
//! Axum server with:
//! - CORS
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses with the `{success, message}` envelope

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
