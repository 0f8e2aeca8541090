//! trivia-server: HTTP API over a PostgreSQL question bank
//!
//! Exposes category listing, paginated question listing, question
//! create/delete, substring search, and quiz play as JSON endpoints.
//! All persistence is delegated to PostgreSQL through sqlx.

pub mod db;
pub mod fixtures;
pub mod http;
pub mod models;

pub use http::error::ApiError;
pub use http::server::{build_router, run_server, AppState, ServerConfig};
