//! Repository implementations for database access
//!
//! Each repository borrows the pool and exposes one method per API
//! operation. Lookup misses surface as DbError::NotFound; the HTTP layer
//! decides which status that becomes.

pub mod categories;
pub mod questions;

pub use categories::{Category, CategoryRepo};
pub use questions::{DbError, Question, QuestionRepo};
