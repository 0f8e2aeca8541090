//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod pagination;
pub mod question;
pub mod validation;

pub use pagination::{page_slice, PageParams, Pagination, PAGE_SIZE};
pub use question::{AnswerText, Difficulty, QuestionDraft, QuestionText};
pub use validation::ValidationError;
