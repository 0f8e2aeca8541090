//! Question field validation
//!
//! Newtypes that can only be constructed from valid input. The database
//! enforces the same bounds via CHECK constraints; validating here keeps
//! bad input out of the pool entirely.

use super::ValidationError;

/// Maximum length for question text
const MAX_QUESTION_LEN: usize = 1000;

/// Maximum length for answer text
const MAX_ANSWER_LEN: usize = 500;

/// Validated question text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText(String);

impl QuestionText {
    /// Create question text, rejecting empty or oversized input.
    ///
    /// Leading/trailing whitespace is trimmed before validation, so a
    /// whitespace-only body counts as empty.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "question" });
        }
        if trimmed.len() > MAX_QUESTION_LEN {
            return Err(ValidationError::TooLong {
                field: "question",
                max: MAX_QUESTION_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated answer text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerText(String);

impl AnswerText {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "answer" });
        }
        if trimmed.len() > MAX_ANSWER_LEN {
            return Err(ValidationError::TooLong {
                field: "answer",
                max: MAX_ANSWER_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Difficulty rating, 1 (easiest) through 5 (hardest)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty(i16);

impl Difficulty {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 5;

    pub fn new(value: i16) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: Self::MIN as i64,
                max: Self::MAX as i64,
                value: value as i64,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}

/// A fully validated question ready for insertion
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub question: QuestionText,
    pub answer: AnswerText,
    pub difficulty: Difficulty,
    pub category: i32,
}
