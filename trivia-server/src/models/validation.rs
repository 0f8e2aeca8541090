//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field falls outside its allowed range
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                write!(f, "{} must be between {} and {}, got {}", field, min, max, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "question",
            max: 1000,
        };
        assert_eq!(
            err.to_string(),
            "question exceeds maximum length of 1000 characters"
        );

        let err = ValidationError::OutOfRange {
            field: "difficulty",
            min: 1,
            max: 5,
            value: 9,
        };
        assert_eq!(err.to_string(), "difficulty must be between 1 and 5, got 9");
    }
}
