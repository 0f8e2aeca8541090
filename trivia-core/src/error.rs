/// Structured error types for trivia-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (trivia-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use thiserror::Error;

/// Main error type for trivia-core operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable was present but unusable
    #[error("Invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },

    /// Configuration error with a free-form reason
    #[error("Configuration error: {reason}")]
    Other { reason: String },
}

/// Result type alias for trivia-core operations
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Create an invalid-variable error
    pub fn invalid_var(var: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidVar {
            var,
            reason: reason.into(),
        }
    }

    /// Create a generic config error
    pub fn other(reason: impl Into<String>) -> Self {
        Self::Other {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::invalid_var("TRIVIA_PORT", "not a number");
        assert_eq!(err.to_string(), "Invalid value for TRIVIA_PORT: not a number");

        let err = ConfigError::other("missing database");
        assert!(err.to_string().contains("Configuration error"));
    }
}
