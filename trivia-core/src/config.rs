//! Centralized configuration for the trivia API
//!
//! Everything is environment-driven (12-factor style):
//!
//!   DATABASE_URL   PostgreSQL connection string
//!   TRIVIA_HOST    Bind address (default 127.0.0.1)
//!   TRIVIA_PORT    Bind port (default 5000)
//!
//! A `.env` file in the working directory is loaded first, if present.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default connection string when DATABASE_URL is unset
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/trivia";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    /// Read DATABASE_URL from the environment, falling back to the
    /// local default.
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Loads `.env` (ignored when absent), then reads each variable with
    /// its default. Fails only when a variable is present but unusable.
    pub fn load() -> Result<Self> {
        // Missing .env is fine; a malformed one is not worth failing over.
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!("Failed to load .env: {}", err);
            }
        }

        let host = env::var("TRIVIA_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("TRIVIA_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid_var("TRIVIA_PORT", format!("'{}' is not a port number", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            database: DatabaseConfig::from_env(),
        })
    }

    /// Bind address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.database.url, "postgres://localhost:5432/trivia");
    }

    #[test]
    fn bind_addr_format() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }
}
