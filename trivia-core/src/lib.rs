pub mod config;
pub mod error;

pub use config::{AppConfig, DatabaseConfig};
pub use error::{ConfigError, Result};
