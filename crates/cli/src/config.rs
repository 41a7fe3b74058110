//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CONNECT_SHOP_DB` - Path to the contact database file
//!   (default: `contacts.db` in the working directory)

use std::path::PathBuf;

use thiserror::Error;

/// Default database file, matching the original application.
const DEFAULT_DB_PATH: &str = "contacts.db";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set but not valid UTF-8.
    #[error("Invalid environment variable {0}: not valid unicode")]
    InvalidEnvVar(&'static str),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path of the SQLite contact database.
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `.env` if present (via `dotenvy`), then the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `CONNECT_SHOP_DB` is set to
    /// a non-unicode value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_path = match std::env::var("CONNECT_SHOP_DB") {
            Ok(path) => PathBuf::from(path),
            Err(std::env::VarError::NotPresent) => PathBuf::from(DEFAULT_DB_PATH),
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnvVar("CONNECT_SHOP_DB"));
            }
        };

        Ok(Self { database_path })
    }
}
