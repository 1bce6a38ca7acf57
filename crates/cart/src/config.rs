//! Cart engine configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ROCKET_SHOES_API_URL` - Catalog API base URL (default: <http://localhost:3333>)
//! - `ROCKET_SHOES_STORAGE_DIR` - Directory for persisted cart state (default: `.rocket-shoes`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_STORAGE_DIR: &str = ".rocket-shoes";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart engine configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Base URL of the catalog API serving `stock/{id}` and `products/{id}`
    pub api_url: String,
    /// Directory holding persisted cart state
    pub storage_dir: PathBuf,
}

impl CartConfig {
    /// Load configuration from the environment.
    ///
    /// Reads a `.env` file first if one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `ROCKET_SHOES_API_URL` is
    /// not an HTTP(S) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_url =
            env::var("ROCKET_SHOES_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let storage_dir = env::var("ROCKET_SHOES_STORAGE_DIR")
            .unwrap_or_else(|_| DEFAULT_STORAGE_DIR.to_string());

        Self::build(api_url, storage_dir)
    }

    fn build(api_url: String, storage_dir: String) -> Result<Self, ConfigError> {
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvVar(
                "ROCKET_SHOES_API_URL".to_string(),
                format!("expected an http(s) URL, got {api_url}"),
            ));
        }

        Ok(Self {
            api_url,
            storage_dir: PathBuf::from(storage_dir),
        })
    }
}
