//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PETAL_CATALOG_PATH` - Path to a catalog JSON document (default: the
//!   catalog embedded in the binary)
//! - `PETAL_CURRENCY` - ISO 4217 display currency (default: PHP)

use std::path::PathBuf;

use thiserror::Error;

use petal_market_core::CurrencyCode;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Path to the catalog document, if overriding the embedded one
    pub catalog_path: Option<PathBuf>,
    /// Currency totals and prices are displayed in
    pub currency: CurrencyCode,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_path = get_optional_env("PETAL_CATALOG_PATH").map(PathBuf::from);
        let currency = match get_optional_env("PETAL_CURRENCY") {
            Some(raw) => raw.parse::<CurrencyCode>().map_err(|e| {
                ConfigError::InvalidEnvVar("PETAL_CURRENCY".to_string(), e.to_string())
            })?,
            None => CurrencyCode::default(),
        };

        Ok(Self {
            catalog_path,
            currency,
        })
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
