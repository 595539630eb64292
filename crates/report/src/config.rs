//! Report configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ADMANAGER_NETWORK_CODE` - Network code for admin links (required with `--admin-urls`)
//! - `ADMANAGER_ADMIN_HOST` - Ad Manager UI host (default: www.google.com/dfp)
//! - `ADMANAGER_QUERY_LIMIT` - Maximum orders per query (default: 500)
//! - `REPORT_OUTPUT` - CSV destination path (default: report.csv)
//! - `LOG_FORMAT` - `json` for JSON log lines, anything else for text

use std::path::PathBuf;

use admanager_orders_core::{DEFAULT_ADMIN_HOST, NetworkCode};
use thiserror::Error;

const DEFAULT_QUERY_LIMIT: &str = "500";
const DEFAULT_OUTPUT: &str = "report.csv";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Report settings.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Network the session is bound to
    pub network_code: Option<NetworkCode>,
    /// Host part of Ad Manager UI links
    pub admin_host: String,
    /// Maximum number of orders a query returns
    pub query_limit: u32,
    /// Where the CSV report is written
    pub output: PathBuf,
    /// Log line format
    pub log_format: LogFormat,
}

impl ReportConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network_code = get_optional_env(&lookup, "ADMANAGER_NETWORK_CODE")
            .map(|code| {
                code.parse::<NetworkCode>().map_err(|e| {
                    ConfigError::InvalidEnvVar("ADMANAGER_NETWORK_CODE".to_string(), e.to_string())
                })
            })
            .transpose()?;

        let query_limit = get_env_or_default(&lookup, "ADMANAGER_QUERY_LIMIT", DEFAULT_QUERY_LIMIT)
            .parse::<u32>()
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "ADMANAGER_QUERY_LIMIT".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        let log_format = match get_optional_env(&lookup, "LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            network_code,
            admin_host: get_env_or_default(&lookup, "ADMANAGER_ADMIN_HOST", DEFAULT_ADMIN_HOST),
            query_limit,
            output: PathBuf::from(get_env_or_default(&lookup, "REPORT_OUTPUT", DEFAULT_OUTPUT)),
            log_format,
        })
    }

    /// The network code, which admin links cannot be built without.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if no network code is configured.
    pub fn require_network_code(&self) -> Result<&NetworkCode, ConfigError> {
        self.network_code
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar("ADMANAGER_NETWORK_CODE".to_string()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    get_optional_env(lookup, key).unwrap_or_else(|| default.to_string())
}
