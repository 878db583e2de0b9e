//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `AUTHOR_DESK_DATA_DIR` - Directory holding the persisted slot files (default: .author-desk)
//! - `AUTHOR_DESK_NOTIFY_SECS` - Notification lifetime in seconds (default: 3)
//! - `AUTHOR_DESK_LOG_JSON` - Emit JSON logs instead of text (default: false)
//! - `RUST_LOG` - Log filter directives, read by the binary

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".author-desk";
const DEFAULT_NOTIFY_SECS: u64 = 3;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Directory backing the file slot
    pub data_dir: PathBuf,
    /// How long a notification stays visible
    pub notification_ttl: Duration,
    /// Whether logs are emitted as JSON
    pub log_json: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            notification_ttl: Duration::from_secs(DEFAULT_NOTIFY_SECS),
            log_json: false,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("AUTHOR_DESK_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let notification_ttl = match lookup("AUTHOR_DESK_NOTIFY_SECS") {
            Some(raw) => parse_notify_secs(&raw)?,
            None => Duration::from_secs(DEFAULT_NOTIFY_SECS),
        };

        let log_json = match lookup("AUTHOR_DESK_LOG_JSON") {
            Some(raw) => parse_bool("AUTHOR_DESK_LOG_JSON", &raw)?,
            None => false,
        };

        Ok(Self {
            data_dir,
            notification_ttl,
            log_json,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_notify_secs(raw: &str) -> Result<Duration, ConfigError> {
    let secs = raw.trim().parse::<u64>().map_err(|e| {
        ConfigError::InvalidEnvVar("AUTHOR_DESK_NOTIFY_SECS".to_string(), e.to_string())
    })?;
    if secs == 0 {
        return Err(ConfigError::InvalidEnvVar(
            "AUTHOR_DESK_NOTIFY_SECS".to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
