//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREDESK_API_URL` - Base URL of the store backend API
//!
//! ## Optional
//! - `STOREDESK_TOKEN_FILE` - Where the bearer token is persisted
//!   (default: `<local data dir>/storedesk/session.json`)
//! - `STOREDESK_USER_AGENT` - `User-Agent` header (default: `storedesk/<version>`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_USER_AGENT: &str = concat!("storedesk/", env!("CARGO_PKG_VERSION"));
const TOKEN_FILE_NAME: &str = "session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash, e.g. `https://api.shop.example/api`
    pub base_url: String,
    /// File holding the persisted bearer token
    pub token_file: PathBuf,
    /// `User-Agent` sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for `base_url` with default token file and user agent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the URL is not absolute http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url("STOREDESK_API_URL", base_url)?,
            token_file: default_token_file(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `STOREDESK_API_URL` is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_required_env("STOREDESK_API_URL")?;
        let mut config = Self::new(&base_url)?;

        if let Some(path) = get_optional_env("STOREDESK_TOKEN_FILE") {
            config.token_file = PathBuf::from(path);
        }
        config.user_agent = get_env_or_default("STOREDESK_USER_AGENT", DEFAULT_USER_AGENT);

        Ok(config)
    }

    /// Use a different token file.
    #[must_use]
    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = path.into();
        self
    }
}

/// Default location of the token file under the platform data directory.
#[must_use]
pub fn default_token_file() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("storedesk"))
        .unwrap_or_else(|| PathBuf::from(".storedesk"))
        .join(TOKEN_FILE_NAME)
}

/// Check `raw` is an absolute http(s) URL and strip trailing slashes so
/// endpoint paths can be appended directly.
fn normalize_base_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidEnvVar(var.to_string(), e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var.to_string(),
            format!("unsupported scheme '{}'", parsed.scheme()),
        ));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ConfigError::InvalidEnvVar(
            var.to_string(),
            "must not contain a query or fragment".to_string(),
        ));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

// =============================================================================
// Environment helpers
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable, treating empty as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}
