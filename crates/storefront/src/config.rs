//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PORT` - Listen port (default: 3001)
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_ENV` - `production` selects the production CORS origins;
//!   anything else is development. Falls back to `NODE_ENV` when unset.
//! - `MENU_API_BASE_URL` - Base URL of the menu API (default: <http://localhost:8000>)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use thiserror::Error;
use url::Url;

const DEFAULT_PORT: &str = "3001";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_MENU_API_BASE_URL: &str = "http://localhost:8000";

/// Browser origins allowed to call the API in production.
const PRODUCTION_ORIGINS: &[&str] = &[
    "https://d3restaurantapp.azurewebsites.net",
    "https://d3restaurantapp.azurestaticapps.net",
];

/// Browser origins allowed to call the API during development (Vite dev server).
const DEVELOPMENT_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Deployment environment, which selects the CORS origin set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    /// `production` (case-insensitive) is production, everything else is development.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }

    /// Origins allowed to make credentialed cross-origin requests.
    #[must_use]
    pub const fn allowed_origins(self) -> &'static [&'static str] {
        match self {
            Self::Production => PRODUCTION_ORIGINS,
            Self::Development => DEVELOPMENT_ORIGINS,
        }
    }

    /// Allowed origins as header values for the CORS layer.
    #[must_use]
    pub fn allowed_origin_headers(self) -> Vec<HeaderValue> {
        self.allowed_origins()
            .iter()
            .copied()
            .map(HeaderValue::from_static)
            .collect()
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Base URL of the menu API consumed by the menu loader
    pub menu_api_base_url: Url,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (defaults to `environment`)
    pub sentry_environment: Option<String>,
    /// Fraction of errors reported to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced by Sentry
    pub sentry_traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = get_or("STOREFRONT_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string()))?;
        let port = get_or("PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;
        let environment = lookup("STOREFRONT_ENV")
            .or_else(|| lookup("NODE_ENV"))
            .map_or_else(Environment::default, |value| Environment::parse(&value));
        let menu_api_base_url = Url::parse(&get_or("MENU_API_BASE_URL", DEFAULT_MENU_API_BASE_URL))
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MENU_API_BASE_URL".to_string(), e.to_string())
            })?;

        let sentry_sample_rate = parse_rate(&lookup, "SENTRY_SAMPLE_RATE", 1.0)?;
        let sentry_traces_sample_rate = parse_rate(&lookup, "SENTRY_TRACES_SAMPLE_RATE", 0.0)?;

        Ok(Self {
            host,
            port,
            environment,
            menu_api_base_url,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a sample rate in `[0.0, 1.0]`.
fn parse_rate(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: f32,
) -> Result<f32, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let rate = raw
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ));
    }
    Ok(rate)
}
