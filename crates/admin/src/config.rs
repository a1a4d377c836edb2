//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional.
//! - `AURO_ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `AURO_ADMIN_PORT` - Listen port (default: 3001)
//! - `AURO_SIMULATED_LATENCY` - `on` or `off` (default: on)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (default: development)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use auro_core::Latency;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Whether the Operator pauses before replying
    pub latency: Latency,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3001,
            latency: Latency::Simulated,
            sentry_dsn: None,
            sentry_environment: "development".to_string(),
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
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("AURO_ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("AURO_ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("AURO_ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("AURO_ADMIN_PORT".to_string(), e.to_string()))?;
        let latency = parse_latency(&get_env_or_default("AURO_SIMULATED_LATENCY", "on"))?;

        Ok(Self {
            host,
            port,
            latency,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_env_or_default("SENTRY_ENVIRONMENT", "development"),
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

fn parse_latency(value: &str) -> Result<Latency, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(Latency::Simulated),
        "off" | "false" | "0" => Ok(Latency::Instant),
        other => Err(ConfigError::InvalidEnvVar(
            "AURO_SIMULATED_LATENCY".to_string(),
            format!("expected on or off, got {other:?}"),
        )),
    }
}

/// Get an optional environment variable, treating blank as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
