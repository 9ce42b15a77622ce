//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SECRET_KEY` - Session cookie signing key (min 64 bytes)
//!
//! ## Optional
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 8080)
//! - `GTM_WEB_CONTAINER_ID` - The container ID of the Web GTM container
//! - `CURRENCY_CODE` - ISO 4217 currency code (default: GBP)
//! - `CURRENCY_SYMBOL` - Currency symbol for display (default: £)

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use tagshop_core::Currency;

/// Session signing keys must be at least this long; the cookie `Key`
/// derivation rejects anything shorter.
const MIN_SECRET_KEY_LENGTH: usize = 64;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Session cookie signing key
    pub secret_key: SecretString,
    /// Tag manager configuration
    pub tags: TagManagerConfig,
    /// Display currency
    pub currency: Currency,
}

/// Tag manager container configuration.
///
/// When no container ID is configured the storefront renders without the GTM
/// snippet; everything else keeps working.
#[derive(Debug, Clone, Default)]
pub struct TagManagerConfig {
    /// The container ID of the Web GTM container (e.g., GTM-XXXXXXX)
    pub web_container_id: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the session key is too short to sign cookies with.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_owned(), e.to_string()))?;

        let secret_key = SecretString::from(get_required_env("SECRET_KEY")?);
        validate_secret_key(&secret_key, "SECRET_KEY")?;

        let tags = TagManagerConfig::from_env();
        let currency = Currency {
            code: get_env_or_default("CURRENCY_CODE", "GBP"),
            symbol: get_env_or_default("CURRENCY_SYMBOL", "£"),
        };

        Ok(Self {
            host,
            port,
            secret_key,
            tags,
            currency,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl TagManagerConfig {
    fn from_env() -> Self {
        Self {
            web_container_id: get_optional_env("GTM_WEB_CONTAINER_ID"),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Validate that the session key is long enough to sign cookies with.
fn validate_secret_key(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let len = secret.expose_secret().len();
    if len < MIN_SECRET_KEY_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_owned(),
            format!("must be at least {MIN_SECRET_KEY_LENGTH} bytes (got {len})"),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_secret_key_too_short() {
        let secret = SecretString::from("short");
        assert!(validate_secret_key(&secret, "TEST_KEY").is_err());
    }

    #[test]
    fn test_validate_secret_key_valid_length() {
        let secret = SecretString::from("x".repeat(64));
        assert!(validate_secret_key(&secret, "TEST_KEY").is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
            secret_key: SecretString::from("x".repeat(64)),
            tags: TagManagerConfig::default(),
            currency: Currency::default(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
            secret_key: SecretString::from("super_secret_session_key_value_0123456789_0123456789_0123456789_x"),
            tags: TagManagerConfig::default(),
            currency: Currency::default(),
        };

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("super_secret_session_key_value"));
    }
}
