//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.
//!
//! The resulting `Config` is constructed once at startup and shared read-only
//! through the router state; nothing re-reads the environment per request.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): SQLite connection string, e.g. `sqlite://card-ledger.db`
/// - `TOKEN_SECRET` (required): HMAC signing secret for session tokens
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `TOKEN_TTL_SECS` (optional): session token lifetime, defaults to 3600 (1 hour)
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    /// Secret used to sign and verify session tokens.
    ///
    /// There is deliberately no generated fallback: a regenerated secret
    /// would silently invalidate every outstanding session on restart, and
    /// a hardcoded one would be guessable. Startup refuses to proceed
    /// without an explicit value.
    pub token_secret: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: i64,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

/// Default session token lifetime: one hour.
fn default_token_ttl() -> i64 {
    3600
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (DATABASE_URL, TOKEN_SECRET)
    /// - TOKEN_SECRET is present but empty
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> anyhow::Result<Self> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: database_url -> DATABASE_URL
        let config = envy::from_env::<Config>()?;

        if config.token_secret.is_empty() {
            anyhow::bail!("TOKEN_SECRET must not be empty");
        }

        Ok(config)
    }
}
