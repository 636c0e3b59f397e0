//! # Configuration Management
//!
//! Configuration comes from the environment (with an optional `.env` file).
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 3000)
//! - `SESSION_COOKIE_NAME`: Name of the session cookie (default: club.sid)
//! - `SESSION_SECURE_COOKIE`: Only send the cookie over HTTPS (default: false)

use anyhow::{Context, Result};
use std::env;

/// Application configuration
///
/// All fields are public so `main` can hand them to the session layer and
/// the TCP listener directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number
    pub port: u16,

    /// Cookie carrying the opaque session id
    pub session_cookie_name: String,

    /// Mark the session cookie `Secure`
    /// Leave off for plain-HTTP development, turn on behind HTTPS.
    pub session_secure_cookie: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            session_cookie_name: "club.sid".to_string(),
            session_secure_cookie: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to [`Config::default`]. Values that are set
    /// but cannot be parsed are reported as errors instead of being ignored.
    ///
    /// ## Example .env file
    /// ```text
    /// HOST=127.0.0.1
    /// PORT=3000
    /// SESSION_COOKIE_NAME=club.sid
    /// SESSION_SECURE_COOKIE=false
    /// ```
    pub fn from_env() -> Result<Self> {
        // dotenvy doesn't error if the file is missing
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{raw}'"))?,
            None => defaults.port,
        };

        let session_secure_cookie = match lookup("SESSION_SECURE_COOKIE") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("SESSION_SECURE_COOKIE must be true or false, got '{raw}'"))?,
            None => defaults.session_secure_cookie,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            session_cookie_name: lookup("SESSION_COOKIE_NAME")
                .unwrap_or(defaults.session_cookie_name),
            session_secure_cookie,
        })
    }

    /// Get the socket address to bind the server to, e.g. "127.0.0.1:3000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
