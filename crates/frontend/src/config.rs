//! Frontend configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CASABNB_API_URL` - Base URL of the rental backend API
//!   (e.g. `http://localhost:5000/api/v1`)
//!
//! ## Optional
//! - `CASABNB_HOST` - Bind address (default: 127.0.0.1)
//! - `CASABNB_PORT` - Listen port (default: 3000)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Frontend application configuration.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the rental backend API.
    pub backend_url: String,
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
}

impl FrontendConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when `CASABNB_API_URL` is missing or a bind
    /// variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url = std::env::var("CASABNB_API_URL")
            .map_err(|_| ConfigError::MissingEnvVar("CASABNB_API_URL".to_string()))?;

        let host = match std::env::var("CASABNB_HOST") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::InvalidEnvVar("CASABNB_HOST".to_string(), raw.clone())
            })?,
            Err(_) => DEFAULT_HOST,
        };

        let port = match std::env::var("CASABNB_PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::InvalidEnvVar("CASABNB_PORT".to_string(), raw.clone())
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            backend_url,
            host,
            port,
        })
    }

    /// Socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
