//! Host configuration parsed from environment variables.

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }

    /// Listen on all interfaces.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
