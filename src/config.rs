//! Server configuration, read from the environment.

use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const BIND_VAR: &str = "SCOREPAD_BIND";
pub const LOG_VAR: &str = "SCOREPAD_LOG";
pub const DEFAULT_LOG_FILTER: &str = "scorepad=debug,tower_http=debug";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?}: {reason}")]
    InvalidBindAddress { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP server
    pub bind_address: SocketAddr,
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 3000)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_VAR) {
            config.bind_address =
                value
                    .trim()
                    .parse()
                    .map_err(|err: std::net::AddrParseError| ConfigError::InvalidBindAddress {
                        value: value.clone(),
                        reason: err.to_string(),
                    })?;
        }

        if let Some(filter) = lookup(LOG_VAR).or_else(|| lookup("RUST_LOG")) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
