//! Error types for configuration and server startup.

use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

/// Errors produced while reading server configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid `u16`.
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },

    /// `HOST` is set but is not an IP address.
    #[error("invalid HOST {value:?}: {source}")]
    InvalidAddr { value: String, source: AddrParseError },
}

/// Errors that end the server process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
