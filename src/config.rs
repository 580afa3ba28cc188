//! Immutable listening configuration.
//!
//! [`EchoConfig`] is built once from the parsed [`Cli`](crate::cli::Cli),
//! validated, and then shared read-only with the router for the lifetime
//! of the process.

use std::net::{IpAddr, SocketAddr};

use crate::cli::Cli;
use crate::error::WebResponseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoConfig {
    pub addr: SocketAddr,
    pub path_prefix: String,
}

impl EchoConfig {
    pub fn new(addr: SocketAddr, path_prefix: impl Into<String>) -> Result<Self, WebResponseError> {
        let path_prefix = path_prefix.into();
        validate_path_prefix(&path_prefix)?;
        Ok(Self { addr, path_prefix })
    }

    pub fn from_args(cli: &Cli) -> Result<Self, WebResponseError> {
        let ip: IpAddr = cli
            .host
            .parse()
            .map_err(|source| WebResponseError::AddressParse {
                addr: cli.host.clone(),
                source,
            })?;
        Self::new(SocketAddr::new(ip, cli.port), cli.path.clone())
    }
}

fn validate_path_prefix(path: &str) -> Result<(), WebResponseError> {
    let reason = if !path.starts_with('/') {
        "must start with '/'"
    } else if path.contains(['?', '#']) {
        "must not contain a query or fragment"
    } else if path.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(());
    };

    Err(WebResponseError::InvalidPathPrefix {
        path: path.to_string(),
        reason,
    })
}
