//! Pieces shared by the HTTP clients

use reqwest::Client;
use std::time::Duration;

/// User agent sent with every outbound request
pub const USER_AGENT: &str = concat!("release-weaver/", env!("CARGO_PKG_VERSION"));

/// Errors raised while constructing a client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{client} requires a non-empty {field}")]
    MissingCredential {
        client: &'static str,
        field: &'static str,
    },
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Build a `reqwest` client with a fixed per-request timeout
pub fn build_http_client(timeout: Duration) -> Result<Client, ClientError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// Reject empty credentials before any client is built
pub fn require(
    client: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::MissingCredential { client, field });
    }
    Ok(())
}
