//! HTTP transport capability.
//!
//! The analyzer never talks to the network directly; it goes through the
//! [`Transport`] trait, injected at construction. This keeps the core free of
//! any shared transport global and lets tests substitute a deterministic
//! in-memory transport.
//!
//! [`ReqwestTransport`] is the production implementation, backed by a
//! `reqwest::Client` configured in [`crate::initialization::init_client`].

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// A fetched HTTP response: status code plus raw body bytes.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Transport-level failures: the request never produced an HTTP response.
///
/// Error statuses (4xx/5xx) are *not* transport errors; they come back as a
/// normal [`FetchResponse`] / status code and are interpreted by the caller.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request did not complete within its timeout.
    #[error("request timed out")]
    Timeout,

    /// The connection to the target could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other request failure, including request construction errors.
    #[error("request failed: {0}")]
    Request(String),
}

/// Abstract HTTP capability consumed by the analyzer.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET and returns the status plus the full body.
    async fn get(&self, url: &str, timeout: Duration) -> Result<FetchResponse, TransportError>;

    /// Issues a lightweight existence check (HEAD) and returns the status.
    async fn head(&self, url: &str, timeout: Duration) -> Result<u16, TransportError>;
}

/// Production transport backed by [`reqwest`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an already-configured `reqwest::Client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, timeout: Duration) -> Result<FetchResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(categorize_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(categorize_reqwest_error)?;
        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }

    async fn head(&self, url: &str, timeout: Duration) -> Result<u16, TransportError> {
        let response = self
            .client
            .head(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(categorize_reqwest_error)?;
        Ok(response.status().as_u16())
    }
}

/// Categorizes a `reqwest::Error` into a [`TransportError`].
fn categorize_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Request(error.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_messages() {
        assert_eq!(TransportError::Timeout.to_string(), "request timed out");
        assert_eq!(
            TransportError::Connect("refused".to_string()).to_string(),
            "connection failed: refused"
        );
        assert_eq!(
            TransportError::Request("bad request".to_string()).to_string(),
            "request failed: bad request"
        );
    }
}
