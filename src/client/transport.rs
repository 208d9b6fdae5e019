//! HTTP transport seam.
//!
//! The client needs exactly one operation: issue a GET and hand back the
//! status code with the body text. [`HttpTransport`] is the
//! reqwest-backed default; tests substitute canned implementations.

use thiserror::Error;

use super::config::ViesConfig;

/// Failure at the HTTP layer: connection, TLS, timeout, or client build.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Outcome of a raw HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The single HTTP operation the client depends on.
///
/// Connection pooling, TLS, and timeouts live behind this seam; the
/// client itself only maps outcomes.
pub trait Transport: Send + Sync {
    /// Issue one GET and return the raw outcome.
    fn get(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// Default transport backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport carrying the config's timeout and `User-Agent`.
    pub fn new(config: &ViesConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}
