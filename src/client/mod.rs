//! Async VIES REST API client.
//!
//! One request, one response, no retries: [`ViesClient::check_vat_number`]
//! issues a single GET against the VIES REST API and folds whatever comes
//! back — success, upstream error, unparseable body, or transport failure
//! — into a [`VatCheckResult`]. Neither it nor
//! [`ViesClient::check_status`] ever returns `Err`.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), vies::client::TransportError> {
//! use vies::client::ViesClient;
//! use vies::model::CheckVatRequest;
//!
//! let client = ViesClient::new()?;
//! let result = client
//!     .check_vat_number(&CheckVatRequest::new("HU", "10773381"))
//!     .await;
//! println!("valid: {}, name: {:?}", result.valid, result.name);
//! # Ok(())
//! # }
//! ```

mod config;
mod map;
mod transport;
mod wire;

pub use config::ViesConfig;
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};

use tracing::{debug, error, info, warn};

use crate::model::{CheckFailure, CheckVatRequest, StatusSnapshot, VatCheckResult};

/// Client for the VIES REST API.
///
/// Holds no cross-call mutable state; a single instance serves concurrent
/// checks without locking. Connection pooling belongs to the transport.
#[derive(Debug, Clone)]
pub struct ViesClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl ViesClient<HttpTransport> {
    /// Client with the default configuration: public VIES endpoint,
    /// 30 second timeout, crate-versioned `User-Agent`.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_config(ViesConfig::default())
    }

    /// Client with explicit configuration.
    pub fn with_config(config: ViesConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config.base_url, transport))
    }
}

impl<T: Transport> ViesClient<T> {
    /// Client over a custom transport (tests, instrumentation).
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Check one VAT number against VIES.
    ///
    /// Dispatches the with-requester variant when the request carries a
    /// usable requester pair, the simple variant otherwise. Every failure
    /// mode lands in the result's `failure` field; this method never
    /// returns `Err` and never panics.
    pub async fn check_vat_number(&self, request: &CheckVatRequest) -> VatCheckResult {
        let url = self.check_vat_url(request);
        debug!(
            country = %request.country_code,
            vat = %request.vat_number,
            requester = request.requester().is_some(),
            "dispatching VIES check"
        );

        let raw = match self.transport.get(&url).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(
                    country = %request.country_code,
                    vat = %request.vat_number,
                    error = %e,
                    "VIES transport failure"
                );
                return VatCheckResult::failed(request, CheckFailure::Transport(e.to_string()));
            }
        };

        if !raw.is_success() {
            let failure = map::map_error_body(raw.status, &raw.body);
            warn!(
                country = %request.country_code,
                vat = %request.vat_number,
                status = raw.status,
                error = failure.message(),
                "VIES returned an error"
            );
            return VatCheckResult::failed(request, failure);
        }

        match serde_json::from_str::<wire::CheckVatBody>(&raw.body) {
            Ok(body) => {
                let result = map::map_check_body(request, body);
                info!(
                    country = %request.country_code,
                    vat = %request.vat_number,
                    valid = result.valid,
                    "VIES check completed"
                );
                result
            }
            Err(e) => {
                warn!(
                    country = %request.country_code,
                    vat = %request.vat_number,
                    error = %e,
                    "VIES success body failed to parse"
                );
                VatCheckResult::failed(request, CheckFailure::Parse(e.to_string()))
            }
        }
    }

    /// Query VIES service availability.
    ///
    /// Any failure — transport, non-success status, unparseable body —
    /// collapses to the unavailable/empty snapshot; the cause is not
    /// distinguishable from the return value.
    pub async fn check_status(&self) -> StatusSnapshot {
        let url = format!("{}/check-status", self.base_url);

        let raw = match self.transport.get(&url).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "VIES status check transport failure");
                return StatusSnapshot::unavailable();
            }
        };

        if !raw.is_success() {
            warn!(status = raw.status, "VIES status endpoint returned an error");
            return StatusSnapshot::unavailable();
        }

        match serde_json::from_str::<wire::StatusBody>(&raw.body) {
            Ok(body) => body.into_snapshot(),
            Err(e) => {
                warn!(error = %e, "VIES status body failed to parse");
                StatusSnapshot::unavailable()
            }
        }
    }

    /// Build the check URL. Path and query values are embedded unencoded;
    /// they are caller-trusted per the VIES contract.
    fn check_vat_url(&self, request: &CheckVatRequest) -> String {
        let mut url = format!(
            "{}/ms/{}/vat/{}",
            self.base_url, request.country_code, request.vat_number
        );
        if let Some((code, number)) = request.requester() {
            url.push_str(&format!(
                "?requesterMemberStateCode={code}&requesterNumber={number}"
            ));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopTransport;

    impl Transport for NoopTransport {
        async fn get(&self, _url: &str) -> Result<RawResponse, TransportError> {
            Err(TransportError("noop".into()))
        }
    }

    fn client() -> ViesClient<NoopTransport> {
        ViesClient::with_transport("https://vies.test/rest-api", NoopTransport)
    }

    #[test]
    fn simple_variant_url() {
        let url = client().check_vat_url(&CheckVatRequest::new("HU", "10773381"));
        assert_eq!(url, "https://vies.test/rest-api/ms/HU/vat/10773381");
    }

    #[test]
    fn requester_variant_url() {
        let request = CheckVatRequest::new("DE", "123456789").with_requester("HU", "10773381");
        let url = client().check_vat_url(&request);
        assert_eq!(
            url,
            "https://vies.test/rest-api/ms/DE/vat/123456789\
             ?requesterMemberStateCode=HU&requesterNumber=10773381"
        );
    }

    #[test]
    fn partial_requester_uses_simple_variant() {
        let mut request = CheckVatRequest::new("DE", "123456789");
        request.requester_number = Some("10773381".into());
        let url = client().check_vat_url(&request);
        assert!(!url.contains('?'));
    }

    #[test]
    fn trailing_slash_trimmed() {
        let c = ViesClient::with_transport("https://vies.test/rest-api/", NoopTransport);
        let url = c.check_vat_url(&CheckVatRequest::new("HU", "1"));
        assert_eq!(url, "https://vies.test/rest-api/ms/HU/vat/1");
    }
}
