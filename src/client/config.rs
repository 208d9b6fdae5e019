//! Client configuration.

use std::time::Duration;

/// Where and how the client talks to VIES.
#[derive(Debug, Clone)]
pub struct ViesConfig {
    /// Base URL of the VIES REST API, without trailing slash.
    pub base_url: String,
    /// Per-request timeout enforced by the transport.
    pub timeout: Duration,
    /// Value of the identifying `User-Agent` header attached to every call.
    pub user_agent: String,
}

impl Default for ViesConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ec.europa.eu/taxation_customs/vies/rest-api".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("vies/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
