//! Request, result, and status types for VIES VAT number checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A VAT number lookup to run against the VIES service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckVatRequest {
    /// ISO 3166-1 alpha-2 code of the member state that issued the VAT number.
    pub country_code: String,
    /// The VAT number as entered by the user, without normalization.
    pub vat_number: String,
    /// Country code of the party making the lookup (attribution/audit).
    pub requester_member_state_code: Option<String>,
    /// VAT number of the party making the lookup.
    pub requester_number: Option<String>,
}

impl CheckVatRequest {
    /// Create a request without requester identity.
    pub fn new(country_code: impl Into<String>, vat_number: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            vat_number: vat_number.into(),
            requester_member_state_code: None,
            requester_number: None,
        }
    }

    /// Attach the requester's own country code and VAT number.
    ///
    /// Supplying both unlocks VIES approximate matching of trader details.
    pub fn with_requester(
        mut self,
        country_code: impl Into<String>,
        vat_number: impl Into<String>,
    ) -> Self {
        self.requester_member_state_code = Some(country_code.into());
        self.requester_number = Some(vat_number.into());
        self
    }

    /// The requester identity pair, if usable.
    ///
    /// Both parts must be present and non-empty; a partial pair counts
    /// as absent.
    pub fn requester(&self) -> Option<(&str, &str)> {
        let code = self
            .requester_member_state_code
            .as_deref()
            .filter(|s| !s.is_empty())?;
        let number = self.requester_number.as_deref().filter(|s| !s.is_empty())?;
        Some((code, number))
    }
}

/// VIES approximate-match confidence for a single trader field.
///
/// A confidence class, not a boolean: `Valid` means VIES scored the field
/// 100% against the submitted requester data, `Invalid` means 0%, and
/// `NotProcessed` means no approximate-matching data came back (the field
/// was not compared, or no requester identity was sent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    /// Scored 100% by VIES.
    Valid,
    /// Scored 0% by VIES.
    Invalid,
    /// No approximate-matching data returned for this field.
    #[default]
    NotProcessed,
}

/// Why a VAT check did not produce a usable answer.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CheckFailure {
    /// Network-level failure: connection, TLS, timeout.
    #[error("VIES transport error: {0}")]
    Transport(String),
    /// VIES answered with a non-success status.
    #[error("VIES API error: {message}")]
    Upstream {
        /// Upstream error code (e.g. `MS_UNAVAILABLE`), when one was returned.
        code: Option<String>,
        /// Human-readable error message.
        message: String,
    },
    /// A success response carried a body that does not match the VIES schema.
    #[error("could not parse VIES response: {0}")]
    Parse(String),
}

impl CheckFailure {
    /// The bare human-readable message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport(m) | Self::Parse(m) => m,
            Self::Upstream { message, .. } => message,
        }
    }
}

/// Outcome of a single VAT number check.
///
/// Always populated — failures are carried in [`failure`](Self::failure)
/// rather than surfaced as `Err`. Country code and VAT number echo the
/// request, never the response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VatCheckResult {
    /// Target country code, copied from the request.
    pub country_code: String,
    /// Target VAT number exactly as submitted, copied from the request.
    pub vat_number: String,
    /// When VIES processed the request; local clock when unparseable.
    pub request_date: DateTime<Utc>,
    /// Whether the VAT number is currently valid.
    pub valid: bool,
    /// Opaque consultation token issued by VIES, usable as audit evidence.
    pub request_identifier: Option<String>,
    /// Registered trader name, if disclosed by the member state.
    pub name: Option<String>,
    /// Registered trader address, if disclosed by the member state.
    pub address: Option<String>,
    /// Trader name as seen by approximate matching.
    pub trader_name: Option<String>,
    /// Trader street as seen by approximate matching.
    pub trader_street: Option<String>,
    /// Trader postal code as seen by approximate matching.
    pub trader_postal_code: Option<String>,
    /// Trader city as seen by approximate matching.
    pub trader_city: Option<String>,
    /// Trader company type as seen by approximate matching.
    pub trader_company_type: Option<String>,
    /// Match confidence for the trader name.
    pub trader_name_match: MatchType,
    /// Match confidence for the street.
    pub trader_street_match: MatchType,
    /// Match confidence for the postal code.
    pub trader_postal_code_match: MatchType,
    /// Match confidence for the city.
    pub trader_city_match: MatchType,
    /// Match confidence for the company type.
    pub trader_company_type_match: MatchType,
    /// Why the check failed, when it did.
    pub failure: Option<CheckFailure>,
}

impl VatCheckResult {
    /// Whether the check failed before producing an answer.
    pub fn has_error(&self) -> bool {
        self.failure.is_some()
    }

    /// The failure message, flattened from [`failure`](Self::failure).
    pub fn error_message(&self) -> Option<&str> {
        self.failure.as_ref().map(CheckFailure::message)
    }

    /// A result for a check that failed with `failure`, echoing the
    /// request's target fields.
    #[cfg(feature = "client")]
    pub(crate) fn failed(request: &CheckVatRequest, failure: CheckFailure) -> Self {
        Self {
            country_code: request.country_code.clone(),
            vat_number: request.vat_number.clone(),
            request_date: Utc::now(),
            valid: false,
            request_identifier: None,
            name: None,
            address: None,
            trader_name: None,
            trader_street: None,
            trader_postal_code: None,
            trader_city: None,
            trader_company_type: None,
            trader_name_match: MatchType::NotProcessed,
            trader_street_match: MatchType::NotProcessed,
            trader_postal_code_match: MatchType::NotProcessed,
            trader_city_match: MatchType::NotProcessed,
            trader_company_type_match: MatchType::NotProcessed,
            failure: Some(failure),
        }
    }
}

/// Per-country availability as reported by the VIES health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountryAvailability {
    /// The member state's database is reachable.
    #[serde(rename = "AVAILABLE", alias = "Available")]
    Available,
    /// The member state's database is down.
    #[serde(rename = "UNAVAILABLE", alias = "Unavailable")]
    Unavailable,
    /// VIES is not monitoring this member state.
    #[serde(
        rename = "MONITORING_DISABLED",
        alias = "MonitoringDisabled",
        alias = "Monitoring Disabled"
    )]
    MonitoringDisabled,
}

/// Availability of a single member state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryStatus {
    /// ISO 3166-1 alpha-2 member state code.
    pub country_code: String,
    /// Reported availability.
    pub availability: CountryAvailability,
}

/// VIES service availability at the time of a status check.
///
/// A failed status call collapses to `available: false` with an empty
/// country list; the cause is not distinguishable from this value alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Whether the VIES-on-the-Web service as a whole is up.
    pub available: bool,
    /// Per-member-state availability.
    pub countries: Vec<CountryStatus>,
}

impl StatusSnapshot {
    /// The fail-safe snapshot returned when the status check itself fails.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            countries: Vec::new(),
        }
    }
}

/// Country metadata record produced by [`all_countries`](crate::format::all_countries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    /// ISO 3166-1 alpha-2 country code.
    pub code: String,
    /// Country name in the requested language.
    pub name: String,
    /// Canonical example VAT number.
    pub example: String,
    /// Display pattern; `#` is a digit placeholder, letters are literal.
    pub format: String,
}
