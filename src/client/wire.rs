//! Serde views of the VIES REST API payloads.

use serde::Deserialize;

use crate::model::{CountryAvailability, CountryStatus, StatusSnapshot};

/// Success body of `GET /ms/{countryCode}/vat/{vatNumber}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckVatBody {
    #[serde(default)]
    pub is_valid: bool,
    pub request_date: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub request_identifier: Option<String>,
    pub vies_approximate: Option<ApproximateBody>,
}

/// Approximate-match block, returned only for requester-attributed checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApproximateBody {
    pub name: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub company_type: Option<String>,
    pub match_name: Option<i64>,
    pub match_street: Option<i64>,
    pub match_postal_code: Option<i64>,
    pub match_city: Option<i64>,
    pub match_company_type: Option<i64>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorEnvelope {
    pub error_wrapper_error: ErrorWrapper,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorWrapper {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorBody {
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

/// Body of `GET /check-status`.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusBody {
    pub vow: Option<VowBody>,
    #[serde(default)]
    pub countries: Vec<CountryStatusBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VowBody {
    #[serde(default)]
    pub available: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountryStatusBody {
    pub country_code: String,
    pub availability: CountryAvailability,
}

impl StatusBody {
    /// Flatten the nested wire shape into the public snapshot.
    pub(crate) fn into_snapshot(self) -> StatusSnapshot {
        StatusSnapshot {
            available: self.vow.map(|v| v.available).unwrap_or(false),
            countries: self
                .countries
                .into_iter()
                .map(|c| CountryStatus {
                    country_code: c.country_code,
                    availability: c.availability,
                })
                .collect(),
        }
    }
}
