//! Mapping from raw VIES payloads into the result model.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::wire::{ApproximateBody, CheckVatBody, ErrorEnvelope};
use crate::model::{CheckFailure, CheckVatRequest, MatchType, VatCheckResult};

/// Map a parsed success body into the result.
///
/// Target country code and VAT number come from the request, never from
/// the body. Match fields start `NotProcessed` and are only overwritten
/// when the approximate block is present.
pub(crate) fn map_check_body(request: &CheckVatRequest, body: CheckVatBody) -> VatCheckResult {
    let mut result = VatCheckResult {
        country_code: request.country_code.clone(),
        vat_number: request.vat_number.clone(),
        request_date: body
            .request_date
            .as_deref()
            .map(parse_request_date)
            .unwrap_or_else(Utc::now),
        valid: body.is_valid,
        request_identifier: body.request_identifier,
        name: clean_vies_value(body.name),
        address: clean_vies_value(body.address),
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
        failure: None,
    };

    if let Some(approx) = body.vies_approximate {
        apply_approximate(&mut result, approx);
    }

    result
}

fn apply_approximate(result: &mut VatCheckResult, approx: ApproximateBody) {
    result.trader_name = clean_vies_value(approx.name);
    result.trader_street = clean_vies_value(approx.street);
    result.trader_postal_code = clean_vies_value(approx.postal_code);
    result.trader_city = clean_vies_value(approx.city);
    result.trader_company_type = clean_vies_value(approx.company_type);
    result.trader_name_match = convert_match_score(approx.match_name);
    result.trader_street_match = convert_match_score(approx.match_street);
    result.trader_postal_code_match = convert_match_score(approx.match_postal_code);
    result.trader_city_match = convert_match_score(approx.match_city);
    result.trader_company_type_match = convert_match_score(approx.match_company_type);
}

/// Extract a failure from a non-success response body.
///
/// VIES wraps errors as `errorWrapperError.error.{errorCode,errorMessage}`.
/// A body that does not match that envelope is kept verbatim under the
/// `PARSE_ERROR` code; a blank body falls back to a status-derived message.
pub(crate) fn map_error_body(status: u16, body: &str) -> CheckFailure {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let error = envelope.error_wrapper_error.error;
            CheckFailure::Upstream {
                code: error.error_code,
                message: error
                    .error_message
                    .unwrap_or_else(|| format!("VIES API Error: {status}")),
            }
        }
        Err(_) if body.trim().is_empty() => CheckFailure::Upstream {
            code: None,
            message: format!("VIES API Error: {status}"),
        },
        Err(_) => CheckFailure::Upstream {
            code: Some("PARSE_ERROR".to_string()),
            message: body.to_string(),
        },
    }
}

/// Parse the upstream date-time string leniently.
///
/// The upstream format is not pinned down; unparseable input falls back
/// to the current time rather than failing the whole mapping.
fn parse_request_date(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| raw.parse::<DateTime<Utc>>())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.and_utc())
        })
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.and_utc())
        })
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN).and_utc())
        })
        .unwrap_or_else(|_| Utc::now())
}

/// Normalize a trader string from the body.
///
/// Empty, all-whitespace, and the `"---"` sentinel all mean "not
/// disclosed"; anything else is trimmed.
fn clean_vies_value(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() || value == "---" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Convert a raw approximate-match score into a confidence class.
///
/// Only the exact endpoints carry meaning; everything else, including an
/// absent score, means the field was not processed.
fn convert_match_score(score: Option<i64>) -> MatchType {
    match score {
        Some(100) => MatchType::Valid,
        Some(0) => MatchType::Invalid,
        _ => MatchType::NotProcessed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request() -> CheckVatRequest {
        CheckVatRequest::new("HU", "10773381")
    }

    fn body(json: &str) -> CheckVatBody {
        serde_json::from_str(json).unwrap()
    }

    // --- match score conversion ---

    #[test]
    fn score_100_is_valid() {
        assert_eq!(convert_match_score(Some(100)), MatchType::Valid);
    }

    #[test]
    fn score_0_is_invalid() {
        assert_eq!(convert_match_score(Some(0)), MatchType::Invalid);
    }

    #[test]
    fn other_scores_not_processed() {
        assert_eq!(convert_match_score(Some(50)), MatchType::NotProcessed);
        assert_eq!(convert_match_score(Some(-1)), MatchType::NotProcessed);
        assert_eq!(convert_match_score(Some(101)), MatchType::NotProcessed);
        assert_eq!(convert_match_score(None), MatchType::NotProcessed);
    }

    // --- string cleaning ---

    #[test]
    fn sentinel_and_blank_clean_to_absent() {
        assert_eq!(clean_vies_value(Some("---".into())), None);
        assert_eq!(clean_vies_value(Some("".into())), None);
        assert_eq!(clean_vies_value(Some("   ".into())), None);
        assert_eq!(clean_vies_value(None), None);
    }

    #[test]
    fn values_are_trimmed() {
        assert_eq!(
            clean_vies_value(Some(" Acme Ltd ".into())),
            Some("Acme Ltd".to_string())
        );
    }

    // --- date parsing ---

    #[test]
    fn rfc3339_parses() {
        let dt = parse_request_date("2024-01-01T00:00:00Z");
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn offset_datetime_parses() {
        let dt = parse_request_date("2024-01-01T12:00:00+02:00");
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn naive_datetime_parses() {
        let dt = parse_request_date("2024-01-01T08:30:00");
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap());
    }

    #[test]
    fn bare_date_parses() {
        let dt = parse_request_date("2024-01-01");
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn garbage_falls_back_to_now() {
        let before = Utc::now();
        let dt = parse_request_date("not a date");
        assert!(dt >= before);
    }

    // --- success mapping ---

    #[test]
    fn echoes_request_fields() {
        let result = map_check_body(
            &request(),
            body(r#"{"isValid":true,"vatNumber":"99999999"}"#),
        );
        assert_eq!(result.country_code, "HU");
        assert_eq!(result.vat_number, "10773381");
    }

    #[test]
    fn maps_valid_body_without_approximate() {
        let result = map_check_body(
            &request(),
            body(
                r#"{
                    "isValid": true,
                    "requestDate": "2024-01-01T00:00:00Z",
                    "name": "Foo Kft",
                    "address": "---"
                }"#,
            ),
        );
        assert!(result.valid);
        assert!(!result.has_error());
        assert_eq!(result.name.as_deref(), Some("Foo Kft"));
        assert_eq!(result.address, None);
        assert_eq!(result.trader_name_match, MatchType::NotProcessed);
        assert_eq!(result.trader_street_match, MatchType::NotProcessed);
        assert_eq!(result.trader_postal_code_match, MatchType::NotProcessed);
        assert_eq!(result.trader_city_match, MatchType::NotProcessed);
        assert_eq!(result.trader_company_type_match, MatchType::NotProcessed);
    }

    #[test]
    fn maps_approximate_block() {
        let result = map_check_body(
            &request(),
            body(
                r#"{
                    "isValid": true,
                    "viesApproximate": {
                        "name": " Foo Kft ",
                        "street": "---",
                        "city": "Budapest",
                        "matchName": 100,
                        "matchStreet": 0,
                        "matchPostalCode": 50
                    }
                }"#,
            ),
        );
        assert_eq!(result.trader_name.as_deref(), Some("Foo Kft"));
        assert_eq!(result.trader_street, None);
        assert_eq!(result.trader_city.as_deref(), Some("Budapest"));
        assert_eq!(result.trader_name_match, MatchType::Valid);
        assert_eq!(result.trader_street_match, MatchType::Invalid);
        assert_eq!(result.trader_postal_code_match, MatchType::NotProcessed);
        assert_eq!(result.trader_city_match, MatchType::NotProcessed);
        assert_eq!(result.trader_company_type_match, MatchType::NotProcessed);
    }

    // --- error mapping ---

    #[test]
    fn parses_error_envelope() {
        let failure = map_error_body(
            400,
            r#"{"errorWrapperError":{"error":{"errorCode":"INVALID_INPUT","errorMessage":"bad request"}}}"#,
        );
        assert_eq!(
            failure,
            CheckFailure::Upstream {
                code: Some("INVALID_INPUT".into()),
                message: "bad request".into(),
            }
        );
    }

    #[test]
    fn envelope_without_message_uses_status() {
        let failure = map_error_body(
            503,
            r#"{"errorWrapperError":{"error":{"errorCode":"MS_UNAVAILABLE"}}}"#,
        );
        assert_eq!(failure.message(), "VIES API Error: 503");
    }

    #[test]
    fn unparseable_body_kept_verbatim() {
        let failure = map_error_body(500, "<html>Gateway Timeout</html>");
        assert_eq!(
            failure,
            CheckFailure::Upstream {
                code: Some("PARSE_ERROR".into()),
                message: "<html>Gateway Timeout</html>".into(),
            }
        );
    }

    #[test]
    fn blank_body_uses_status() {
        let failure = map_error_body(502, "");
        assert_eq!(
            failure,
            CheckFailure::Upstream {
                code: None,
                message: "VIES API Error: 502".into(),
            }
        );
    }
}
