//! Canonical VAT number formatting and country metadata lookups.
//!
//! Pure string work over a static per-country table — no network, no
//! validation. [`format_vat_number`] turns free-form input into the
//! country-prefixed canonical form VIES expects; the lookup functions
//! expose localized country names, display patterns, and examples.
//!
//! # Example
//!
//! ```rust
//! use vies::format::*;
//!
//! assert_eq!(format_vat_number("12345678", "at"), "ATU12345678");
//! assert_eq!(format_vat_number("123 456 789", "NL"), "NL123456789B01");
//! assert_eq!(country_name("HU", "hu"), "Magyarország");
//! ```

mod table;

pub use table::CountryVatFormat;

use std::collections::{BTreeMap, BTreeSet};

use crate::model::CountryInfo;

/// Normalize a VAT number into its canonical country-prefixed form.
///
/// Strips spaces and hyphens, upper-cases, and prepends the country code,
/// applying the country-specific structural rules (Austria's `U` prefix,
/// the Dutch `B` sub-number). Idempotent: input that already carries the
/// country prefix passes through untouched, so the function is safe to
/// call on its own output.
///
/// Empty or whitespace-only input (either argument) is returned unchanged.
/// Unknown country codes get the generic `code + number` treatment.
pub fn format_vat_number(vat_number: &str, country_code: &str) -> String {
    if vat_number.trim().is_empty() || country_code.trim().is_empty() {
        return vat_number.to_string();
    }

    let number: String = vat_number
        .chars()
        .filter(|&c| c != ' ' && c != '-')
        .collect::<String>()
        .to_uppercase();
    let country = country_code.to_uppercase();

    if number.starts_with(&country) {
        return number;
    }

    match table::lookup(&country) {
        Some(_) => format!("{country}{}", apply_country_rule(&country, number)),
        None => format!("{country}{number}"),
    }
}

/// Country-specific structural transforms applied before prefixing.
fn apply_country_rule(country: &str, number: String) -> String {
    match country {
        // Austrian numbers carry a literal U between prefix and digits
        "AT" if !number.starts_with('U') => format!("U{number}"),
        // Dutch numbers embed B + two-digit sub-number after the 9-digit base
        "NL" if number.chars().count() >= 9 && !number.contains('B') => {
            let base: String = number.chars().take(9).collect();
            let sub: String = number.chars().skip(9).collect();
            let sub = if sub.is_empty() { "01".to_string() } else { sub };
            format!("{base}B{sub:0>2}")
        }
        _ => number,
    }
}

/// The format entry for a country, or `None` when the country is not in
/// the table. Absence is an ordinary answer, not an error.
pub fn vat_config(country_code: &str) -> Option<&'static CountryVatFormat> {
    table::lookup(country_code)
}

/// The localized country name.
///
/// Resolution runs through the entry's fallback chain (requested language
/// → English → first tracked name); an unknown country code comes back
/// verbatim as a last-resort display value.
pub fn country_name(country_code: &str, language: &str) -> String {
    match table::lookup(country_code) {
        Some(entry) => entry.name(language).to_string(),
        None => country_code.to_string(),
    }
}

/// The canonical example VAT number for a country, or a synthesized
/// `<CODE>12345678` placeholder when the country is unknown.
pub fn example_vat_number(country_code: &str) -> String {
    match table::lookup(country_code) {
        Some(entry) => entry.example.to_string(),
        None => format!("{country_code}12345678"),
    }
}

/// Metadata records for every country in the table, names localized to
/// `language`. Ordered by country code.
pub fn all_countries(language: &str) -> Vec<CountryInfo> {
    table::FORMATS
        .iter()
        .map(|(code, entry)| CountryInfo {
            code: code.to_string(),
            name: entry.name(language).to_string(),
            example: entry.example.to_string(),
            format: entry.format.to_string(),
        })
        .collect()
}

/// Every country's localized name keyed by country code.
pub fn country_names(language: &str) -> BTreeMap<&'static str, &'static str> {
    table::FORMATS
        .iter()
        .map(|(code, entry)| (*code, entry.name(language)))
        .collect()
}

/// The sorted, de-duplicated union of every language key in the table.
pub fn supported_languages() -> Vec<&'static str> {
    table::FORMATS
        .iter()
        .flat_map(|(_, entry)| entry.languages())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
