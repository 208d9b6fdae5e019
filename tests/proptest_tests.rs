//! Property-based tests for VAT number formatting.
//!
//! Run with: `cargo test --test proptest_tests`

use proptest::prelude::*;
use vies::format::*;

/// Country codes present in the format table.
fn arb_known_country() -> impl Strategy<Value = String> {
    prop::sample::select(
        all_countries("en")
            .into_iter()
            .map(|c| c.code)
            .collect::<Vec<_>>(),
    )
}

/// Free-form user input: digits, letters, separators, stray case.
fn arb_raw_input() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 -]{0,16}"
}

proptest! {
    /// Formatting twice gives the same answer as formatting once.
    #[test]
    fn formatting_is_idempotent(raw in arb_raw_input(), country in arb_known_country()) {
        let once = format_vat_number(&raw, &country);
        let twice = format_vat_number(&once, &country);
        prop_assert_eq!(once, twice);
    }

    /// Non-blank input always comes back prefixed with the country code.
    #[test]
    fn output_carries_country_prefix(raw in arb_raw_input(), country in arb_known_country()) {
        prop_assume!(!raw.trim().is_empty());
        let formatted = format_vat_number(&raw, &country);
        prop_assert!(
            formatted.starts_with(&country),
            "{} does not start with {}", formatted, country
        );
    }

    /// Separators never survive normalization of non-blank input.
    #[test]
    fn output_has_no_separators(raw in arb_raw_input(), country in arb_known_country()) {
        prop_assume!(!raw.trim().is_empty());
        let formatted = format_vat_number(&raw, &country);
        prop_assert!(!formatted.contains(' '));
        prop_assert!(!formatted.contains('-'));
    }

    /// Lower-case input and country codes normalize to upper case.
    #[test]
    fn output_is_upper_cased(raw in "[a-z0-9]{1,12}", country in arb_known_country()) {
        let formatted = format_vat_number(&raw, &country.to_lowercase());
        prop_assert_eq!(formatted.clone(), formatted.to_uppercase());
    }

    /// Unknown country codes still produce the generic prefixed form.
    #[test]
    fn unknown_country_prefixes_generically(raw in "[0-9]{1,12}") {
        let formatted = format_vat_number(&raw, "ZZ");
        prop_assert_eq!(formatted, format!("ZZ{raw}"));
    }
}
