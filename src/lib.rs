//! # vies
//!
//! Client library for the EU [VIES](https://ec.europa.eu/taxation_customs/vies/)
//! VAT number validation service: canonical VAT number formatting,
//! localized per-country metadata, and REST API checks with explicit
//! match-confidence semantics.
//!
//! The two halves compose but do not depend on each other: the
//! [`format`] module is pure string work over a static country table;
//! the [`client`] module talks to the VIES REST API and folds every
//! failure mode into a typed result instead of returning errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use vies::format::{country_name, format_vat_number};
//!
//! // Normalize free-form input into the canonical prefixed form
//! assert_eq!(format_vat_number("u 12345678", "at"), "ATU12345678");
//! assert_eq!(format_vat_number("123456789", "NL"), "NL123456789B01");
//!
//! // Localized country metadata
//! assert_eq!(country_name("HU", "hu"), "Magyarország");
//! assert_eq!(country_name("HU", "xyz"), "Hungary"); // falls back to English
//! ```
//!
//! Checking a number against VIES (async, requires network):
//!
//! ```no_run
//! # async fn run() -> Result<(), vies::client::TransportError> {
//! use vies::{CheckVatRequest, client::ViesClient};
//!
//! let client = ViesClient::new()?;
//! let result = client
//!     .check_vat_number(&CheckVatRequest::new("HU", "10773381"))
//!     .await;
//!
//! if result.has_error() {
//!     eprintln!("check failed: {:?}", result.error_message());
//! } else {
//!     println!("valid: {}, trader: {:?}", result.valid, result.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `client` (default) | Async REST client (`reqwest`, `serde_json`, `tracing`) |
//!
//! Without `client` the crate is dependency-light and fully offline:
//! formatting, lookups, and the result model remain available.

pub mod format;
pub mod model;

#[cfg(feature = "client")]
pub mod client;

// Re-export the model types at crate root for convenience
pub use crate::model::*;

#[cfg(feature = "client")]
pub use crate::client::{ViesClient, ViesConfig};
