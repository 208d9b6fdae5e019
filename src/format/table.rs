//! Static per-country VAT format table.
//!
//! One entry per EU member state, covering the localized country names,
//! the display pattern (`#` = digit placeholder, letters literal), and a
//! canonical example number. Built once into the binary, never mutated;
//! sorted by country code for binary search.

/// VAT number metadata for one country.
#[derive(Debug)]
pub struct CountryVatFormat {
    /// `(language, name)` pairs; language keys are lower-case.
    names: &'static [(&'static str, &'static str)],
    /// Display pattern; `#` is a digit placeholder, letters are literal.
    pub format: &'static str,
    /// Canonical example VAT number, country prefix included.
    pub example: &'static str,
}

impl CountryVatFormat {
    /// Resolve the localized country name.
    ///
    /// Falls back through an ordered chain: requested language
    /// (case-insensitive) → English → first entry in the table.
    pub fn name(&self, language: &str) -> &'static str {
        let lang = language.to_ascii_lowercase();
        self.name_in(&lang)
            .or_else(|| self.name_in("en"))
            .or_else(|| self.names.first().map(|&(_, name)| name))
            .unwrap_or_default()
    }

    fn name_in(&self, language: &str) -> Option<&'static str> {
        self.names
            .iter()
            .find(|&&(lang, _)| lang == language)
            .map(|&(_, name)| name)
    }

    /// Language codes this entry carries names for.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> {
        self.names.iter().map(|&(lang, _)| lang)
    }
}

/// Look up the format entry for a country code (case-insensitive).
pub(crate) fn lookup(country_code: &str) -> Option<&'static CountryVatFormat> {
    let code = country_code.to_uppercase();
    FORMATS
        .binary_search_by(|&(c, _)| c.cmp(code.as_str()))
        .ok()
        .map(|i| &FORMATS[i].1)
}

/// All `(code, entry)` pairs, sorted by code.
pub(crate) static FORMATS: &[(&str, CountryVatFormat)] = &[
    (
        "AT",
        CountryVatFormat {
            names: &[("en", "Austria"), ("hu", "Ausztria"), ("de", "Österreich")],
            format: "U########",
            example: "ATU12345678",
        },
    ),
    (
        "BE",
        CountryVatFormat {
            names: &[
                ("en", "Belgium"),
                ("hu", "Belgium"),
                ("fr", "Belgique"),
                ("nl", "België"),
            ],
            format: "##########",
            example: "BE1234567890",
        },
    ),
    (
        "BG",
        CountryVatFormat {
            names: &[("en", "Bulgaria"), ("hu", "Bulgária"), ("bg", "България")],
            format: "#########",
            example: "BG123456789",
        },
    ),
    (
        "CY",
        CountryVatFormat {
            names: &[("en", "Cyprus"), ("hu", "Ciprus"), ("el", "Κύπρος")],
            format: "########L",
            example: "CY12345678X",
        },
    ),
    (
        "CZ",
        CountryVatFormat {
            names: &[
                ("en", "Czech Republic"),
                ("hu", "Csehország"),
                ("cs", "Česká republika"),
            ],
            format: "########",
            example: "CZ12345678",
        },
    ),
    (
        "DE",
        CountryVatFormat {
            names: &[
                ("en", "Germany"),
                ("hu", "Németország"),
                ("de", "Deutschland"),
            ],
            format: "#########",
            example: "DE123456789",
        },
    ),
    (
        "DK",
        CountryVatFormat {
            names: &[("en", "Denmark"), ("hu", "Dánia"), ("da", "Danmark")],
            format: "########",
            example: "DK12345678",
        },
    ),
    (
        "EE",
        CountryVatFormat {
            names: &[("en", "Estonia"), ("hu", "Észtország"), ("et", "Eesti")],
            format: "#########",
            example: "EE123456789",
        },
    ),
    (
        "EL",
        CountryVatFormat {
            names: &[("en", "Greece"), ("hu", "Görögország"), ("el", "Ελλάδα")],
            format: "#########",
            example: "EL123456789",
        },
    ),
    (
        "ES",
        CountryVatFormat {
            names: &[("en", "Spain"), ("hu", "Spanyolország"), ("es", "España")],
            format: "X########",
            example: "ESX12345678",
        },
    ),
    (
        "FI",
        CountryVatFormat {
            names: &[
                ("en", "Finland"),
                ("hu", "Finnország"),
                ("fi", "Suomi"),
                ("sv", "Finland"),
            ],
            format: "########",
            example: "FI12345678",
        },
    ),
    (
        "FR",
        CountryVatFormat {
            names: &[("en", "France"), ("hu", "Franciaország"), ("fr", "France")],
            format: "X##########",
            example: "FRX1234567890",
        },
    ),
    (
        "HR",
        CountryVatFormat {
            names: &[("en", "Croatia"), ("hu", "Horvátország"), ("hr", "Hrvatska")],
            format: "###########",
            example: "HR12345678901",
        },
    ),
    (
        "HU",
        CountryVatFormat {
            names: &[("en", "Hungary"), ("hu", "Magyarország")],
            format: "########",
            example: "HU12345678",
        },
    ),
    (
        "IE",
        CountryVatFormat {
            names: &[("en", "Ireland"), ("hu", "Írország"), ("ga", "Éire")],
            format: "#######L",
            example: "IE1234567WA",
        },
    ),
    (
        "IT",
        CountryVatFormat {
            names: &[("en", "Italy"), ("hu", "Olaszország"), ("it", "Italia")],
            format: "###########",
            example: "IT12345678901",
        },
    ),
    (
        "LT",
        CountryVatFormat {
            names: &[("en", "Lithuania"), ("hu", "Litvánia"), ("lt", "Lietuva")],
            format: "#########",
            example: "LT123456789",
        },
    ),
    (
        "LU",
        CountryVatFormat {
            names: &[
                ("en", "Luxembourg"),
                ("hu", "Luxemburg"),
                ("fr", "Luxembourg"),
                ("de", "Luxemburg"),
            ],
            format: "########",
            example: "LU12345678",
        },
    ),
    (
        "LV",
        CountryVatFormat {
            names: &[("en", "Latvia"), ("hu", "Lettország"), ("lv", "Latvija")],
            format: "###########",
            example: "LV12345678901",
        },
    ),
    (
        "MT",
        CountryVatFormat {
            names: &[("en", "Malta"), ("hu", "Málta"), ("mt", "Malta")],
            format: "########",
            example: "MT12345678",
        },
    ),
    (
        "NL",
        CountryVatFormat {
            names: &[
                ("en", "Netherlands"),
                ("hu", "Hollandia"),
                ("nl", "Nederland"),
            ],
            format: "#########B##",
            example: "NL123456789B01",
        },
    ),
    (
        "PL",
        CountryVatFormat {
            names: &[("en", "Poland"), ("hu", "Lengyelország"), ("pl", "Polska")],
            format: "##########",
            example: "PL1234567890",
        },
    ),
    (
        "PT",
        CountryVatFormat {
            names: &[("en", "Portugal"), ("hu", "Portugália"), ("pt", "Portugal")],
            format: "#########",
            example: "PT123456789",
        },
    ),
    (
        "RO",
        CountryVatFormat {
            names: &[("en", "Romania"), ("hu", "Románia"), ("ro", "România")],
            format: "##########",
            example: "RO1234567890",
        },
    ),
    (
        "SE",
        CountryVatFormat {
            names: &[("en", "Sweden"), ("hu", "Svédország"), ("sv", "Sverige")],
            format: "############",
            example: "SE123456789012",
        },
    ),
    (
        "SI",
        CountryVatFormat {
            names: &[("en", "Slovenia"), ("hu", "Szlovénia"), ("sl", "Slovenija")],
            format: "########",
            example: "SI12345678",
        },
    ),
    (
        "SK",
        CountryVatFormat {
            names: &[("en", "Slovakia"), ("hu", "Szlovákia"), ("sk", "Slovensko")],
            format: "##########",
            example: "SK1234567890",
        },
    ),
];
