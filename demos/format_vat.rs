use vies::format::*;

fn main() {
    // Canonical formatting (no network required)
    println!("=== VAT Number Formatting ===\n");

    let inputs = [
        ("10773381", "HU"),
        ("U37893801", "AT"),
        ("37893801", "AT"),
        ("123456789", "NL"),
        ("12 345-678", "DE"),
        ("X1234567890", "FR"),
        ("999999", "ZZ"), // unknown country
    ];

    for (number, country) in &inputs {
        let formatted = format_vat_number(number, country);
        let example = example_vat_number(country);
        println!("  {country}: {number} => {formatted} (example: {example})");
    }

    // Localized country metadata
    println!("\n=== Country Metadata ===\n");

    for lang in ["en", "hu", "de"] {
        println!("  HU in {lang}: {}", country_name("HU", lang));
    }

    let countries = all_countries("en");
    println!("\n  {} countries in the table:", countries.len());
    for c in countries.iter().take(5) {
        println!("    {} {} — format {}, e.g. {}", c.code, c.name, c.format, c.example);
    }
    println!("    ...");

    let languages = supported_languages();
    println!("\n  {} supported languages: {}", languages.len(), languages.join(", "));
}
