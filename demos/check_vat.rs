use vies::client::{TransportError, ViesClient};
use vies::format::format_vat_number;
use vies::model::CheckVatRequest;

#[tokio::main]
async fn main() -> Result<(), TransportError> {
    // Live VIES checks — requires network access.
    let client = ViesClient::new()?;

    println!("=== VIES Service Status ===\n");

    let status = client.check_status().await;
    println!("  service available: {}", status.available);
    for country in status.countries.iter().take(10) {
        println!("    {}: {:?}", country.country_code, country.availability);
    }

    println!("\n=== VAT Number Checks ===\n");

    let checks = [("HU", "10773381"), ("DE", "123456789")];

    for (country, number) in &checks {
        let canonical = format_vat_number(number, country);
        let result = client
            .check_vat_number(&CheckVatRequest::new(*country, *number))
            .await;

        println!("  {canonical}:");
        if result.has_error() {
            println!("    check failed: {}", result.error_message().unwrap_or("unknown"));
            continue;
        }
        println!("    valid: {}", result.valid);
        println!("    name: {}", result.name.as_deref().unwrap_or("—"));
        println!("    address: {}", result.address.as_deref().unwrap_or("—"));
        if let Some(id) = &result.request_identifier {
            println!("    consultation id: {id}");
        }
    }

    Ok(())
}
