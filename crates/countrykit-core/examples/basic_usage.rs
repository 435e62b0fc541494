//! Basic usage example for countrykit-core
//!
//! This example demonstrates how to:
//! - Load the bundled country dataset
//! - Look up countries by ISO and calling codes
//! - Filter by region, currency, and language
//! - Search by name

use countrykit_core::{CountryDb, Result};

fn main() -> Result<()> {
    println!("=== CountryKit Basic Usage Example ===\n");

    // Load the database (parsed once per process)
    let db = CountryDb::load()?;
    println!("Loaded {} countries\n", db.countries().len());

    // Example 1: Find a country by ISO2 code
    println!("--- Example 1: Find country by ISO2 code ---");
    if let Some(country) = db.find_by_cca2("US") {
        println!("Found: {} {}", country.emoji(), country.name());
        println!("ISO: {} / {} / {}", country.cca2(), country.cca3(), country.ccn3());
        println!("Calling code: {}", country.calling_code().unwrap_or("n/a"));
        println!("Capital: {}", country.capital().unwrap_or("n/a"));
    }
    println!();

    // Example 2: Countries sharing a calling code
    println!("--- Example 2: Countries with calling code +1 ---");
    for country in db.find_by_calling_code("+1") {
        println!("- {}", country.name());
    }
    println!();

    // Example 3: Filter by region
    println!("--- Example 3: Countries in Europe ---");
    let europe = db.filter_by_region("Europe");
    println!("European countries: {}", europe.len());
    for country in europe.iter().take(5) {
        println!("- {}", country.name());
    }
    println!("... and {} more\n", europe.len().saturating_sub(5));

    // Example 4: Filter by currency and language
    println!("--- Example 4: Currency and language filters ---");
    let eur = db.filter_by_currency("EUR");
    println!("Countries using EUR: {}", eur.len());
    let en = db.filter_by_language("en");
    println!("English-speaking countries: {}\n", en.len());

    // Example 5: Search by name or native name
    println!("--- Example 5: Search for \"united\" ---");
    for country in db.search_by_name("united") {
        println!("{} {} - {}", country.emoji(), country.cca2(), country.name());
    }
    println!();

    // Example 6: Regions and statistics
    println!("--- Example 6: Regions and statistics ---");
    println!("Regions: {}", db.regions().join(", "));
    let stats = db.stats();
    println!(
        "Countries: {}, Regions: {}, Currencies: {}, Languages: {}",
        stats.countries, stats.regions, stats.currencies, stats.languages
    );

    println!("\n=== Example completed successfully ===");
    Ok(())
}
