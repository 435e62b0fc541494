//! Error handling example for countrykit-core
//!
//! This example demonstrates proper error handling and edge cases

use countrykit_core::{CountryDb, Result};

fn main() -> Result<()> {
    println!("=== CountryKit Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading the dataset with error handling ---");
    let db = match CountryDb::load() {
        Ok(db) => {
            println!("✓ Dataset loaded successfully");
            println!("  Countries: {}", db.countries().len());
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to load dataset: {e}");
            return Err(e);
        }
    };
    println!();

    // Example 2: Lookups that find nothing return None, not an error
    println!("--- Example 2: Searching for non-existent countries ---");
    for code in ["XX", "YY", "ZZ"] {
        match db.find_by_cca2(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.cca2()),
            None => println!("  Not found: {code}"),
        }
    }
    println!();

    // Example 3: Malformed input simply yields no matches
    println!("--- Example 3: Handling invalid ISO codes ---");
    for code in ["", "A", "ABCD", "123"] {
        match db.find_by_code(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.cca2()),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 4: Collection queries return empty lists for zero matches
    println!("--- Example 4: Empty results are not errors ---");
    println!("  Region 'Atlantis': {} matches", db.filter_by_region("Atlantis").len());
    println!("  Currency 'XXX': {} matches", db.filter_by_currency("XXX").len());
    println!("  Search '': {} matches", db.search_by_name("").len());
    println!();

    // Example 5: Loading from a directory that does not exist is fatal
    println!("--- Example 5: Load failure from a bad directory ---");
    match CountryDb::load_from_dir("/no/such/dataset") {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(e) => println!("  Load failed as expected: {e}"),
    }

    Ok(())
}
