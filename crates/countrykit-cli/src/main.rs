//! countrykit-cli — Command-line interface for countrykit-core
//!
//! This binary provides a simple way to inspect the bundled country dataset
//! from your terminal. It supports listing countries, looking up a country by
//! ISO code, searching by name, filtering by region/currency/language,
//! printing dataset statistics, and validating cross-references.
//!
//! Usage examples
//! --------------
//!
//! - List all countries
//!   $ countrykit list
//!
//! - Show details for a country (ISO2 or ISO3, case-insensitive)
//!   $ countrykit info us
//!   $ countrykit info GBR
//!
//! - Search by name or native name
//!   $ countrykit search united
//!
//! - Filter by region, currency, or language
//!   $ countrykit region Europe
//!   $ countrykit currency USD
//!   $ countrykit language en
//!
//! - Machine-readable output
//!   $ countrykit --json info US
//!
//! By default the CLI uses the dataset bundled with `countrykit-core`. Use
//! `--data-dir <path>` to point at a directory with custom
//! countries/currencies/languages/dial-codes JSON files.

mod args;

use crate::args::{CliArgs, Commands};
use anyhow::bail;
use clap::Parser;
use countrykit_core::{Country, CountryDb};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let db_owned;
    let db: &CountryDb = match &args.data_dir {
        Some(dir) => {
            db_owned = CountryDb::load_from_dir(dir)?;
            &db_owned
        }
        None => CountryDb::load()?,
    };

    match args.command {
        Commands::List => {
            print_countries(db.countries().iter().collect(), args.json)?;
        }

        Commands::Info { code } => match db.find_by_code(&code) {
            Some(country) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(country)?);
                } else {
                    print_country(country);
                }
            }
            None => bail!("country not found: {code}"),
        },

        Commands::Search { query } => {
            print_countries(db.search_by_name(&query), args.json)?;
        }

        Commands::Region { name } => {
            print_countries(db.filter_by_region(&name), args.json)?;
        }

        Commands::Currency { code } => {
            print_countries(db.filter_by_currency(&code), args.json)?;
        }

        Commands::Language { code } => {
            print_countries(db.filter_by_language(&code), args.json)?;
        }

        Commands::Stats => {
            let stats = db.stats();
            if args.json {
                let payload = serde_json::json!({
                    "countries": stats.countries,
                    "regions": stats.regions,
                    "currencies": stats.currencies,
                    "languages": stats.languages,
                    "region_names": db.regions(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("Dataset statistics:");
                println!("  Countries:  {}", stats.countries);
                println!("  Regions:    {}", stats.regions);
                println!("  Currencies: {}", stats.currencies);
                println!("  Languages:  {}", stats.languages);
                println!("\nRegions: {}", db.regions().join(", "));
            }
        }

        Commands::Validate => {
            let issues = db.validate();
            if issues.is_empty() {
                println!("dataset OK ({} countries)", db.countries().len());
            } else {
                for issue in &issues {
                    eprintln!("{issue}");
                }
                bail!("{} dataset problem(s) found", issues.len());
            }
        }
    }

    Ok(())
}

/// One line per country, sorted by display name.
fn print_countries(mut list: Vec<&Country>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    if list.is_empty() {
        println!("no matches");
        return Ok(());
    }

    list.sort_by(|a, b| a.name().cmp(b.name()));
    println!("{} countries:", list.len());
    for country in list {
        println!("{} {:3} - {}", country.emoji(), country.cca2(), country.name());
    }
    Ok(())
}

fn print_country(country: &Country) {
    println!("{} {}", country.emoji(), country.name());
    println!("{}", "=".repeat(50));
    println!("Native name:  {}", country.native_name());
    println!(
        "ISO codes:    {} / {} / {}",
        country.cca2(),
        country.cca3(),
        country.ccn3()
    );
    println!("Calling code: {}", country.calling_code().unwrap_or("n/a"));
    println!("Capital:      {}", country.capital().unwrap_or("n/a"));
    println!(
        "Region:       {} ({})",
        country.region().unwrap_or("n/a"),
        country.subregion().unwrap_or("n/a")
    );
    println!("TLD:          {}", country.tld().unwrap_or("n/a"));

    let currencies: Vec<String> = country
        .currency
        .iter()
        .map(|c| format!("{} ({})", c.code, c.symbol))
        .collect();
    println!("Currencies:   {}", currencies.join(", "));

    let languages: Vec<&str> = country.languages.iter().map(|l| l.name.as_str()).collect();
    println!("Languages:    {}", languages.join(", "));
}
