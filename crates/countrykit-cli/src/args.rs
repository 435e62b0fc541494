use clap::{Parser, Subcommand};

/// CLI arguments for countrykit-cli
#[derive(Debug, Parser)]
#[command(
    name = "countrykit",
    version,
    about = "Query the countrykit country reference dataset"
)]
pub struct CliArgs {
    /// Load the dataset from a directory instead of the bundled data
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all countries
    List,

    /// Show details for a country by ISO2 or ISO3 code
    Info {
        /// ISO2 or ISO3 code (e.g. US, GBR)
        code: String,
    },

    /// Search countries by name or native name
    Search {
        /// Substring to search (case-insensitive)
        query: String,
    },

    /// List all countries in a region
    Region {
        /// Region name (e.g. Asia, Europe)
        name: String,
    },

    /// List all countries using a currency
    Currency {
        /// Currency code (e.g. USD, EUR)
        code: String,
    },

    /// List all countries speaking a language
    Language {
        /// Language code (e.g. en, es)
        code: String,
    },

    /// Show a summary of the dataset contents
    Stats,

    /// Check the dataset for referential-integrity problems
    Validate,
}
