// crates/countrykit-core/src/loader/mod.rs

//! # Dataset loader
//!
//! Handles the physical layer (file I/O, optional gzip) and hands the four
//! parsed tables to [`CountryDb::build`]. Either every source file loads or
//! the whole operation fails; there is no partial dataset.
//!
//! With the `embedded` feature (default) the bundled `data/` directory is
//! compiled into the library and [`CountryDb::load`] parses it exactly once
//! per process behind a `OnceCell`, so no caller can observe a partially
//! built index.

use crate::db::CountryDb;
use crate::error::{CountryKitError, Result};
use crate::model::{Country, Currency, DialCode, Language};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "embedded")]
use once_cell::sync::OnceCell;

pub const COUNTRIES_FILE: &str = "countries.json";
pub const CURRENCIES_FILE: &str = "currencies.json";
pub const LANGUAGES_FILE: &str = "languages.json";
pub const DIAL_CODES_FILE: &str = "dial-codes.json";

#[cfg(feature = "embedded")]
static DB_CACHE: OnceCell<CountryDb> = OnceCell::new();

impl CountryDb {
    /// Load the bundled dataset.
    ///
    /// The first call parses and indexes the embedded data; subsequent calls
    /// return the same instance. A parse failure here means the bundled data
    /// is corrupt and the library cannot operate.
    #[cfg(feature = "embedded")]
    pub fn load() -> Result<&'static CountryDb> {
        DB_CACHE.get_or_try_init(Self::load_embedded)
    }

    #[cfg(feature = "embedded")]
    fn load_embedded() -> Result<CountryDb> {
        let countries = parse_table(
            COUNTRIES_FILE,
            include_str!("../../data/countries.json"),
        )?;
        let currencies = parse_table(
            CURRENCIES_FILE,
            include_str!("../../data/currencies.json"),
        )?;
        let languages = parse_table(
            LANGUAGES_FILE,
            include_str!("../../data/languages.json"),
        )?;
        let dial_codes = parse_table(
            DIAL_CODES_FILE,
            include_str!("../../data/dial-codes.json"),
        )?;
        CountryDb::build(countries, currencies, languages, dial_codes)
    }

    /// Load a dataset from a directory containing the four source files.
    ///
    /// With the `compact` feature, a `<name>.json.gz` file is accepted in
    /// place of any missing `<name>.json`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<CountryDb> {
        let dir = dir.as_ref();
        let countries: Vec<Country> = read_table(dir, COUNTRIES_FILE)?;
        let currencies: Vec<Currency> = read_table(dir, CURRENCIES_FILE)?;
        let languages: Vec<Language> = read_table(dir, LANGUAGES_FILE)?;
        let dial_codes: Vec<DialCode> = read_table(dir, DIAL_CODES_FILE)?;
        CountryDb::build(countries, currencies, languages, dial_codes)
    }

    /// Directory holding the bundled source files, for tooling and tests.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }
}

#[cfg(feature = "embedded")]
fn parse_table<T: DeserializeOwned>(file: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| CountryKitError::Parse {
        file: file.to_string(),
        source,
    })
}

fn read_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T> {
    let plain = dir.join(file);

    #[cfg(feature = "compact")]
    let path = if plain.exists() {
        plain
    } else {
        dir.join(format!("{file}.gz"))
    };
    #[cfg(not(feature = "compact"))]
    let path = plain;

    let reader = open_stream(&path)?;
    serde_json::from_reader(reader).map_err(|source| CountryKitError::Parse {
        file: file.to_string(),
        source,
    })
}

/// Opens a file, buffers it, and optionally wraps it in a gzip decoder.
/// Returns a generic reader so the caller doesn't care about compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CountryKitError::Missing {
            path: path.to_path_buf(),
        },
        _ => CountryKitError::Io(e),
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        return Ok(Box::new(flate2::read::GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_bundled_data_dir() {
        let db = CountryDb::load_from_dir(CountryDb::default_data_dir()).unwrap();
        assert!(!db.countries().is_empty());
        assert!(db.find_by_cca2("US").is_some());
    }

    #[test]
    fn missing_directory_is_a_missing_file_error() {
        let err = CountryDb::load_from_dir("/nonexistent/countrykit").unwrap_err();
        assert!(matches!(err, CountryKitError::Missing { .. }));
    }

    #[cfg(feature = "embedded")]
    #[test]
    fn load_returns_the_same_instance() {
        let a = CountryDb::load().unwrap();
        let b = CountryDb::load().unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
