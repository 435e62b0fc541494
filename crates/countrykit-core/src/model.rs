// crates/countrykit-core/src/model.rs

//! Record types for the country dataset.
//!
//! These mirror the JSON layout of the source files one to one. Optional
//! free-text attributes (`capital`, `region`, `subregion`, `tld`,
//! `calling_code`) are stored as empty strings in the dataset when absent;
//! the accessor methods translate that into `Option<&str>` so callers never
//! have to compare against `""` themselves.

use serde::{Deserialize, Serialize};

/// A currency used by a country, embedded in the country record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRef {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// A language spoken in a country, embedded in the country record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRef {
    pub code: String,
    pub name: String,
}

/// Flag display data for a country.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub svg: String,
}

/// A country entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub cca2: String,
    pub cca3: String,
    #[serde(default)]
    pub ccn3: String,
    pub name: String,
    #[serde(default)]
    pub native_name: String,
    #[serde(default)]
    pub calling_code: String,
    #[serde(default)]
    pub currency: Vec<CurrencyRef>,
    #[serde(default)]
    pub languages: Vec<LanguageRef>,
    #[serde(default)]
    pub flag: Flag,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub tld: String,
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn native_name(&self) -> &str {
        &self.native_name
    }

    pub fn cca2(&self) -> &str {
        &self.cca2
    }

    pub fn cca3(&self) -> &str {
        &self.cca3
    }

    pub fn ccn3(&self) -> &str {
        &self.ccn3
    }

    /// International dialing prefix including the leading `+`.
    pub fn calling_code(&self) -> Option<&str> {
        non_empty(&self.calling_code)
    }

    pub fn capital(&self) -> Option<&str> {
        non_empty(&self.capital)
    }

    pub fn region(&self) -> Option<&str> {
        non_empty(&self.region)
    }

    pub fn subregion(&self) -> Option<&str> {
        non_empty(&self.subregion)
    }

    pub fn tld(&self) -> Option<&str> {
        non_empty(&self.tld)
    }

    pub fn emoji(&self) -> &str {
        &self.flag.emoji
    }

    /// True if any of the country's currencies has this code
    /// (case-insensitive).
    pub fn uses_currency(&self, code: &str) -> bool {
        self.currency.iter().any(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// True if any of the country's languages has this code
    /// (case-insensitive).
    pub fn speaks_language(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l.code.eq_ignore_ascii_case(code))
    }
}

/// An entry of the global currency reference table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    /// cca2 codes of the countries using this currency.
    #[serde(default)]
    pub countries: Vec<String>,
}

/// An entry of the global language reference table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    /// cca2 codes of the countries speaking this language.
    #[serde(default)]
    pub countries: Vec<String>,
}

/// An entry of the dial-code reference table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialCode {
    /// `+`-prefixed dialing code.
    pub code: String,
    /// cca2 codes of the countries sharing this code.
    #[serde(default)]
    pub countries: Vec<String>,
}
