// crates/countrykit-core/src/db.rs

//! In-memory database and query layer.
//!
//! [`CountryDb`] owns the four parsed tables plus the derived keyed indices
//! (cca2, cca3, calling code). Everything is built once and never mutated,
//! so all query methods take `&self` and are safe to call concurrently.
//!
//! Single-entity lookups return `Option`; collection queries return a
//! possibly-empty `Vec` in the stored dataset order. Zero matches is a valid
//! result, never an error.

use crate::error::{CountryKitError, Result};
use crate::model::{Country, Currency, DialCode, Language};
use crate::text::{contains_folded, equals_folded};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Aggregate statistics for the loaded dataset.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DbStats {
    pub countries: usize,
    pub regions: usize,
    pub currencies: usize,
    pub languages: usize,
}

/// The loaded dataset with its derived indices.
#[derive(Debug)]
pub struct CountryDb {
    countries: Vec<Country>,
    currencies: Vec<Currency>,
    languages: Vec<Language>,
    dial_codes: Vec<DialCode>,
    // Indices store positions into `countries` so the records themselves
    // stay unduplicated.
    by_cca2: HashMap<String, usize>,
    by_cca3: HashMap<String, usize>,
    by_calling_code: HashMap<String, Vec<usize>>,
}

/// Ensure a calling code carries its leading `+`.
fn normalize_calling_code(code: &str) -> String {
    let code = code.trim();
    if code.starts_with('+') {
        code.to_string()
    } else {
        format!("+{code}")
    }
}

impl CountryDb {
    /// Build the database and its indices from the four parsed tables.
    ///
    /// Fails if a country carries an empty or duplicate ISO code: those are
    /// the index keys, and silently dropping a record would leave the
    /// dataset partially indexed.
    pub fn build(
        countries: Vec<Country>,
        currencies: Vec<Currency>,
        languages: Vec<Language>,
        dial_codes: Vec<DialCode>,
    ) -> Result<Self> {
        let mut by_cca2 = HashMap::with_capacity(countries.len());
        let mut by_cca3 = HashMap::with_capacity(countries.len());
        let mut by_calling_code: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, country) in countries.iter().enumerate() {
            if country.cca2.is_empty() || country.cca3.is_empty() {
                return Err(CountryKitError::InvalidData(format!(
                    "country {:?} has an empty ISO code",
                    country.name
                )));
            }
            if by_cca2.insert(country.cca2.to_uppercase(), idx).is_some() {
                return Err(CountryKitError::InvalidData(format!(
                    "duplicate cca2 code {:?}",
                    country.cca2
                )));
            }
            if by_cca3.insert(country.cca3.to_uppercase(), idx).is_some() {
                return Err(CountryKitError::InvalidData(format!(
                    "duplicate cca3 code {:?}",
                    country.cca3
                )));
            }
            if let Some(code) = country.calling_code() {
                by_calling_code
                    .entry(normalize_calling_code(code))
                    .or_default()
                    .push(idx);
            }
        }

        Ok(CountryDb {
            countries,
            currencies,
            languages,
            dial_codes,
            by_cca2,
            by_cca3,
            by_calling_code,
        })
    }

    /// All countries in the stored dataset order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// The full currency reference table.
    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    /// The full language reference table.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// The full dial-code reference table.
    pub fn dial_codes(&self) -> &[DialCode] {
        &self.dial_codes
    }

    /// Find a country by ISO 3166-1 alpha-2 code, case-insensitive
    /// (e.g. "US", "gb").
    pub fn find_by_cca2(&self, code: &str) -> Option<&Country> {
        self.by_cca2
            .get(&code.trim().to_uppercase())
            .map(|&idx| &self.countries[idx])
    }

    /// Find a country by ISO 3166-1 alpha-3 code, case-insensitive
    /// (e.g. "USA", "gbr").
    pub fn find_by_cca3(&self, code: &str) -> Option<&Country> {
        self.by_cca3
            .get(&code.trim().to_uppercase())
            .map(|&idx| &self.countries[idx])
    }

    /// Find a country by either alpha-2 or alpha-3 code, trying alpha-2
    /// first. Handy for user-supplied input like a CLI argument.
    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        self.find_by_cca2(code).or_else(|| self.find_by_cca3(code))
    }

    /// All countries sharing a calling code. The leading `+` is optional:
    /// `"1"` and `"+1"` address the same entry.
    pub fn find_by_calling_code(&self, code: &str) -> Vec<&Country> {
        self.by_calling_code
            .get(&normalize_calling_code(code))
            .map(|ids| ids.iter().map(|&idx| &self.countries[idx]).collect())
            .unwrap_or_default()
    }

    /// All countries in a region, matched case-insensitively.
    pub fn filter_by_region(&self, region: &str) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| c.region().is_some_and(|r| equals_folded(r, region)))
            .collect()
    }

    /// All countries in a subregion, matched case-insensitively.
    pub fn filter_by_subregion(&self, subregion: &str) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| c.subregion().is_some_and(|s| equals_folded(s, subregion)))
            .collect()
    }

    /// All countries using a currency, by its code (case-insensitive).
    pub fn filter_by_currency(&self, code: &str) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| c.uses_currency(code))
            .collect()
    }

    /// All countries speaking a language, by its code (case-insensitive).
    pub fn filter_by_language(&self, code: &str) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| c.speaks_language(code))
            .collect()
    }

    /// Countries whose name or native name contains the query,
    /// case-insensitive. An empty query matches nothing.
    pub fn search_by_name(&self, query: &str) -> Vec<&Country> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.countries
            .iter()
            .filter(|c| {
                contains_folded(&c.name, query) || contains_folded(&c.native_name, query)
            })
            .collect()
    }

    /// Distinct non-empty region names, sorted alphabetically.
    pub fn regions(&self) -> Vec<&str> {
        self.countries
            .iter()
            .filter_map(|c| c.region())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct non-empty subregion names, sorted alphabetically.
    pub fn subregions(&self) -> Vec<&str> {
        self.countries
            .iter()
            .filter_map(|c| c.subregion())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            regions: self.regions().len(),
            currencies: self.currencies.len(),
            languages: self.languages.len(),
        }
    }

    /// Best-effort referential-integrity report.
    ///
    /// Loading does not enforce cross-references between countries and the
    /// reference tables; a broken reference degrades individual queries
    /// rather than making the dataset unusable. This check surfaces such
    /// problems explicitly, one message per finding.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        // Codes are folded like the query layer folds them, so a record the
        // filters can resolve is never reported as broken.
        let currency_codes: HashSet<String> =
            self.currencies.iter().map(|c| c.code.to_uppercase()).collect();
        let language_codes: HashSet<String> =
            self.languages.iter().map(|l| l.code.to_uppercase()).collect();

        for country in &self.countries {
            if let Some(code) = country.calling_code() {
                if !code.starts_with('+') {
                    issues.push(format!(
                        "{}: calling code {code:?} missing leading '+'",
                        country.cca2
                    ));
                }
            }
            for currency in &country.currency {
                if !currency_codes.contains(&currency.code.to_uppercase()) {
                    issues.push(format!(
                        "{}: currency {:?} not in the currency table",
                        country.cca2, currency.code
                    ));
                }
            }
            for language in &country.languages {
                if !language_codes.contains(&language.code.to_uppercase()) {
                    issues.push(format!(
                        "{}: language {:?} not in the language table",
                        country.cca2, language.code
                    ));
                }
            }
        }

        for currency in &self.currencies {
            for cca2 in &currency.countries {
                if !self.by_cca2.contains_key(&cca2.to_uppercase()) {
                    issues.push(format!(
                        "currency {}: unknown country {cca2:?}",
                        currency.code
                    ));
                }
            }
        }
        for language in &self.languages {
            for cca2 in &language.countries {
                if !self.by_cca2.contains_key(&cca2.to_uppercase()) {
                    issues.push(format!(
                        "language {}: unknown country {cca2:?}",
                        language.code
                    ));
                }
            }
        }
        for dial in &self.dial_codes {
            if !dial.code.starts_with('+') {
                issues.push(format!("dial code {:?} missing leading '+'", dial.code));
            }
            for cca2 in &dial.countries {
                if !self.by_cca2.contains_key(&cca2.to_uppercase()) {
                    issues.push(format!("dial code {}: unknown country {cca2:?}", dial.code));
                }
            }
        }

        issues
    }
}
