// crates/countrykit-core/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CountryKitError>;

/// Errors raised while loading the dataset.
///
/// Load failures are fatal: the library cannot operate on a partial dataset,
/// so none of these are retried or recovered from. "No match" on a lookup is
/// *not* an error; queries return `Option`/empty `Vec` for that.
#[derive(Debug, Error)]
pub enum CountryKitError {
    #[error("dataset file not found: {path}")]
    Missing { path: PathBuf },

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid dataset: {0}")]
    InvalidData(String),
}
