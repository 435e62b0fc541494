// crates/countrykit-core/src/lib.rs

//! Country reference data with ISO codes, calling codes, currencies,
//! languages, regions and flags.
//!
//! The dataset is loaded once (either the bundled copy via
//! [`CountryDb::load`] or an external directory via
//! [`CountryDb::load_from_dir`]) and is immutable afterwards. All query
//! methods borrow the database, so a single instance can serve any number of
//! threads without synchronization.
//!
//! ```no_run
//! use countrykit_core::CountryDb;
//!
//! let db = CountryDb::load()?;
//! if let Some(us) = db.find_by_cca2("us") {
//!     println!("{} {}", us.flag.emoji, us.name());
//! }
//! # Ok::<(), countrykit_core::CountryKitError>(())
//! ```

pub mod db;
pub mod error;
pub mod loader;
pub mod model;
pub mod text;

// Re-exports
pub use crate::db::{CountryDb, DbStats};
pub use crate::error::{CountryKitError, Result};
pub use crate::model::{Country, Currency, CurrencyRef, DialCode, Flag, Language, LanguageRef};
