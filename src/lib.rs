//! `confpick`: typed field extraction from JSON configuration files.
//!
//! A [`ConfigLoader`] reads a JSON document from disk exactly once, records
//! whether the load succeeded, and projects named top-level fields into
//! strongly-typed values in a single call:
//!
//! ```no_run
//! use confpick::ConfigLoader;
//!
//! let loader = ConfigLoader::open("settings.json");
//! assert!(loader.is_valid(), "{}", loader.error());
//!
//! let (age, name): (i64, String) = loader.extract(&["age", "name"])?;
//! println!("{name} is {age}");
//! # Ok::<(), confpick::ExtractError>(())
//! ```
//!
//! Load failures (missing file, malformed JSON) are absorbed into the
//! loader and reported through [`ConfigLoader::is_valid`] and
//! [`ConfigLoader::error`]; extraction failures (missing key, wrong type)
//! are returned to the caller per call. The two channels never mix.

pub mod error;
pub mod extract;
pub mod loader;

pub use error::{ExtractError, LoadError};
pub use extract::FieldSet;
pub use loader::ConfigLoader;
