//! Construction-time loading of a JSON configuration document.
//!
//! The load happens exactly once, synchronously, when the loader is built.
//! Afterwards the loader is immutable: validity and diagnostic text never
//! change, and the document lives exactly as long as the loader.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ExtractError, LoadError};
use crate::extract::FieldSet;

/// Outcome of the one-time load performed at construction.
///
/// Both states are terminal; nothing transitions a loader between them.
#[derive(Debug)]
enum DocumentState {
    /// The file parsed; the document is owned by the loader.
    Loaded(Value),
    /// The file was missing, unreadable or malformed; the message says why.
    Failed(String),
}

/// Loads a JSON configuration file once and serves typed projections of
/// its top-level fields.
///
/// A loader is always constructed, even when the file cannot be used:
/// [`open`](Self::open) records the failure instead of returning it, and
/// [`is_valid`](Self::is_valid) / [`error`](Self::error) report it
/// afterwards. Callers that prefer load failures as hard errors use
/// [`try_open`](Self::try_open).
///
/// The document is immutable once constructed, so shared references may
/// extract concurrently; there is no reload and no interior mutability.
#[derive(Debug)]
pub struct ConfigLoader {
    path: PathBuf,
    state: DocumentState,
}

impl ConfigLoader {
    /// Opens and parses `path`, absorbing any failure into the loader.
    ///
    /// Check [`is_valid`](Self::is_valid) before extracting; a failed
    /// loader serves defaults silently (see [`extract`](Self::extract)).
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match load_document(&path) {
            Ok(document) => {
                debug!(path = %path.display(), "configuration loaded");
                DocumentState::Loaded(document)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "configuration load failed");
                DocumentState::Failed(err.to_string())
            }
        };

        Self { path, state }
    }

    /// Opens and parses `path`, returning load failures to the caller.
    ///
    /// An `Ok` loader is guaranteed valid, which makes the
    /// default-on-invalid behavior of [`extract`](Self::extract)
    /// unreachable through this constructor.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] when the file cannot be read and
    /// [`LoadError::Parse`] when its contents are not well-formed JSON.
    pub fn try_open(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let document = load_document(&path)?;
        debug!(path = %path.display(), "configuration loaded");

        Ok(Self {
            path,
            state: DocumentState::Loaded(document),
        })
    }

    /// Returns whether construction produced a usable document.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.state, DocumentState::Loaded(_))
    }

    /// Returns the load diagnostic, or the empty string when the loader is
    /// valid.
    #[must_use]
    pub fn error(&self) -> &str {
        match &self.state {
            DocumentState::Loaded(_) => "",
            DocumentState::Failed(message) => message,
        }
    }

    /// Returns the path given at construction, verbatim.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the parsed document, or `None` when the load failed.
    #[must_use]
    pub const fn document(&self) -> Option<&Value> {
        match &self.state {
            DocumentState::Loaded(document) => Some(document),
            DocumentState::Failed(_) => None,
        }
    }

    /// Extracts `fields` as a tuple of typed values, in request order.
    ///
    /// ```no_run
    /// use confpick::ConfigLoader;
    ///
    /// let loader = ConfigLoader::open("settings.json");
    /// let (age, name): (i64, String) = loader.extract(&["age", "name"])?;
    /// # Ok::<(), confpick::ExtractError>(())
    /// ```
    ///
    /// On a loader whose load failed this returns the **default value** of
    /// the requested tuple: no lookup and no error. That short-circuit is
    /// part of the contract (it is what the `Default` bound is for), but
    /// it cannot distinguish "no data" from "every field happens to be
    /// default". Check [`is_valid`](Self::is_valid) first, or construct
    /// with [`try_open`](Self::try_open) to rule the case out entirely.
    ///
    /// # Errors
    ///
    /// On a valid loader: [`ExtractError::KeyNotFound`] when a field is
    /// absent, [`ExtractError::TypeMismatch`] when a value does not
    /// convert, and [`ExtractError::ArityMismatch`] when `fields.len()`
    /// differs from the tuple arity. Extraction errors never change the
    /// loader's validity.
    pub fn extract<S>(&self, fields: &[&str]) -> Result<S, ExtractError>
    where
        S: FieldSet + Default,
    {
        match &self.state {
            DocumentState::Loaded(document) => S::extract_from(document, fields),
            DocumentState::Failed(_) => Ok(S::default()),
        }
    }

    /// Extracts a single typed field.
    ///
    /// Convenience for [`extract`](Self::extract) with a one-element tuple;
    /// it shares that method's contract, including the default-on-invalid
    /// short-circuit.
    ///
    /// # Errors
    ///
    /// Same as [`extract`](Self::extract).
    pub fn get<T>(&self, field: &str) -> Result<T, ExtractError>
    where
        T: DeserializeOwned + Default,
    {
        self.extract::<(T,)>(&[field]).map(|(value,)| value)
    }
}

/// Reads and parses `path` as a JSON document.
fn load_document(path: &Path) -> Result<Value, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Strip a UTF-8 BOM if present.
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    serde_json::from_str(raw).map_err(|err| LoadError::Parse {
        path: path.to_path_buf(),
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
