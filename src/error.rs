//! Error types for `confpick`.
//!
//! Loading and extraction are two deliberately separate failure channels:
//! [`LoadError`] covers construction-time problems (unreadable file,
//! malformed JSON) and is absorbed into the loader's state, while
//! [`ExtractError`] covers per-call schema problems (missing key, wrong
//! type) on an otherwise valid document and is returned to the caller.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Load-Time Errors
// ============================================================================

/// Construction-time failure: the configuration file could not be turned
/// into a document.
///
/// [`ConfigLoader::open`](crate::ConfigLoader::open) absorbs this into the
/// loader and renders it through
/// [`ConfigLoader::error`](crate::ConfigLoader::error);
/// [`ConfigLoader::try_open`](crate::ConfigLoader::try_open) returns it
/// directly.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not well-formed JSON.
    #[error("parse error in {path} at line {line}, column {column}: {message}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,
        /// Line where the parser gave up (1-based).
        line: usize,
        /// Column where the parser gave up (1-based).
        column: usize,
        /// Diagnostic text from the parser.
        message: String,
    },
}

// ============================================================================
// Extraction Errors
// ============================================================================

/// Per-call failure raised by typed extraction on a loaded document.
///
/// These are schema errors discovered at the call site. They never change
/// the loader's validity and are never folded into
/// [`ConfigLoader::error`](crate::ConfigLoader::error).
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A requested field is not a top-level key of the document.
    #[error("field '{field}' not found in document")]
    KeyNotFound {
        /// Name of the missing field.
        field: String,
    },

    /// A field exists but its value does not convert to the requested type.
    #[error("field '{field}' has an incompatible type: {message}")]
    TypeMismatch {
        /// Name of the offending field.
        field: String,
        /// Diagnostic from the conversion.
        message: String,
    },

    /// The number of field names does not match the requested tuple arity.
    #[error("expected {expected} field names, got {actual}")]
    ArityMismatch {
        /// Arity of the requested tuple.
        expected: usize,
        /// Number of field names supplied.
        actual: usize,
    },
}

// ============================================================================
// Tests
// ============================================================================
