//! # Error Handling
//!
//! Centralized error type for the `rules-sync` library, built with
//! `thiserror`. Every variant carries enough context to point the user at
//! the offending input: a malformed directive keeps the literal source line,
//! an invalid mapping keeps the spec string as typed.
//!
//! The command layer of the binary wraps these in `anyhow` for presentation;
//! inside the library the `Result<T>` alias is used throughout.

use thiserror::Error;

/// Main error type for rules-sync operations
#[derive(Error, Debug)]
pub enum Error {
    /// An open directive whose identifier list is empty after trimming and
    /// splitting. Carries the literal offending line.
    ///
    /// Parsing stops at the first malformed directive; no output is
    /// composed for any target.
    #[error("Malformed directive, no targets specified: '{line}'")]
    MalformedDirective { line: String },

    /// A `--map` specification that does not parse as `TARGET:PATH`.
    #[error("Invalid mapping '{value}': {message}")]
    Mapping { value: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
