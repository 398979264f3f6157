//! Error types for the oracle engine.

use thiserror::Error;

/// Alias for `Result<T, UnkeError>`.
pub type UnkeResult<T> = Result<T, UnkeError>;

/// Errors that can occur when loading or validating reference tables.
///
/// All of these are configuration errors: they are fatal at startup and
/// never occur during reading composition, which operates only on tables
/// that passed validation.
#[derive(Debug, Error)]
pub enum UnkeError {
    /// A reference table has no entries.
    #[error("table \"{0}\" is empty")]
    EmptyTable(&'static str),

    /// A fixed-size table has the wrong number of entries.
    #[error("table \"{name}\" must have {expected} entries, found {found}")]
    WrongLength {
        /// Name of the offending table.
        name: &'static str,
        /// Entry count required by the cycle arithmetic.
        expected: usize,
        /// Entry count actually supplied.
        found: usize,
    },

    /// Two misfortune records share the same code.
    #[error("duplicate misfortune code: \"{0}\"")]
    DuplicateCode(String),

    /// A branch code has no animal glyph mapped to it.
    #[error("no animal glyph for branch code \"{0}\"")]
    MissingAnimal(String),

    /// A custom table file could not be read.
    #[error("cannot read table file: {0}")]
    Io(#[from] std::io::Error),

    /// A custom table file is not valid JSON for the table schema.
    #[error("malformed table file: {0}")]
    Json(#[from] serde_json::Error),
}
