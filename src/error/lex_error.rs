use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur while tokenizing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No token pattern matched at some position.
    #[error("Unrecognised input: {fragment}")]
    UnrecognisedInput {
        /// Up to ten characters of the unmatched remainder, trimmed.
        fragment: String,
    },
}

impl LexError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::LexError
    }
}
