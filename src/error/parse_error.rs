use thiserror::Error;

use crate::error::ErrorKind;

/// Represents all errors that can occur while classifying a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token sequence matches no supported command form.
    #[error("Command not recognised: '{input}'")]
    CommandNotRecognised {
        /// The input line as typed, trimmed.
        input: String,
    },
    /// The sequence has a recognisable form that can never be valid, such as
    /// a lone operator or `rm` applied to a literal.
    #[error("Invalid expression: {details}")]
    InvalidExpression {
        /// What was wrong with the expression.
        details: String,
    },
}

impl ParseError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CommandNotRecognised { .. } => ErrorKind::CommandNotRecognised,
            Self::InvalidExpression { .. } => ErrorKind::InvalidExpression,
        }
    }
}
