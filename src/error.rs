/// Lexing errors.
///
/// Raised by the tokenizer when a line contains a character sequence that no
/// token pattern accepts.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when a token sequence does not form any supported command, or forms
/// a command whose shape is known to be invalid before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while resolving operands and
/// applying operators: unknown symbols, shape and type mismatches,
/// unsupported operators and out-of-range indices.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// The category of a failure.
///
/// Every error surfaced by [`crate::interpret`] belongs to exactly one kind.
/// Callers that only need to branch on the category (for example to decide
/// how to colour a message) can match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognized character sequence during tokenization.
    LexError,
    /// A name has no binding in the environment.
    SymbolNotFound,
    /// A value does not have the shape required by its context.
    TypeMismatch,
    /// Elementwise operands of incompatible length or dimension.
    ShapeMismatch,
    /// The operator is not valid for the operand shapes.
    UnrecognisedOperator,
    /// The expression matches no supported shape pair or form.
    InvalidExpression,
    /// A 1-based index is below 1 or beyond the sequence length.
    IndexOutOfRange,
    /// The line matches no supported command form.
    CommandNotRecognised,
}

/// Any failure produced while interpreting one line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens could not be parsed into a command.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The command failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use rcalc::{Environment, error::ErrorKind, interpret};
    ///
    /// let err = interpret("missing", &Environment::new()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::SymbolNotFound);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::LexError,
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}
