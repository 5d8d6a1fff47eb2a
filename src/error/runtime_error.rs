use thiserror::Error;

use crate::{ast::BinaryOperator, error::ErrorKind};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Tried to use a name with no binding.
    #[error("Symbol not found: {name}")]
    SymbolNotFound {
        /// The name of the variable.
        name: String,
    },
    /// A value did not have the shape its context requires.
    #[error("Type mismatch: {details}")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// Operands of an elementwise or matrix operation have incompatible sizes.
    #[error("{details}")]
    ShapeMismatch {
        /// Details naming both sizes.
        details: String,
    },
    /// The operator is not defined for the operand shapes.
    #[error("Unrecognised operator: {operator}{}", hint_suffix(.hint.as_deref()))]
    UnrecognisedOperator {
        /// The offending operator.
        operator: BinaryOperator,
        /// Optional guidance, such as which operator to use instead.
        hint:     Option<String>,
    },
    /// No evaluation rule matches the operands.
    #[error("Invalid expression: {details}")]
    InvalidExpression {
        /// Details about the operands.
        details: String,
    },
    /// Tried to access an element outside the 1-based bounds of a vector.
    #[error("Index out of range: {index}/{length}")]
    IndexOutOfRange {
        /// The index that was requested.
        index:  f64,
        /// The length of the indexed vector.
        length: usize,
    },
}

fn hint_suffix(hint: Option<&str>) -> String {
    hint.map_or_else(String::new, |h| format!(" ({h})"))
}

impl RuntimeError {
    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SymbolNotFound { .. } => ErrorKind::SymbolNotFound,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            Self::UnrecognisedOperator { .. } => ErrorKind::UnrecognisedOperator,
            Self::InvalidExpression { .. } => ErrorKind::InvalidExpression,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }

    /// Builds an `UnrecognisedOperator` error without a hint.
    #[must_use]
    pub const fn unrecognised(operator: BinaryOperator) -> Self {
        Self::UnrecognisedOperator { operator,
                                     hint: None }
    }

    /// Builds an `InvalidExpression` error from any message.
    pub fn invalid(details: impl Into<String>) -> Self {
        Self::InvalidExpression { details: details.into() }
    }

    /// Builds a `TypeMismatch` error from any message.
    pub fn type_mismatch(details: impl Into<String>) -> Self {
        Self::TypeMismatch { details: details.into() }
    }

    /// Builds a `ShapeMismatch` error from any message.
    pub fn shape_mismatch(details: impl Into<String>) -> Self {
        Self::ShapeMismatch { details: details.into() }
    }
}
