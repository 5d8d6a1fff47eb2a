//! # rcalc
//!
//! rcalc is an interactive calculator for a tiny R-like language written in
//! Rust. It evaluates one line at a time against an environment of variables
//! and supports numbers, strings, vectors, matrices, ranges and indexing.
//!
//! ```
//! use rcalc::{Environment, Value, interpret};
//!
//! let first = interpret("a <- 1:3", &Environment::new()).unwrap();
//! assert_eq!(first.value, None);
//!
//! let second = interpret("a * 2", &first.environment).unwrap();
//! assert_eq!(second.value, Some(Value::from(vec![2.0, 4.0, 6.0])));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{
    evaluator::core::{Context, Effect},
    parser::core::parse_command,
};

/// Defines the structure of parsed input.
///
/// This module declares the `Command` and `Expr` types that represent one
/// parsed line, together with the closed set of binary operators and builtin
/// functions.
///
/// # Responsibilities
/// - Defines the command forms: assignment, removal and evaluation.
/// - Defines expression nodes for literals, variables, operator chains,
///   ranges, indexing and builtin calls.
/// - Knows each operator's spelling and its form for swapped operands.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating a line, and the closed [`error::ErrorKind`]
/// classification over them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Carries the offending input, operator or index in each error.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the interpretation of one line.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the environment.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversions between `f64` and `usize` used for
/// counts, lengths and indices throughout the evaluator.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{
        environment::Environment,
        lexer::tokenize,
        value::{core::Value, matrix::Matrix},
    },
};

/// The result of interpreting one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The value to show, if the line produced one. Assignments and removals
    /// produce none.
    pub value:       Option<Value>,
    /// The environment to use for the next line. Equal to the input
    /// environment unless the line assigned or removed a variable.
    pub environment: Environment,
}

/// Interprets one line against an environment.
///
/// Empty or whitespace-only input produces no value and leaves the environment
/// unchanged. On error nothing changes; the caller keeps its environment.
///
/// # Errors
/// Returns an [`Error`] if the line cannot be tokenized, parsed or evaluated.
///
/// # Examples
/// ```
/// use rcalc::{Environment, Value, error::ErrorKind, interpret};
///
/// let env = Environment::new();
/// let outcome = interpret("2 ^ 8", &env).unwrap();
/// assert_eq!(outcome.value, Some(Value::Number(256.0)));
///
/// // Intentional error: `x` is not defined.
/// let err = interpret("x + 1", &env).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::SymbolNotFound);
/// ```
pub fn interpret(line: &str, environment: &Environment) -> Result<Outcome, Error> {
    let outcome = match execute(line, environment)? {
        Effect::Value(value) => Outcome { value:       Some(value),
                                          environment: environment.clone(), },
        Effect::Rebind(next) => Outcome { value:       None,
                                          environment: next, },
        Effect::Nothing => Outcome { value:       None,
                                     environment: environment.clone(), },
    };
    Ok(outcome)
}

/// Interprets one line, reporting environment changes through a callback.
///
/// `set_environment` is called at most once, synchronously, with the complete
/// new environment, and only when the line changed it. Removing an unbound
/// name is not a change.
///
/// # Errors
/// Returns an [`Error`] if the line cannot be tokenized, parsed or evaluated.
/// The callback is not called in that case.
///
/// # Examples
/// ```
/// use rcalc::{Environment, interpret_with};
///
/// let env = Environment::new();
/// let mut replaced = None;
/// let value = interpret_with("x <- 3", &env, |next| replaced = Some(next)).unwrap();
///
/// assert_eq!(value, None);
/// assert!(replaced.is_some_and(|next| next.contains("x")));
/// assert!(!env.contains("x"));
/// ```
pub fn interpret_with<F>(line: &str,
                         environment: &Environment,
                         set_environment: F)
                         -> Result<Option<Value>, Error>
    where F: FnOnce(Environment)
{
    match execute(line, environment)? {
        Effect::Value(value) => Ok(Some(value)),
        Effect::Rebind(next) => {
            set_environment(next);
            Ok(None)
        },
        Effect::Nothing => Ok(None),
    }
}

fn execute(line: &str, environment: &Environment) -> Result<Effect, Error> {
    if line.trim().is_empty() {
        return Ok(Effect::Nothing);
    }

    let tokens = tokenize(line)?;
    let command = parse_command(&tokens, line)?;
    let effect = Context::new(environment).eval_command(&command)?;

    if let Effect::Rebind(next) = &effect {
        debug!(bindings = next.len(), "environment replaced");
    }
    Ok(effect)
}
