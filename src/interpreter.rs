/// The environment module holds variable bindings between lines.
///
/// An [`environment::Environment`] is an immutable snapshot. Assignments and
/// removals build a new snapshot; the caller decides when to replace the old
/// one.
pub mod environment;
/// The evaluator module executes parsed commands and computes results.
///
/// The evaluator walks the expression tree, resolves operands against the
/// environment and applies operators according to the shapes of their
/// operands. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions, ranges, indexing and builtin calls.
/// - Selects a shape-pair strategy for every binary operation.
/// - Reports runtime errors such as unknown symbols, shape mismatches and
///   unsupported operators.
pub mod evaluator;
/// The lexer module tokenizes one input line.
///
/// The lexer reads the raw line and produces tokens for numbers, strings,
/// names, operators, assignment arrows and brackets. Unicode operator
/// spellings are normalized here. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Handles numeric and string literals, names and operators.
/// - Reports the unmatched input when a character sequence is not a token.
pub mod lexer;
/// The parser module classifies tokens into a command.
///
/// The parser decides whether a line is an assignment, a removal or an
/// expression, and builds the expression tree for it.
///
/// # Responsibilities
/// - Converts tokens into a [`crate::ast::Command`] carrying
///   [`crate::ast::Expr`] trees.
/// - Rejects token sequences that form no supported command.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values produced by evaluation and stored in the
/// environment: numbers, strings, booleans, vectors of each and matrices.
///
/// # Responsibilities
/// - Defines the `Value` enum, its `Shape` and its printed form.
/// - Provides the dense `Matrix` storage type.
pub mod value;
