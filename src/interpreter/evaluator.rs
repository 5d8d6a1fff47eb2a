/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the expression walker and command
/// execution, which turns a parsed command into a value or a new environment.
pub mod core;

/// Operand resolution.
///
/// Evaluates an expression and requires a particular shape of the result,
/// with errors that name the variable involved.
pub mod resolve;

/// Binary operator evaluation logic.
///
/// Selects a strategy from the shapes of both operands and applies the
/// operator: scalar, vector, broadcast, matrix and string rules.
pub mod binary;

/// Evaluation of `start : end` and `start : step : end` ranges.
pub mod range;

/// Evaluation of `name[index]` with scalar and vector indices.
pub mod index;

/// Builtin function calls.
pub mod function;
