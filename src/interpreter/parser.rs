/// Command classification and the expression entry point.
///
/// Decides which command form a token sequence has (assignment, removal or a
/// plain expression) and makes sure every token is consumed.
pub mod core;

/// Binary operator chains.
///
/// Chains have no precedence; every operator applies to the result so far.
pub mod binary;

/// Primary expressions and ranges.
///
/// Literals, names, builtin calls, indexing and the `:` range forms.
pub mod primary;

/// Small token helpers shared by the parsing routines.
pub mod utils;
