/// Core value representation.
///
/// Defines the `Value` enum produced by evaluation and stored in the
/// environment, the `Shape` classification used for dispatch and messages,
/// and the `Display` formatting printed by the REPL.
pub mod core;
/// Dense matrix storage.
///
/// Defines the `Matrix` type: a flat, column-major `f64` buffer with its
/// dimensions, an identity constructor and grid formatting.
pub mod matrix;
