/// Strategy selection from the operand shapes.
pub mod core;

/// Number-number operations and the per-element operator tables shared by
/// the other strategies.
pub mod scalar;

/// Elementwise vector-vector operations.
pub mod vector;

/// Vector-scalar and scalar-vector broadcasting, including operand flips.
pub mod broadcast;

/// Matrix-scalar, scalar-matrix and matrix-vector operations.
pub mod matrix;

/// String concatenation and count-driven string operations.
pub mod string;
