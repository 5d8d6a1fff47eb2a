use std::iter;

use tracing::trace;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::vector::combine,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `vector op scalar`, applying the scalar to every element.
    pub fn eval_vector_scalar(a: &[f64], op: BinaryOperator, b: f64) -> EvalResult<Value> {
        trace!(strategy = "vector-number", %op);
        combine(op, a.iter().copied().zip(iter::repeat(b)))
    }

    /// Evaluates `scalar op vector`.
    ///
    /// `-`, `/` and `^` are computed in this orientation. Every other operator
    /// is swapped with [`BinaryOperator::flipped`] and handed to
    /// [`Context::eval_vector_scalar`], so `2 > v` runs as `v < 2`.
    ///
    /// # Errors
    /// [`RuntimeError::InvalidExpression`] if the operator cannot be flipped.
    ///
    /// # Example
    /// ```
    /// use rcalc::{Value, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_scalar_vector(8.0, BinaryOperator::Div, &[2.0, 4.0]),
    ///            Ok(Value::from(vec![4.0, 2.0])));
    /// assert_eq!(Context::eval_scalar_vector(2.0, BinaryOperator::Greater, &[1.0, 3.0]),
    ///            Ok(Value::from(vec![true, false])));
    /// ```
    pub fn eval_scalar_vector(a: f64, op: BinaryOperator, b: &[f64]) -> EvalResult<Value> {
        trace!(strategy = "number-vector", %op);

        match op {
            BinaryOperator::Sub | BinaryOperator::Div | BinaryOperator::Pow => {
                combine(op, iter::repeat(a).zip(b.iter().copied()))
            },
            _ => Self::eval_vector_scalar(b, flip(op)?, a),
        }
    }
}

/// The operator for swapped operands.
///
/// # Errors
/// [`RuntimeError::InvalidExpression`] for `-`, `/` and `^`.
pub(super) fn flip(op: BinaryOperator) -> EvalResult<BinaryOperator> {
    op.flipped()
      .ok_or_else(|| RuntimeError::invalid(format!("Operator {op} is not commutative")))
}
