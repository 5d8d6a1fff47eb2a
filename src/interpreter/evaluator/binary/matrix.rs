use std::iter;

use tracing::trace;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{broadcast::flip, scalar::arithmetic, vector::combine},
            core::{Context, EvalResult},
        },
        value::{core::Value, matrix::Matrix},
    },
};

impl Context<'_> {
    /// Evaluates `matrix op scalar` over every element.
    ///
    /// Arithmetic gives a matrix with the dimensions of `m`. Every other
    /// operator works on the flat column-major buffer as a vector would:
    /// comparisons and `&`/`|` give a boolean vector, `&&` and `||` a single
    /// boolean.
    ///
    /// # Example
    /// ```
    /// use rcalc::{Matrix, Value, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let m = Matrix::identity(2);
    /// assert_eq!(Context::eval_matrix_scalar(&m, BinaryOperator::Equal, 1.0),
    ///            Ok(Value::from(vec![true, false, false, true])));
    /// assert_eq!(Context::eval_matrix_scalar(&m, BinaryOperator::Or, 0.0),
    ///            Ok(Value::Bool(true)));
    /// ```
    pub fn eval_matrix_scalar(m: &Matrix, op: BinaryOperator, b: f64) -> EvalResult<Value> {
        trace!(strategy = "matrix-number", %op);

        if let Some(f) = arithmetic(op) {
            return Ok(m.map(|x| f(x, b)).into());
        }
        combine(op, m.as_slice().iter().copied().zip(iter::repeat(b)))
    }

    /// Evaluates `scalar op matrix`.
    ///
    /// `-`, `/` and `^` are computed in this orientation; other operators are
    /// flipped and evaluated as [`Context::eval_matrix_scalar`].
    pub fn eval_scalar_matrix(a: f64, op: BinaryOperator, m: &Matrix) -> EvalResult<Value> {
        trace!(strategy = "number-matrix", %op);

        match op {
            BinaryOperator::Sub | BinaryOperator::Div | BinaryOperator::Pow => {
                let f = arithmetic(op).ok_or(RuntimeError::unrecognised(op))?;
                Ok(m.map(|x| f(a, x)).into())
            },
            _ => Self::eval_matrix_scalar(m, flip(op)?, a),
        }
    }

    /// Multiplies a matrix by a vector.
    ///
    /// `out[j] = Σ_i m(i, j) · v[i]`; the result has one element per row.
    ///
    /// # Errors
    /// - [`RuntimeError::UnrecognisedOperator`] for any operator but `*`.
    /// - [`RuntimeError::ShapeMismatch`] if the column count differs from the
    ///   vector length.
    ///
    /// # Example
    /// ```
    /// use rcalc::{
    ///     Matrix, Value,
    ///     ast::BinaryOperator,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let m = Matrix::identity(2);
    /// assert_eq!(Context::eval_matrix_vector(&m, BinaryOperator::Mul, &[3.0, 4.0]),
    ///            Ok(Value::from(vec![3.0, 4.0])));
    /// assert!(Context::eval_matrix_vector(&m, BinaryOperator::Add, &[3.0, 4.0]).is_err());
    /// ```
    pub fn eval_matrix_vector(m: &Matrix, op: BinaryOperator, v: &[f64]) -> EvalResult<Value> {
        trace!(strategy = "matrix-vector", %op);

        if op != BinaryOperator::Mul {
            return Err(RuntimeError::unrecognised(op));
        }
        m.mul_vector(v).map(Value::from).ok_or_else(|| {
                                             RuntimeError::shape_mismatch(format!("Matrix size \
                                                                                   mismatch: {} \
                                                                                   columns, \
                                                                                   vector of \
                                                                                   length {}",
                                                                                  m.cols(),
                                                                                  v.len()))
                                         })
    }
}
