use tracing::trace;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::scalar::{arithmetic, logic, relation},
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

/// Applies `op` to a sequence of operand pairs.
///
/// Arithmetic gives a vector, comparisons and `&`/`|` give a boolean vector.
/// `&&` collapses to one boolean that holds when every pair is true, `||` to
/// one that holds when any pair is.
pub(super) fn combine<I>(op: BinaryOperator, mut pairs: I) -> EvalResult<Value>
    where I: Iterator<Item = (f64, f64)>
{
    use BinaryOperator::{And, BitAnd, BitOr, Or};

    if let Some(f) = arithmetic(op) {
        return Ok(pairs.map(|(a, b)| f(a, b)).collect::<Vec<_>>().into());
    }
    if let Some(f) = relation(op) {
        return Ok(pairs.map(|(a, b)| f(a, b)).collect::<Vec<_>>().into());
    }

    let Some(f) = logic(op) else {
        return Err(RuntimeError::unrecognised(op));
    };
    match op {
        BitAnd | BitOr => Ok(pairs.map(|(a, b)| f(a, b)).collect::<Vec<_>>().into()),
        And => Ok(Value::Bool(pairs.all(|(a, b)| f(a, b)))),
        Or => Ok(Value::Bool(pairs.any(|(a, b)| f(a, b)))),
        _ => Err(RuntimeError::unrecognised(op)),
    }
}

impl Context<'_> {
    /// Evaluates an elementwise operation on two vectors of equal length.
    ///
    /// # Errors
    /// [`RuntimeError::ShapeMismatch`] naming both lengths when they differ.
    ///
    /// # Example
    /// ```
    /// use rcalc::{Value, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_vector_vector(&[1.0, 5.0], BinaryOperator::Less, &[2.0, 2.0]);
    /// assert_eq!(result, Ok(Value::from(vec![true, false])));
    ///
    /// assert!(Context::eval_vector_vector(&[1.0], BinaryOperator::Add, &[1.0, 2.0]).is_err());
    /// ```
    pub fn eval_vector_vector(a: &[f64], op: BinaryOperator, b: &[f64]) -> EvalResult<Value> {
        trace!(strategy = "vector-vector", %op);

        if a.len() != b.len() {
            return Err(RuntimeError::shape_mismatch(format!("Vector lengths do not match: {} \
                                                             and {}",
                                                            a.len(),
                                                            b.len())));
        }
        combine(op, a.iter().copied().zip(b.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_operators_collapse() {
        let a = [1.0, 0.0];
        let b = [1.0, 1.0];

        assert_eq!(Context::eval_vector_vector(&a, BinaryOperator::And, &b),
                   Ok(Value::Bool(false)));
        assert_eq!(Context::eval_vector_vector(&a, BinaryOperator::Or, &b),
                   Ok(Value::Bool(true)));
        assert_eq!(Context::eval_vector_vector(&a, BinaryOperator::BitAnd, &b),
                   Ok(Value::from(vec![true, false])));
    }

    #[test]
    fn mismatch_names_both_lengths() {
        let err = Context::eval_vector_vector(&[1.0, 2.0], BinaryOperator::Add, &[1.0]).unwrap_err();
        assert_eq!(err.to_string(), "Vector lengths do not match: 2 and 1");
    }
}
