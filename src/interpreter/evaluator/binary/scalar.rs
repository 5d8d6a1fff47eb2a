use tracing::trace;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// The boolean reading of a number: non-zero and not `NaN`.
#[must_use]
pub fn truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Returns the function for an arithmetic operator, `None` for any other.
#[must_use]
pub fn arithmetic(op: BinaryOperator) -> Option<fn(f64, f64) -> f64> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add => Some(|a: f64, b: f64| a + b),
        Sub => Some(|a: f64, b: f64| a - b),
        Mul => Some(|a: f64, b: f64| a * b),
        Div => Some(|a: f64, b: f64| a / b),
        Pow => Some(f64::powf),
        _ => None,
    }
}

/// Returns the predicate for a relational operator, `None` for any other.
///
/// Comparison is exact; there is no tolerance.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn relation(op: BinaryOperator) -> Option<fn(f64, f64) -> bool> {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    match op {
        Equal => Some(|a: f64, b: f64| a == b),
        NotEqual => Some(|a: f64, b: f64| a != b),
        Less => Some(|a: f64, b: f64| a < b),
        Greater => Some(|a: f64, b: f64| a > b),
        LessEqual => Some(|a: f64, b: f64| a <= b),
        GreaterEqual => Some(|a: f64, b: f64| a >= b),
        _ => None,
    }
}

/// Returns the predicate for a logical operator (`&&`, `||`, `&`, `|`) over
/// the boolean readings of two numbers.
#[must_use]
pub fn logic(op: BinaryOperator) -> Option<fn(f64, f64) -> bool> {
    use BinaryOperator::{And, BitAnd, BitOr, Or};

    match op {
        And | BitAnd => Some(|a: f64, b: f64| truthy(a) && truthy(b)),
        Or | BitOr => Some(|a: f64, b: f64| truthy(a) || truthy(b)),
        _ => None,
    }
}

impl Context<'_> {
    /// Evaluates an operation on two numbers.
    ///
    /// Arithmetic follows IEEE 754, so division by zero gives an infinity or
    /// `NaN` rather than an error. Comparisons and `&&`/`||` give booleans.
    ///
    /// # Errors
    /// [`RuntimeError::UnrecognisedOperator`] for `&` and `|`, with a hint
    /// pointing at `&&` and `||`.
    ///
    /// # Example
    /// ```
    /// use rcalc::{Value, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_scalar_scalar(2.0, BinaryOperator::Pow, 8.0),
    ///            Ok(Value::Number(256.0)));
    /// assert_eq!(Context::eval_scalar_scalar(0.0, BinaryOperator::Or, 3.0),
    ///            Ok(Value::Bool(true)));
    /// assert!(Context::eval_scalar_scalar(1.0, BinaryOperator::BitAnd, 1.0).is_err());
    /// ```
    pub fn eval_scalar_scalar(a: f64, op: BinaryOperator, b: f64) -> EvalResult<Value> {
        trace!(strategy = "number-number", %op);

        if let Some(f) = arithmetic(op) {
            return Ok(Value::Number(f(a, b)));
        }
        if let Some(f) = relation(op) {
            return Ok(Value::Bool(f(a, b)));
        }
        match op {
            BinaryOperator::And | BinaryOperator::Or => {
                Ok(Value::Bool(logic(op).is_some_and(|f| f(a, b))))
            },
            BinaryOperator::BitAnd | BinaryOperator::BitOr => {
                let logical = if op == BinaryOperator::BitAnd { "&&" } else { "||" };
                Err(RuntimeError::UnrecognisedOperator { operator: op,
                                                         hint:     Some(format!("use {logical} to \
                                                                                 compare numbers")), })
            },
            _ => Err(RuntimeError::unrecognised(op)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(truthy(-1.0));
        assert!(truthy(f64::INFINITY));
        assert!(!truthy(0.0));
        assert!(!truthy(f64::NAN));
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(Context::eval_scalar_scalar(1.0, BinaryOperator::Div, 0.0),
                   Ok(Value::Number(f64::INFINITY)));
        let Ok(Value::Number(nan)) = Context::eval_scalar_scalar(0.0, BinaryOperator::Div, 0.0)
        else {
            panic!("expected a number");
        };
        assert!(nan.is_nan());
    }

    #[test]
    fn bitwise_operators_carry_a_hint() {
        let err = Context::eval_scalar_scalar(1.0, BinaryOperator::BitOr, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "Unrecognised operator: | (use || to compare numbers)");
    }
}
