use tracing::trace;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, MAX_SEQUENCE_LEN},
        value::core::Value,
    },
    util::num::f64_to_count,
};

impl Context<'_> {
    /// Evaluates an operation on two strings.
    ///
    /// # Errors
    /// [`RuntimeError::InvalidExpression`] for anything but `+`.
    ///
    /// # Example
    /// ```
    /// use rcalc::{Value, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_string_string("ab", BinaryOperator::Add, "cd"),
    ///            Ok(Value::from("abcd")));
    /// assert!(Context::eval_string_string("ab", BinaryOperator::Equal, "ab").is_err());
    /// ```
    pub fn eval_string_string(a: &str, op: BinaryOperator, b: &str) -> EvalResult<Value> {
        trace!(strategy = "string-string", %op);

        match op {
            BinaryOperator::Add => Ok(Value::Str(format!("{a}{b}"))),
            _ => Err(RuntimeError::invalid(format!("strings only support '+', found '{op}'"))),
        }
    }

    /// Evaluates an operation between a string and a count.
    ///
    /// The operand order does not matter. The count is floored and clamped to
    /// zero; lengths are measured in characters.
    ///
    /// | op  | result                                       |
    /// |-----|----------------------------------------------|
    /// | `+` | repeat the string up to `len + n` characters |
    /// | `-` | the first `len - n` characters               |
    /// | `*` | the string repeated `n` times                |
    /// | `/` | the first `len / n` characters               |
    ///
    /// Dividing by a zero count leaves the string unchanged.
    ///
    /// # Errors
    /// - [`RuntimeError::UnrecognisedOperator`] for any other operator.
    /// - [`RuntimeError::InvalidExpression`] if the result would be longer
    ///   than [`MAX_SEQUENCE_LEN`] characters.
    ///
    /// # Example
    /// ```
    /// use rcalc::{Value, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_string_count("a", BinaryOperator::Add, 2.0),
    ///            Ok(Value::from("aaa")));
    /// assert_eq!(Context::eval_string_count("ccccc", BinaryOperator::Div, 5.0),
    ///            Ok(Value::from("c")));
    /// ```
    pub fn eval_string_count(s: &str, op: BinaryOperator, n: f64) -> EvalResult<Value> {
        trace!(strategy = "string-number", %op);

        let count = f64_to_count(n);
        let len = s.chars().count();

        let target = match op {
            BinaryOperator::Add => len.saturating_add(count),
            BinaryOperator::Sub => len.saturating_sub(count),
            BinaryOperator::Mul => len.saturating_mul(count),
            BinaryOperator::Div => len.checked_div(count).unwrap_or(len),
            _ => return Err(RuntimeError::unrecognised(op)),
        };
        if target > MAX_SEQUENCE_LEN {
            return Err(RuntimeError::invalid(format!("string result of {target} characters is \
                                                      too long")));
        }

        Ok(Value::Str(s.chars().cycle().take(target).collect()))
    }
}
