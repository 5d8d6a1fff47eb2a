use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, MAX_SEQUENCE_LEN},
        value::core::Value,
    },
    util::num::f64_to_usize_checked,
};

impl Context<'_> {
    /// Evaluates an inclusive range.
    ///
    /// The direction comes from the bounds: the sequence descends when `end`
    /// is below `start`. Only the magnitude of `step` is used; its sign always
    /// follows the direction. The length is `floor((end - start) / step) + 1`,
    /// so `end` is included only when a step lands on it.
    ///
    /// # Parameters
    /// - `start`: First element.
    /// - `step`: Step expression, `1` when absent.
    /// - `end`: Inclusive bound.
    ///
    /// # Errors
    /// - [`RuntimeError::TypeMismatch`] if a part is not a number.
    /// - [`RuntimeError::InvalidExpression`] for a zero or non-finite step,
    ///   non-finite bounds, or more than [`MAX_SEQUENCE_LEN`] elements.
    ///
    /// # Example
    /// ```
    /// use rcalc::{Environment, Value, ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let env = Environment::new();
    /// let context = Context::new(&env);
    /// let range = context.eval_range(&Expr::number(9.0),
    ///                                Some(&Expr::number(3.0)),
    ///                                &Expr::number(1.0));
    ///
    /// assert_eq!(range, Ok(Value::from(vec![9.0, 6.0, 3.0])));
    /// ```
    pub fn eval_range(&self, start: &Expr, step: Option<&Expr>, end: &Expr) -> EvalResult<Value> {
        let first = self.as_numeric(start)?;
        let step = step.map_or(Ok(1.0), |expr| self.as_numeric(expr))?;
        let last = self.as_numeric(end)?;

        if !first.is_finite() || !last.is_finite() {
            return Err(RuntimeError::invalid(format!("range bounds must be finite, found \
                                                      {first}:{last}")));
        }
        if step == 0.0 || !step.is_finite() {
            return Err(RuntimeError::invalid(format!("range step must be a non-zero number, \
                                                      found {step}")));
        }

        let step = if last < first { -step.abs() } else { step.abs() };
        let too_long =
            || RuntimeError::invalid(format!("range {first}:{last} has too many elements"));
        let count = f64_to_usize_checked(((last - first) / step).floor() + 1.0, too_long())?;
        if count > MAX_SEQUENCE_LEN {
            return Err(too_long());
        }
        let count = u32::try_from(count).map_err(|_| too_long())?;
        trace!(first, step, count, "range");

        Ok((0..count).map(|k| f64::from(k).mul_add(step, first))
                     .collect::<Vec<_>>()
                     .into())
    }
}
