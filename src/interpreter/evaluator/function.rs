use crate::{
    ast::{Builtin, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, MAX_SEQUENCE_LEN},
        value::{core::Value, matrix::Matrix},
    },
    util::num::f64_to_usize_checked,
};

impl Context<'_> {
    /// Evaluates a builtin function call.
    ///
    /// | function      | result                     |
    /// |---------------|----------------------------|
    /// | `identity(n)` | the `n` × `n` identity matrix |
    ///
    /// # Errors
    /// [`RuntimeError::TypeMismatch`] if the argument of `identity` is not a
    /// non-negative integer.
    ///
    /// # Example
    /// ```
    /// use rcalc::{
    ///     Environment, Matrix, Value,
    ///     ast::{Builtin, Expr},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let env = Environment::new();
    /// let m = Context::new(&env).eval_function_call(Builtin::Identity, &Expr::number(3.0));
    /// assert_eq!(m, Ok(Value::from(Matrix::identity(3))));
    /// ```
    pub fn eval_function_call(&self, function: Builtin, argument: &Expr) -> EvalResult<Value> {
        match function {
            Builtin::Identity => {
                let n = self.as_numeric(argument)?;
                let mismatch = RuntimeError::type_mismatch(format!("{function}() expects a \
                                                                    non-negative integer, found \
                                                                    {n}"));
                let size = f64_to_usize_checked(n, mismatch)?;
                if size.saturating_mul(size) > MAX_SEQUENCE_LEN {
                    return Err(RuntimeError::invalid(format!("{function}({size}) is too large")));
                }
                Ok(Matrix::identity(size).into())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, interpreter::environment::Environment};

    #[test]
    fn identity_requires_a_whole_number() {
        let env = Environment::new();
        let context = Context::new(&env);

        for n in [-1.0, 1.5, f64::NAN] {
            let err = context.eval_function_call(Builtin::Identity, &Expr::number(n))
                             .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TypeMismatch, "identity({n})");
        }
        assert_eq!(context.eval_function_call(Builtin::Identity, &Expr::number(0.0)),
                   Ok(Value::from(Matrix::identity(0))));
    }
}
