use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            resolve::numeric_vector,
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// The strategy is chosen from the operand shapes; the first matching
    /// pair wins:
    ///
    /// | left    | right   | strategy                    |
    /// |---------|---------|-----------------------------|
    /// | number  | number  | `eval_scalar_scalar`        |
    /// | vector  | vector  | `eval_vector_vector`        |
    /// | vector  | number  | `eval_vector_scalar`        |
    /// | number  | vector  | `eval_scalar_vector`        |
    /// | matrix  | number  | `eval_matrix_scalar`        |
    /// | number  | matrix  | `eval_scalar_matrix`        |
    /// | matrix  | vector  | `eval_matrix_vector`        |
    /// | string  | string  | `eval_string_string`        |
    /// | string  | number  | `eval_string_count`         |
    /// | number  | string  | `eval_string_count`         |
    ///
    /// "vector" covers boolean vectors, read as `1` and `0`.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `op`: The operator.
    /// - `right`: Right operand.
    ///
    /// # Errors
    /// - [`RuntimeError::InvalidExpression`] if no shape pair matches, for
    ///   example a string vector or a boolean scalar operand.
    /// - Whatever the selected strategy raises.
    ///
    /// # Example
    /// ```
    /// use rcalc::{
    ///     Value,
    ///     ast::BinaryOperator,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let a = Value::from(vec![1.0, 2.0, 3.0]);
    /// let result = Context::eval_binary(&Value::from(4.0), BinaryOperator::Sub, &a).unwrap();
    /// assert_eq!(result, Value::from(vec![3.0, 2.0, 1.0]));
    /// ```
    pub fn eval_binary(left: &Value, op: BinaryOperator, right: &Value) -> EvalResult<Value> {
        use Value::{Matrix, Number, Str};

        match (left, numeric_vector(left), right, numeric_vector(right)) {
            (Number(a), _, Number(b), _) => Self::eval_scalar_scalar(*a, op, *b),
            (_, Some(a), _, Some(b)) => Self::eval_vector_vector(&a, op, &b),
            (_, Some(a), Number(b), _) => Self::eval_vector_scalar(&a, op, *b),
            (Number(a), _, _, Some(b)) => Self::eval_scalar_vector(*a, op, &b),
            (Matrix(m), _, Number(b), _) => Self::eval_matrix_scalar(m, op, *b),
            (Number(a), _, Matrix(m), _) => Self::eval_scalar_matrix(*a, op, m),
            (Matrix(m), _, _, Some(v)) => Self::eval_matrix_vector(m, op, &v),
            (Str(a), _, Str(b), _) => Self::eval_string_string(a, op, b),
            (Str(s), _, Number(n), _) | (Number(n), _, Str(s), _) => {
                Self::eval_string_count(s, op, *n)
            },
            _ => Err(RuntimeError::invalid(format!("cannot apply '{op}' to a {} and a {}",
                                                   left.shape(),
                                                   right.shape()))),
        }
    }
}
