use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::f64_to_usize_truncated,
};

/// Turns a 1-based index into a 0-based position.
///
/// The bounds check happens before truncation: for a vector of length 2,
/// `1.9` selects the first element while `2.5` is out of range.
fn position(index: f64, length: usize) -> EvalResult<usize> {
    let out_of_range = RuntimeError::IndexOutOfRange { index, length };
    if !(1.0..=length_as_f64(length)).contains(&index) {
        return Err(out_of_range);
    }
    Ok(f64_to_usize_truncated(index, out_of_range)? - 1)
}

#[allow(clippy::cast_precision_loss)]
const fn length_as_f64(length: usize) -> f64 {
    length as f64
}

/// The element of `target` at `p`.
fn element(target: &Value, p: usize) -> EvalResult<Value> {
    match target {
        Value::Vector(v) => Ok(Value::Number(v[p])),
        Value::BoolVector(v) => Ok(Value::Bool(v[p])),
        Value::StrVector(v) => Ok(Value::Str(v[p].clone())),
        other => Err(RuntimeError::type_mismatch(format!("cannot index a {}", other.shape()))),
    }
}

/// The elements of `target` at `positions`, as a vector of the same kind.
fn gather(target: &Value, positions: &[usize]) -> EvalResult<Value> {
    match target {
        Value::Vector(v) => Ok(positions.iter().map(|&p| v[p]).collect::<Vec<_>>().into()),
        Value::BoolVector(v) => Ok(positions.iter().map(|&p| v[p]).collect::<Vec<_>>().into()),
        Value::StrVector(v) => {
            Ok(positions.iter().map(|&p| v[p].clone()).collect::<Vec<_>>().into())
        },
        other => Err(RuntimeError::type_mismatch(format!("cannot index a {}", other.shape()))),
    }
}

impl Context<'_> {
    /// Evaluates `target[index]`.
    ///
    /// Indices are 1-based and the upper bound is inclusive. A numeric index
    /// selects one element. A vector index (usually a range) gathers the
    /// elements in the order given, so `a[3:1]` reverses the first three.
    ///
    /// # Parameters
    /// - `target`: Name of a numeric, boolean or string vector.
    /// - `index`: Index expression.
    ///
    /// # Errors
    /// - [`RuntimeError::SymbolNotFound`] if `target` is unbound.
    /// - [`RuntimeError::TypeMismatch`] if `target` is not a vector or `index`
    ///   is neither a number nor a vector.
    /// - [`RuntimeError::IndexOutOfRange`] for any index below 1 or above the
    ///   length.
    ///
    /// # Example
    /// ```
    /// use rcalc::{Environment, Value, ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let env = Environment::new().with_binding("a", Value::from(vec![10.0, 20.0, 30.0]));
    /// let context = Context::new(&env);
    ///
    /// assert_eq!(context.eval_index("a", &Expr::number(3.0)), Ok(Value::Number(30.0)));
    /// assert!(context.eval_index("a", &Expr::number(4.0)).is_err());
    /// ```
    pub fn eval_index(&self, target: &str, index: &Expr) -> EvalResult<Value> {
        let value = self.lookup(target)?;
        let Some(length) = value.vector_len() else {
            return Err(RuntimeError::type_mismatch(format!("Variable '{target}' does not \
                                                            contain a vector value")));
        };

        if self.is_numeric(index) {
            let i = self.as_numeric(index)?;
            return element(&value, position(i, length)?);
        }

        let positions = self.as_vector(index)?
                            .iter()
                            .map(|&i| position(i, length))
                            .collect::<EvalResult<Vec<_>>>()?;
        gather(&value, &positions)
    }
}
