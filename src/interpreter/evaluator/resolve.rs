use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            core::{Shape, Value},
            matrix::Matrix,
        },
    },
};

/// Returns the elements of a numeric or boolean vector as numbers.
///
/// Booleans become `1` and `0`. Any other shape gives `None`.
///
/// # Example
/// ```
/// use rcalc::{Value, interpreter::evaluator::resolve::numeric_vector};
///
/// let flags = Value::from(vec![true, false]);
/// assert_eq!(numeric_vector(&flags).as_deref(), Some(&vec![1.0, 0.0]));
/// assert_eq!(numeric_vector(&Value::from(1.0)), None);
/// ```
#[must_use]
pub fn numeric_vector(value: &Value) -> Option<Rc<Vec<f64>>> {
    match value {
        Value::Vector(v) => Some(Rc::clone(v)),
        Value::BoolVector(v) => Some(Rc::new(v.iter().map(|&b| f64::from(u8::from(b))).collect())),
        _ => None,
    }
}

/// Builds the mismatch error for `expr`, naming the variable when there is
/// one.
fn mismatch(expr: &Expr, value: &Value, expected: Shape) -> RuntimeError {
    match expr {
        Expr::Variable { name } => {
            RuntimeError::type_mismatch(format!("Variable '{name}' does not contain a {expected} \
                                                 value"))
        },
        _ => RuntimeError::type_mismatch(format!("expected a {expected}, found a {}",
                                                 value.shape())),
    }
}

impl Context<'_> {
    /// Evaluates `expr` and requires a number.
    ///
    /// # Errors
    /// - [`RuntimeError::SymbolNotFound`] for an unbound variable.
    /// - [`RuntimeError::TypeMismatch`] if the value is not a number.
    ///
    /// # Example
    /// ```
    /// use rcalc::{Environment, Value, ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let env = Environment::new().with_binding("s", Value::from("text"));
    /// let context = Context::new(&env);
    ///
    /// assert_eq!(context.as_numeric(&Expr::number(2.0)), Ok(2.0));
    /// assert!(context.as_numeric(&Expr::variable("s")).is_err());
    /// ```
    pub fn as_numeric(&self, expr: &Expr) -> EvalResult<f64> {
        match self.eval(expr)? {
            Value::Number(n) => Ok(n),
            other => Err(mismatch(expr, &other, Shape::Number)),
        }
    }

    /// Evaluates `expr` and requires a string.
    pub fn as_string(&self, expr: &Expr) -> EvalResult<String> {
        match self.eval(expr)? {
            Value::Str(s) => Ok(s),
            other => Err(mismatch(expr, &other, Shape::Str)),
        }
    }

    /// Evaluates `expr` and requires a numeric or boolean vector.
    ///
    /// Boolean vectors are coerced with `true` as `1` and `false` as `0`.
    pub fn as_vector(&self, expr: &Expr) -> EvalResult<Rc<Vec<f64>>> {
        let value = self.eval(expr)?;
        numeric_vector(&value).ok_or_else(|| mismatch(expr, &value, Shape::Vector))
    }

    /// Evaluates `expr` and requires a matrix.
    pub fn as_matrix(&self, expr: &Expr) -> EvalResult<Rc<Matrix>> {
        match self.eval(expr)? {
            Value::Matrix(m) => Ok(m),
            other => Err(mismatch(expr, &other, Shape::Matrix)),
        }
    }

    /// Returns `true` if `expr` evaluates to a number. Never fails.
    #[must_use]
    pub fn is_numeric(&self, expr: &Expr) -> bool {
        matches!(self.eval(expr), Ok(Value::Number(_)))
    }

    /// Returns `true` if `expr` evaluates to a string. Never fails.
    #[must_use]
    pub fn is_string(&self, expr: &Expr) -> bool {
        matches!(self.eval(expr), Ok(Value::Str(_)))
    }

    /// Returns `true` if `expr` evaluates to a numeric or boolean vector.
    #[must_use]
    pub fn is_vector(&self, expr: &Expr) -> bool {
        self.eval(expr).is_ok_and(|value| numeric_vector(&value).is_some())
    }

    /// Returns `true` if `expr` evaluates to a matrix. Never fails.
    #[must_use]
    pub fn is_matrix(&self, expr: &Expr) -> bool {
        matches!(self.eval(expr), Ok(Value::Matrix(_)))
    }
}
