use tracing::debug;

use crate::{
    ast::{Command, Expr},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Upper bound on the number of elements a single operation may produce.
///
/// Applies to ranges, identity matrices and repeated strings.
pub const MAX_SEQUENCE_LEN: usize = 1 << 24;

/// Stores the runtime evaluation context.
///
/// A context borrows one environment snapshot and never changes it. Commands
/// that rebind names report the replacement through [`Effect::Rebind`].
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    environment: &'a Environment,
}

/// What executing a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// An expression result to show to the user.
    Value(Value),
    /// The complete environment that replaces the current one.
    Rebind(Environment),
    /// Neither a value nor a change, such as removing an absent name.
    Nothing,
}

impl<'a> Context<'a> {
    /// Creates a context over an environment snapshot.
    #[must_use]
    pub const fn new(environment: &'a Environment) -> Self {
        Self { environment }
    }

    /// Executes a parsed command.
    ///
    /// Assignments evaluate their expression and bind the result in a new
    /// snapshot; removal drops the binding if present; expressions evaluate to
    /// a value. Nothing is produced when evaluation fails, so the caller's
    /// environment stays as it was.
    ///
    /// # Example
    /// ```
    /// use rcalc::{
    ///     Environment, Value,
    ///     ast::{AssignDirection, Command, Expr},
    ///     interpreter::evaluator::core::{Context, Effect},
    /// };
    ///
    /// let env = Environment::new();
    /// let command = Command::Assignment { name:      "x".to_string(),
    ///                                     value:     Expr::number(4.0),
    ///                                     direction: AssignDirection::Left, };
    ///
    /// let Effect::Rebind(next) = Context::new(&env).eval_command(&command).unwrap() else {
    ///     panic!("assignment rebinds");
    /// };
    /// assert_eq!(next.get("x"), Some(&Value::Number(4.0)));
    /// ```
    pub fn eval_command(&self, command: &Command) -> EvalResult<Effect> {
        match command {
            Command::Assignment { name, value, direction } => {
                let value = self.eval(value)?;
                debug!(name = %name, direction = ?direction, shape = %value.shape(), "binding variable");
                Ok(Effect::Rebind(self.environment.with_binding(name.as_str(), value)))
            },
            Command::Removal { name } => {
                if !self.environment.contains(name) {
                    debug!(name = %name, "removal of unbound name ignored");
                    return Ok(Effect::Nothing);
                }
                debug!(name = %name, "removing variable");
                Ok(Effect::Rebind(self.environment.without_binding(name)))
            },
            Command::Expression { expr } => Ok(Effect::Value(self.eval(expr)?)),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Binary chains are evaluated from the left. A boolean produced by an
    /// inner operation cannot feed the next operator.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Variable { name } => self.lookup(name),
            Expr::BinaryOp { left, op, right } => {
                let lhs = self.eval(left)?;
                if left.is_binary() && matches!(lhs, Value::Bool(_)) {
                    return Err(RuntimeError::invalid(format!("the boolean result {lhs} cannot \
                                                              be an operand of '{op}'")));
                }
                let rhs = self.eval(right)?;
                Self::eval_binary(&lhs, *op, &rhs)
            },
            Expr::Range { start, step, end } => self.eval_range(start, step.as_deref(), end),
            Expr::Index { target, index } => self.eval_index(target, index),
            Expr::FunctionCall { function, argument } => {
                self.eval_function_call(*function, argument)
            },
        }
    }

    /// Looks up a variable.
    ///
    /// # Errors
    /// [`RuntimeError::SymbolNotFound`] if the name is unbound.
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::SymbolNotFound { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    #[test]
    fn boolean_intermediate_cannot_chain() {
        let env = Environment::new();
        let compare = Expr::BinaryOp { left:  Box::new(Expr::number(1.0)),
                                       op:    BinaryOperator::Less,
                                       right: Box::new(Expr::number(2.0)), };
        let chained = Expr::BinaryOp { left:  Box::new(compare.clone()),
                                       op:    BinaryOperator::Add,
                                       right: Box::new(Expr::number(1.0)), };
        let context = Context::new(&env);

        assert_eq!(context.eval(&compare), Ok(Value::Bool(true)));
        assert!(matches!(context.eval(&chained), Err(RuntimeError::InvalidExpression { .. })));
    }

    #[test]
    fn removing_unbound_name_has_no_effect() {
        let env = Environment::new();
        let command = Command::Removal { name: "a".to_string() };
        assert_eq!(Context::new(&env).eval_command(&command), Ok(Effect::Nothing));
    }
}
