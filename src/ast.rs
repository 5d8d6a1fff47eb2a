use crate::interpreter::value::core::Value;

/// Represents a literal value written directly in source code.
///
/// Only numbers and strings can be spelled literally; every other value shape
/// is produced by evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal, such as `3` or `-2.5`.
    Number(f64),
    /// A double-quoted string literal, without its quotes.
    Str(String),
}

/// Builtin functions callable with the `name(arg)` form inside expressions.
///
/// `rm` is not listed: it changes the environment, so the parser turns it into
/// [`Command::Removal`] instead of an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Builtin {
    /// `identity(n)`: the n×n identity matrix.
    Identity,
}

impl Builtin {
    /// Looks up a builtin by its source name.
    ///
    /// # Example
    /// ```
    /// use rcalc::ast::Builtin;
    ///
    /// assert_eq!(Builtin::from_name("identity"), Some(Builtin::Identity));
    /// assert_eq!(Builtin::from_name("rm"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "identity" => Some(Self::Identity),
            _ => None,
        }
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identity => write!(f, "identity"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Binary operations form a left-leaning chain: `a + b - c` is
/// `BinaryOp(BinaryOp(a, +, b), -, c)`. There is no precedence between binary
/// operators; ranges bind tighter than any of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal number or string.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// An inclusive range, `start : end` or `start : step : end`.
    Range {
        /// First element.
        start: Box<Self>,
        /// Step magnitude, `1` when absent.
        step:  Option<Box<Self>>,
        /// Last element bound (inclusive).
        end:   Box<Self>,
    },
    /// Indexing into a named vector, `name[index]`.
    Index {
        /// Name of the indexed variable.
        target: String,
        /// A scalar index or a vector of indices (usually a range).
        index:  Box<Self>,
    },
    /// A builtin function call, `name(argument)`.
    FunctionCall {
        /// The function being called.
        function: Builtin,
        /// The single argument.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Builds a number literal node.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Literal { value: LiteralValue::Number(value) }
    }

    /// Builds a variable reference node.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Returns `true` if the node is a binary operation.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::BinaryOp { .. })
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

/// Which way an assignment arrow points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignDirection {
    /// `name <- value`
    Left,
    /// `value -> name`
    Right,
}

/// Represents a whole input line after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Binds the value of an expression to a name.
    Assignment {
        /// The name of the variable.
        name:      String,
        /// The value which is being assigned.
        value:     Expr,
        /// The arrow the user wrote.
        direction: AssignDirection,
    },
    /// `rm(name)`: removes a binding.
    Removal {
        /// The name of the variable.
        name: String,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// Represents a binary operator.
///
/// Unicode spellings are normalized by the lexer, so `×` arrives here as
/// [`BinaryOperator::Mul`] and `≤` as [`BinaryOperator::LessEqual`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`, `×`)
    Mul,
    /// Division (`/`, `÷`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`, `≠`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`, `≤`, `⩽`)
    LessEqual,
    /// Greater than or equal (`>=`, `≥`, `⩾`)
    GreaterEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Elementwise and (`&`)
    BitAnd,
    /// Elementwise or (`|`)
    BitOr,
}

impl BinaryOperator {
    /// Returns the operator to use when the operands are swapped.
    ///
    /// `a op b` equals `b op.flipped() a` for every operator that has a
    /// flipped form. Relational operators mirror, symmetric operators map to
    /// themselves, and `-`, `/` and `^` have no flipped form.
    ///
    /// # Example
    /// ```
    /// use rcalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Greater.flipped(), Some(BinaryOperator::Less));
    /// assert_eq!(BinaryOperator::Add.flipped(), Some(BinaryOperator::Add));
    /// assert_eq!(BinaryOperator::Sub.flipped(), None);
    /// ```
    #[must_use]
    pub const fn flipped(self) -> Option<Self> {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul,
            NotEqual, Or, Pow, Sub,
        };

        match self {
            Greater => Some(Less),
            Less => Some(Greater),
            GreaterEqual => Some(LessEqual),
            LessEqual => Some(GreaterEqual),
            Sub | Div | Pow => None,
            Add | Mul | Equal | NotEqual | And | Or | BitAnd | BitOr => Some(self),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul,
            NotEqual, Or, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            And => "&&",
            Or => "||",
            BitAnd => "&",
            BitOr => "|",
        };
        write!(f, "{operator}")
    }
}
