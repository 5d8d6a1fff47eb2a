use std::rc::Rc;

use crate::interpreter::value::matrix::Matrix;

/// Represents a runtime value in the interpreter.
///
/// Values are produced by evaluating expressions and stored in the
/// environment. Vector and matrix buffers sit behind `Rc`, so cloning a value
/// (or a whole environment) never copies element data.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
    /// A boolean value, produced by comparisons and `&&`/`||`.
    Bool(bool),
    /// A vector of numbers, produced by ranges and vector arithmetic.
    Vector(Rc<Vec<f64>>),
    /// A vector of booleans, produced by elementwise comparisons.
    BoolVector(Rc<Vec<bool>>),
    /// A vector of strings.
    StrVector(Rc<Vec<String>>),
    /// A dense matrix.
    Matrix(Rc<Matrix>),
}

/// The shape of a [`Value`], without its contents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    /// [`Value::Number`]
    Number,
    /// [`Value::Str`]
    Str,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Vector`]
    Vector,
    /// [`Value::BoolVector`]
    BoolVector,
    /// [`Value::StrVector`]
    StrVector,
    /// [`Value::Matrix`]
    Matrix,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Str => "string",
            Self::Bool => "boolean",
            Self::Vector => "vector",
            Self::BoolVector => "boolean vector",
            Self::StrVector => "string vector",
            Self::Matrix => "matrix",
        };
        write!(f, "{name}")
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(Rc::new(v))
    }
}

impl From<Vec<bool>> for Value {
    fn from(v: Vec<bool>) -> Self {
        Self::BoolVector(Rc::new(v))
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Self::StrVector(Rc::new(v))
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(Rc::new(m))
    }
}

impl Value {
    /// Classifies the value.
    ///
    /// # Example
    /// ```
    /// use rcalc::interpreter::value::core::{Shape, Value};
    ///
    /// assert_eq!(Value::from(vec![true, false]).shape(), Shape::BoolVector);
    /// assert_eq!(Value::from("abc").shape(), Shape::Str);
    /// ```
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Number(_) => Shape::Number,
            Self::Str(_) => Shape::Str,
            Self::Bool(_) => Shape::Bool,
            Self::Vector(_) => Shape::Vector,
            Self::BoolVector(_) => Shape::BoolVector,
            Self::StrVector(_) => Shape::StrVector,
            Self::Matrix(_) => Shape::Matrix,
        }
    }

    /// The number of elements of a vector value, `None` for other shapes.
    #[must_use]
    pub fn vector_len(&self) -> Option<usize> {
        match self {
            Self::Vector(v) => Some(v.len()),
            Self::BoolVector(v) => Some(v.len()),
            Self::StrVector(v) => Some(v.len()),
            _ => None,
        }
    }
}

fn write_list<T>(f: &mut std::fmt::Formatter<'_>,
                 items: &[T],
                 write_item: impl Fn(&mut std::fmt::Formatter<'_>, &T) -> std::fmt::Result)
                 -> std::fmt::Result {
    write!(f, "[")?;
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write_item(f, item)?;
    }
    write!(f, "]")
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Vector(v) => write_list(f, v, |f, n| write!(f, "{n}")),
            Self::BoolVector(v) => write_list(f, v, |f, b| write!(f, "{b}")),
            Self::StrVector(v) => write_list(f, v, |f, s| write!(f, "\"{s}\"")),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
