use logos::Logos;
use tracing::debug;

use crate::{ast::BinaryOperator, error::LexError};

/// The number of characters of unmatched input quoted in a [`LexError`].
const ERROR_FRAGMENT_LEN: usize = 10;

/// Represents a lexical token in one input line.
///
/// Operator spellings, including the Unicode aliases, are normalized here:
/// `×` and `*` both produce `Operator(BinaryOperator::Mul)`.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// String literal tokens, such as `"abc"`. The value excludes the quotes;
    /// there are no escape sequences.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// Numeric literal tokens, such as `3`, `-2` or `0.25`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `my.var_2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_.]*", |lex| lex.slice().to_string())]
    Name(String),
    /// Binary operators.
    #[token("==", |_| BinaryOperator::Equal)]
    #[token("!=", |_| BinaryOperator::NotEqual)]
    #[token("≠", |_| BinaryOperator::NotEqual)]
    #[token("<=", |_| BinaryOperator::LessEqual)]
    #[token("≤", |_| BinaryOperator::LessEqual)]
    #[token("⩽", |_| BinaryOperator::LessEqual)]
    #[token(">=", |_| BinaryOperator::GreaterEqual)]
    #[token("≥", |_| BinaryOperator::GreaterEqual)]
    #[token("⩾", |_| BinaryOperator::GreaterEqual)]
    #[token("&&", |_| BinaryOperator::And)]
    #[token("||", |_| BinaryOperator::Or)]
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("×", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("÷", |_| BinaryOperator::Div)]
    #[token("^", |_| BinaryOperator::Pow)]
    #[token("<", |_| BinaryOperator::Less)]
    #[token(">", |_| BinaryOperator::Greater)]
    #[token("&", |_| BinaryOperator::BitAnd)]
    #[token("|", |_| BinaryOperator::BitOr)]
    Operator(BinaryOperator),
    /// `<-` or `←`
    #[token("<-")]
    #[token("←")]
    LeftArrow,
    /// `->` or `→`
    #[token("->")]
    #[token("→")]
    RightArrow,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `:`
    #[token(":")]
    Colon,
    /// Whitespace, including the Unicode separators `str::trim` strips.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftArrow => write!(f, "<-"),
            Self::RightArrow => write!(f, "->"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Colon => write!(f, ":"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Converts one input line into its tokens.
///
/// Scanning is strictly left to right. Whitespace separates tokens but produces
/// none. The first character sequence that matches no pattern aborts the scan.
///
/// # Errors
/// Returns [`LexError::UnrecognisedInput`] quoting up to ten characters of the
/// trimmed remainder starting at the unmatched position.
///
/// # Example
/// ```
/// use rcalc::{ast::BinaryOperator, interpreter::lexer::{Token, tokenize}};
///
/// let tokens = tokenize("a ← 2 × b").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Name("a".into()),
///                 Token::LeftArrow,
///                 Token::Number(2.0),
///                 Token::Operator(BinaryOperator::Mul),
///                 Token::Name("b".into())]);
///
/// assert!(tokenize("1 @ 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let remainder = &source[lexer.span().start..];
            return Err(LexError::UnrecognisedInput { fragment:
                                                         remainder.trim()
                                                                  .chars()
                                                                  .take(ERROR_FRAGMENT_LEN)
                                                                  .collect(), });
        }
    }

    debug!(count = tokens.len(), "tokenized line");
    Ok(tokens)
}

/// Strips the surrounding quotes from a string literal slice.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which turns into a lex error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
