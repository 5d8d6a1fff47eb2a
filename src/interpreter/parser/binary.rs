use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_term},
    },
};

/// Parses a chain of binary operations.
///
/// All operators share one level and associate to the left, so `1 + 2 * 3`
/// is `(1 + 2) * 3`.
///
/// The rule is: `chain := term (operator term)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first operand.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the single term when no operator follows.
pub fn parse_chain<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_term(tokens)?;
    while let Some(Token::Operator(op)) = tokens.peek() {
        let op = *op;
        tokens.next();
        let right = parse_term(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right) };
    }
    Ok(left)
}
