use std::iter::Peekable;

use crate::{
    ast::{Builtin, Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, REMOVE, parse_expression},
            utils::{consume_if, expect_token, unrecognised},
        },
    },
};

/// Parses a primary expression optionally extended into a range.
///
/// Ranges bind tighter than any binary operator, so `1:3 + 1` adds one to
/// each element of `1:3`.
///
/// Grammar:
/// ```text
///     term := primary (":" primary (":" primary)?)?
/// ```
/// With three parts the middle one is the step: `start : step : end`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first primary.
///
/// # Returns
/// The primary itself, or an `Expr::Range`.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let start = parse_primary(tokens)?;
    if !consume_if(tokens, &Token::Colon) {
        return Ok(start);
    }

    let second = parse_primary(tokens)?;
    if !consume_if(tokens, &Token::Colon) {
        return Ok(Expr::Range { start: Box::new(start),
                                step:  None,
                                end:   Box::new(second), });
    }

    let end = parse_primary(tokens)?;
    Ok(Expr::Range { start: Box::new(start),
                     step:  Some(Box::new(second)),
                     end:   Box::new(end), })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := Number
///              | Str
///              | Name
///              | Name "(" expression ")"
///              | Name "[" expression "]"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed node.
///
/// # Errors
/// - [`ParseError::InvalidExpression`] if `rm` is called inside an
///   expression.
/// - [`ParseError::CommandNotRecognised`] for unknown functions and any other
///   token.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::Number(n)) => Ok(Expr::number(*n)),
        Some(Token::Str(s)) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()) }),
        Some(Token::Name(name)) => match tokens.peek() {
            Some(Token::LParen) => {
                tokens.next();
                parse_call(tokens, name)
            },
            Some(Token::LBracket) => {
                tokens.next();
                let index = parse_expression(tokens)?;
                expect_token(tokens, &Token::RBracket)?;
                Ok(Expr::Index { target: name.clone(),
                                 index:  Box::new(index), })
            },
            _ => Ok(Expr::variable(name)),
        },
        _ => Err(unrecognised()),
    }
}

/// Parses `name ( expression )` after the opening parenthesis.
fn parse_call<'a, I>(tokens: &mut Peekable<I>, name: &str) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if name == REMOVE {
        return Err(ParseError::InvalidExpression { details: format!("{REMOVE}() cannot be used \
                                                                     inside an expression") });
    }
    let function = Builtin::from_name(name).ok_or_else(unrecognised)?;

    let argument = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen)?;

    Ok(Expr::FunctionCall { function,
                            argument: Box::new(argument) })
}
