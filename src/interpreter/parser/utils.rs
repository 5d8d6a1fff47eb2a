use std::iter::Peekable;

use crate::{error::ParseError, interpreter::{lexer::Token, parser::core::ParseResult}};

/// Consumes the next token, requiring it to equal `expected`.
///
/// # Errors
/// Returns [`ParseError::CommandNotRecognised`] if the next token differs or
/// the input ends.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(tok) if tok == expected => Ok(()),
        _ => Err(unrecognised()),
    }
}

/// Consumes the next token if it equals `token`.
///
/// # Returns
/// `true` if a token was consumed.
pub(in crate::interpreter::parser) fn consume_if<'a, I>(tokens: &mut Peekable<I>,
                                                        token: &Token)
                                                        -> bool
    where I: Iterator<Item = &'a Token>
{
    if tokens.peek().is_some_and(|tok| *tok == token) {
        tokens.next();
        return true;
    }
    false
}

/// A structural failure. The input is filled in by
/// [`parse_command`](crate::interpreter::parser::core::parse_command), which
/// knows the whole line.
pub(in crate::interpreter::parser) const fn unrecognised() -> ParseError {
    ParseError::CommandNotRecognised { input: String::new() }
}
