use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{AssignDirection, Command, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_chain, utils::unrecognised},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The builtin that removes a binding. It is a command, never an expression.
pub(in crate::interpreter::parser) const REMOVE: &str = "rm";

/// Parses a full expression.
///
/// Grammar: `expression := chain`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first operand.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_chain(tokens)
}

/// Classifies a whole token sequence into a [`Command`].
///
/// Forms are tried in order:
///
/// ```text
///     single   := Name | Number | Str
///     assign   := Name "<-" expression
///               | expression "->" Name
///     remove   := "rm" "(" Name ")"
///     evaluate := expression
/// ```
///
/// Every form must consume all tokens.
///
/// # Parameters
/// - `tokens`: The tokens of one line.
/// - `source`: The line itself, quoted in errors.
///
/// # Errors
/// - [`ParseError::InvalidExpression`] for a lone operator or punctuation
///   token, `rm` applied to anything but a name, or `rm` used inside an
///   expression.
/// - [`ParseError::CommandNotRecognised`] for everything else that does not
///   parse.
///
/// # Example
/// ```
/// use rcalc::{
///     ast::{AssignDirection, Command},
///     interpreter::{lexer::tokenize, parser::core::parse_command},
/// };
///
/// let source = "1:3 -> a";
/// let tokens = tokenize(source).unwrap();
/// let command = parse_command(&tokens, source).unwrap();
///
/// assert!(matches!(command,
///                  Command::Assignment { direction: AssignDirection::Right, .. }));
/// ```
pub fn parse_command(tokens: &[Token], source: &str) -> ParseResult<Command> {
    let command = classify(tokens).map_err(|err| match err {
                                      ParseError::CommandNotRecognised { .. } => {
                                          ParseError::CommandNotRecognised { input:
                                                                                 source.trim()
                                                                                       .to_string(), }
                                      },
                                      other => other,
                                  })?;
    debug!(command = command_kind(&command), "parsed command");
    Ok(command)
}

fn classify(tokens: &[Token]) -> ParseResult<Command> {
    match tokens {
        [] => Err(unrecognised()),
        [single] => parse_single(single),
        [Token::Name(name), Token::LeftArrow, rest @ ..] => {
            Ok(Command::Assignment { name:      name.clone(),
                                     value:     parse_all(rest)?,
                                     direction: AssignDirection::Left, })
        },
        [rest @ .., Token::RightArrow, Token::Name(name)] => {
            Ok(Command::Assignment { name:      name.clone(),
                                     value:     parse_all(rest)?,
                                     direction: AssignDirection::Right, })
        },
        [Token::Name(function), Token::LParen, inner @ .., Token::RParen] if function == REMOVE => {
            parse_removal(inner)
        },
        _ => Ok(Command::Expression { expr: parse_all(tokens)? }),
    }
}

/// A one-token line: a lookup or a literal.
fn parse_single(token: &Token) -> ParseResult<Command> {
    match token {
        Token::Name(_) | Token::Number(_) | Token::Str(_) => {
            Ok(Command::Expression { expr: parse_all(std::slice::from_ref(token))? })
        },
        other => {
            Err(ParseError::InvalidExpression { details: format!("'{other}' is not a value") })
        },
    }
}

/// Parses the argument of `rm(...)`. Only a bare name is accepted.
fn parse_removal(inner: &[Token]) -> ParseResult<Command> {
    match inner {
        [Token::Name(name)] => Ok(Command::Removal { name: name.clone() }),
        _ => {
            Err(ParseError::InvalidExpression { details: format!("{REMOVE}() expects a variable \
                                                                  name") })
        },
    }
}

/// Parses an expression that must span every token.
fn parse_all(tokens: &[Token]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(unrecognised());
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    if iter.peek().is_some() {
        return Err(unrecognised());
    }
    Ok(expr)
}

const fn command_kind(command: &Command) -> &'static str {
    match command {
        Command::Assignment { direction: AssignDirection::Left,
                              .. } => "left assignment",
        Command::Assignment { direction: AssignDirection::Right,
                              .. } => "right assignment",
        Command::Removal { .. } => "removal",
        Command::Expression { .. } => "expression",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::BinaryOperator, interpreter::lexer::tokenize};

    fn parse(source: &str) -> ParseResult<Command> {
        let tokens = tokenize(source).unwrap();
        parse_command(&tokens, source)
    }

    #[test]
    fn chains_are_left_leaning() {
        let Command::Expression { expr } = parse("1 + 2 * 3").unwrap() else {
            panic!("expected an expression");
        };
        let Expr::BinaryOp { left, op, .. } = expr else {
            panic!("expected a binary operation");
        };
        assert_eq!(op, BinaryOperator::Mul);
        assert!(left.is_binary());
    }

    #[test]
    fn unrecognised_commands_carry_the_input() {
        assert_eq!(parse("a b"),
                   Err(ParseError::CommandNotRecognised { input: "a b".to_string() }));
        assert_eq!(parse("foo(1)"),
                   Err(ParseError::CommandNotRecognised { input: "foo(1)".to_string() }));
    }

    #[test]
    fn lone_operator_is_invalid() {
        assert!(matches!(parse("+"), Err(ParseError::InvalidExpression { .. })));
    }

    #[test]
    fn removal_requires_a_name() {
        assert_eq!(parse("rm(a)"), Ok(Command::Removal { name: "a".to_string() }));
        assert!(matches!(parse("rm(1)"), Err(ParseError::InvalidExpression { .. })));
        assert!(matches!(parse("rm(a) + 1"), Err(ParseError::InvalidExpression { .. })));
    }
}
