use std::iter::Peekable;

use snafu::OptionExt;

use crate::{
    ast::Expr,
    error::parse_error::{
        InvalidTokenSnafu, MalformedLiteralSnafu, UnexpectedEndOfInputSnafu,
        UnmatchedParenthesisSnafu,
    },
    interpreter::{
        lexer::{Lexeme, LexemeKind, PI_LITERAL, Token},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (operand) expression.
///
/// Grammar:
/// ```text
///     primary := "(" expression ")"
///              | number
///              | operator primary
/// ```
/// Any valid lexeme that is neither a number nor a parenthesis is taken as a
/// prefix operator, which is why `-` and `+` are unary wherever an operand is
/// expected. Whether the symbol really is a unary operation is checked at
/// evaluation time.
///
/// # Parameters
/// - `tokens`: Lexeme iterator positioned at the start of an operand.
///
/// # Returns
/// The parsed operand.
///
/// # Errors
/// - `InvalidToken` for unrecognized text.
/// - `MalformedLiteral` for a number with duplicate separators.
/// - `UnmatchedParenthesis` when a group is not closed.
/// - `UnexpectedEndOfInput` when the input ends here.
pub fn parse_primary<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Lexeme>
{
    let Lexeme { kind, position } = tokens.next().context(UnexpectedEndOfInputSnafu)?;

    match kind {
        LexemeKind::Unrecognized(token) => InvalidTokenSnafu { token, position }.fail(),
        LexemeKind::Malformed(literal) => MalformedLiteralSnafu { literal, position }.fail(),
        LexemeKind::Valid(Token::LParen) => parse_grouping(tokens, position),
        LexemeKind::Valid(Token::Number(literal)) => Ok(Expr::literal(literal)),
        LexemeKind::Valid(Token::Pi) => Ok(Expr::literal(PI_LITERAL)),
        LexemeKind::Valid(operator) => {
            let operand = parse_primary(tokens)?;
            Ok(Expr::unary(operator.symbol(), operand))
        },
    }
}

/// Parses the inside of a parenthesized group whose `(` was already consumed
/// at `open`.
fn parse_grouping<I>(tokens: &mut Peekable<I>, open: usize) -> ParseResult<Expr>
    where I: Iterator<Item = Lexeme>
{
    let inner = parse_expression(tokens)?;

    match tokens.next() {
        Some(Lexeme { kind: LexemeKind::Valid(Token::RParen),
                      .. }) => Ok(inner),
        _ => UnmatchedParenthesisSnafu { position: open }.fail(),
    }
}
