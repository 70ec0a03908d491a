use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Tokenizer},
        parser::binary::parse_binary,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one input line into an expression tree.
///
/// Lexemes are pulled from a [`Tokenizer`] on demand. Parsing stops at the
/// first lexeme that cannot continue the expression; whatever follows it is
/// not examined.
///
/// # Errors
/// Returns a `ParseError` for unrecognized text or malformed numbers where an
/// operand is expected, for a missing `)`, and for input that ends where an
/// operand is expected.
///
/// # Example
/// ```
/// use calcline::interpreter::parser::core::parse;
///
/// let expr = parse("1 + 2 * 3").unwrap();
/// assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let mut tokens = Tokenizer::new(source).peekable();
    let expr = parse_expression(&mut tokens)?;

    if let Some(rest) = tokens.peek() {
        trace!(position = rest.position, "input after the expression is ignored");
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// Grammar: `expression := binary(0)`
///
/// # Parameters
/// - `tokens`: Lexeme iterator with one lexeme of lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Lexeme>
{
    parse_binary(tokens, 0)
}
