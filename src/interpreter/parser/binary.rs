use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Lexeme, LexemeKind},
        parser::{core::ParseResult, unary::parse_primary},
        registry::precedence,
    },
};

/// Parses a chain of binary operations whose operators bind tighter than
/// `min_priority`.
///
/// The left operand is a primary. While the next lexeme is a binary operator
/// with a priority above `min_priority`, the operator is consumed, the right
/// operand is parsed with the operator's own priority as the new threshold,
/// and both sides are folded into a binary node. Any other lexeme is left in
/// the stream for the caller.
///
/// This makes chains of equal priority left-associative (`8 - 3 - 2` is
/// `(8 - 3) - 2`, and likewise for `^`) while tighter operators on the right
/// group first (`1 + 2 * 3` is `1 + (2 * 3)`).
///
/// Grammar: `binary(p) := primary { op primary }` where `priority(op) > p`
///
/// # Parameters
/// - `tokens`: Lexeme iterator with one lexeme of lookahead.
/// - `min_priority`: Operators at or below this priority end the chain.
///
/// # Returns
/// The folded expression tree.
pub fn parse_binary<I>(tokens: &mut Peekable<I>, min_priority: u8) -> ParseResult<Expr>
    where I: Iterator<Item = Lexeme>
{
    let mut left = parse_primary(tokens)?;

    while let Some(operator) = tokens.next_if(|lexeme| binding_priority(lexeme) > min_priority) {
        let priority = binding_priority(&operator);
        let right = parse_binary(tokens, priority)?;
        left = Expr::binary(operator.text(), left, right);
    }

    Ok(left)
}

/// Priority of a lexeme in binary operator position.
///
/// Only valid lexemes listed in the precedence table bind; everything else,
/// including invalid lexemes and the end of a group, has priority `0`.
fn binding_priority(lexeme: &Lexeme) -> u8 {
    match &lexeme.kind {
        LexemeKind::Valid(token) => precedence(token.symbol()),
        LexemeKind::Unrecognized(_) | LexemeKind::Malformed(_) => 0,
    }
}
