use snafu::Snafu;

/// Represents all errors that can occur during tokenizing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum ParseError {
    /// Found text that is neither a number nor a known operator or function.
    #[snafu(display("Invalid input at position {position}: unrecognized expression '{token}'."))]
    InvalidToken {
        /// The offending text.
        token:    String,
        /// Byte offset of the text in the input.
        position: usize,
    },
    /// A numeric literal contains more than one decimal separator.
    #[snafu(display("Invalid input at position {position}: malformed number '{literal}'."))]
    MalformedLiteral {
        /// The literal as it was written.
        literal:  String,
        /// Byte offset of the literal in the input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[snafu(display("Missing ')' for the '(' at position {position}."))]
    UnmatchedParenthesis {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// An operand was expected but the input ended.
    #[snafu(display("Unexpected end of input: an operand is missing."))]
    UnexpectedEndOfInput {},
}
