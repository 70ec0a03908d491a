use snafu::Snafu;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum RuntimeError {
    /// A node with one operand names an operation missing from the unary
    /// table.
    #[snafu(display("Unknown unary operation '{symbol}'."))]
    UnknownUnaryOperation {
        /// The node's symbol.
        symbol: String,
    },
    /// A node with two operands names an operation missing from the binary
    /// table.
    #[snafu(display("Unknown binary operation '{symbol}'."))]
    UnknownBinaryOperation {
        /// The node's symbol.
        symbol: String,
    },
    /// The right operand of `/` is zero, or the right operand of `mod`
    /// truncates to zero.
    #[snafu(display("Division by zero is not allowed (in '{symbol}')."))]
    DivisionByZero {
        /// The operator that rejected its divisor.
        symbol: String,
    },
    /// The tree breaks an invariant the parser guarantees: a leaf that is not
    /// a number, or a node with more than two operands.
    #[snafu(display("Malformed expression: {details}."))]
    MalformedExpression {
        /// What is wrong with the tree.
        details: String,
    },
}
