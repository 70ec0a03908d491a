use snafu::Snafu;

/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// input line: unrecognized text, malformed numbers, a missing `)` or an
/// operand cut off by the end of the input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression tree, such as division by zero or an operator used with the
/// wrong arity.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while computing a line.
///
/// Wraps the phase-specific errors without adding text of its own, so the
/// message a user sees is the one of the underlying error.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum Error {
    /// The line could not be parsed.
    #[snafu(transparent)]
    Parse {
        /// The underlying parse error.
        source: ParseError,
    },
    /// The expression tree could not be evaluated.
    #[snafu(transparent)]
    Runtime {
        /// The underlying runtime error.
        source: RuntimeError,
    },
}
