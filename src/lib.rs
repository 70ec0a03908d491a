//! # calcline
//!
//! calcline evaluates single-line arithmetic expressions: numbers (with `.`
//! or `,` as the decimal point), parentheses, the binary operators `+ - * /
//! mod ^`, prefix operators such as `-`, `sqrt`, `sin` or `ln`, and the
//! constant `pi`. Each line is parsed and evaluated independently.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::{Error, ParseError, RuntimeError},
    util::format::format_result,
};

/// Defines the expression tree.
///
/// This module declares `Expr`, the node type built by the parser and walked
/// by the evaluator. A node is a symbol plus zero, one or two operands.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// This module defines every error that can be raised while computing a line,
/// split by phase, plus an umbrella `Error` returned by [`calculate`].
///
/// # Responsibilities
/// - Defines error enums for parse and evaluation failures.
/// - Carries the offending text, symbol or position of each failure.
/// - Renders user-facing messages through `Display`.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, the parser, the operator registry
/// and the evaluator.
pub mod interpreter;
/// General utilities: result formatting, logging setup and numeric
/// conversions.
pub mod util;

/// Parses one line into an expression tree.
///
/// # Example
/// ```
/// let expr = calcline::parse("-1 - -2").unwrap();
/// assert_eq!(expr.to_string(), "(- (- 1) (- 2))");
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    interpreter::parser::core::parse(source)
}

/// Evaluates an expression tree.
pub fn evaluate(expr: &Expr) -> Result<f64, RuntimeError> {
    interpreter::evaluator::core::eval(expr)
}

/// Parses and evaluates one line.
///
/// # Errors
/// Returns an error if the line cannot be parsed or the resulting tree cannot
/// be evaluated.
///
/// # Examples
/// ```
/// use calcline::{
///     calculate,
///     error::{Error, RuntimeError},
/// };
///
/// assert_eq!(calculate("(1 + 2) * 3").unwrap(), 9.0);
///
/// let err = calculate("1 / 0").unwrap_err();
/// assert!(matches!(err,
///                  Error::Runtime { source: RuntimeError::DivisionByZero { .. } }));
/// ```
pub fn calculate(source: &str) -> Result<f64, Error> {
    let expr = parse(source)?;
    debug!(%expr, "parsed expression");

    let value = evaluate(&expr)?;
    trace!(value, "evaluated expression");

    Ok(value)
}

/// Returns the text printed for one line: the result with two decimal places,
/// or the error message.
///
/// # Examples
/// ```
/// use calcline::run_line;
///
/// assert_eq!(run_line("500,0 / 3.0"), "166.67");
/// assert_eq!(run_line("(5 + 5"), "Missing ')' for the '(' at position 0.");
/// ```
#[must_use]
pub fn run_line(source: &str) -> String {
    calculate(source).map_or_else(|err| err.to_string(), format_result)
}
