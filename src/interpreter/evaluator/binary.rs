use snafu::{OptionExt, ensure};

use crate::{
    ast::Expr,
    error::runtime_error::{DivisionByZeroSnafu, UnknownBinaryOperationSnafu},
    interpreter::{
        evaluator::core::{EvalResult, eval},
        registry::binary_operation,
    },
};

/// Evaluates a node with two operands.
///
/// The symbol is looked up first. The right operand is evaluated before the
/// left one so a guarded operator (`/`, `mod`) can reject its divisor before
/// anything else is computed; each operand is evaluated exactly once.
///
/// # Errors
/// - `UnknownBinaryOperation` if the symbol is not in the binary table.
/// - `DivisionByZero` if the operator's divisor guard rejects the right
///   operand.
/// - Any error raised while evaluating the operands.
///
/// # Example
/// ```
/// use calcline::{
///     ast::Expr,
///     error::RuntimeError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// let result = eval_binary("/", &Expr::literal("1"), &Expr::literal("4"));
/// assert_eq!(result.unwrap(), 0.25);
///
/// let result = eval_binary("/", &Expr::literal("1"), &Expr::literal("0"));
/// assert!(matches!(result, Err(RuntimeError::DivisionByZero { .. })));
/// ```
pub fn eval_binary(symbol: &str, left: &Expr, right: &Expr) -> EvalResult<f64> {
    let operation = binary_operation(symbol).context(UnknownBinaryOperationSnafu { symbol })?;

    let divisor = eval(right)?;
    ensure!(!operation.rejects(divisor), DivisionByZeroSnafu { symbol });

    let dividend = eval(left)?;
    Ok((operation.apply)(dividend, divisor))
}
