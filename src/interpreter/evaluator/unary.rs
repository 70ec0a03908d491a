use snafu::OptionExt;

use crate::{
    ast::Expr,
    error::runtime_error::UnknownUnaryOperationSnafu,
    interpreter::{
        evaluator::core::{EvalResult, eval},
        registry::unary_operation,
    },
};

/// Evaluates a node with a single operand.
///
/// The symbol is looked up before the operand is evaluated, so an unknown
/// operation is reported even if its operand would fail as well.
///
/// # Example
/// ```
/// use calcline::{ast::Expr, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary("abs", &Expr::literal("5")).unwrap(), 5.0);
/// assert!(eval_unary("*", &Expr::literal("5")).is_err());
/// ```
pub fn eval_unary(symbol: &str, operand: &Expr) -> EvalResult<f64> {
    let operation = unary_operation(symbol).context(UnknownUnaryOperationSnafu { symbol })?;
    Ok(operation(eval(operand)?))
}
