use crate::{
    ast::Expr,
    error::{RuntimeError, runtime_error::MalformedExpressionSnafu},
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns its value.
///
/// Nodes are dispatched by arity: leaves are parsed as numbers, nodes with
/// one operand go through the unary table and nodes with two operands through
/// the binary table. Any other shape is reported as malformed.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The computed value. Non-finite values produced by the operations
/// themselves (such as `sqrt` of a negative number) are returned as is.
///
/// # Example
/// ```
/// use calcline::{ast::Expr, interpreter::evaluator::core::eval};
///
/// let expr = Expr::binary("^", Expr::literal("2"), Expr::literal("10"));
/// assert_eq!(eval(&expr).unwrap(), 1024.0);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr.operands.as_slice() {
        [] => eval_literal(&expr.symbol),
        [operand] => eval_unary(&expr.symbol, operand),
        [left, right] => eval_binary(&expr.symbol, left, right),
        operands => {
            MalformedExpressionSnafu { details: format!("'{}' has {} operands",
                                                        expr.symbol,
                                                        operands.len()) }.fail()
        },
    }
}

/// Parses a leaf's literal text.
///
/// The parser only produces leaves from validated numbers, so a failure here
/// means the tree was not built by the parser.
fn eval_literal(text: &str) -> EvalResult<f64> {
    text.parse::<f64>().map_err(|err| {
                           MalformedExpressionSnafu { details: format!("'{text}' is not a number ({err})") }.build()
                       })
}
