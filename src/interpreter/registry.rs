use std::{collections::HashMap, f64::consts::FRAC_PI_2};

use once_cell::sync::Lazy;

use crate::util::num::truncate_to_i64;

/// Signature of every unary operation.
pub type UnaryFn = fn(f64) -> f64;
/// Signature of every binary operation.
pub type BinaryFn = fn(f64, f64) -> f64;

/// An entry of the binary operation table.
#[derive(Debug, Clone, Copy)]
pub struct BinaryOperation {
    /// Computes `left <op> right`.
    pub apply:         BinaryFn,
    /// Returns `true` for right operands the operation refuses to divide by.
    pub divisor_guard: Option<fn(f64) -> bool>,
}

impl BinaryOperation {
    const fn plain(apply: BinaryFn) -> Self {
        Self { apply,
               divisor_guard: None }
    }

    const fn guarded(apply: BinaryFn, divisor_guard: fn(f64) -> bool) -> Self {
        Self { apply,
               divisor_guard: Some(divisor_guard) }
    }

    /// Whether `divisor` must be rejected before the operation is applied.
    #[must_use]
    pub fn rejects(&self, divisor: f64) -> bool {
        self.divisor_guard.is_some_and(|guard| guard(divisor))
    }
}

static UNARY_OPERATIONS: Lazy<HashMap<&'static str, UnaryFn>> = Lazy::new(|| {
    let table: [(&'static str, UnaryFn); 15] = [("+", |a| a),
                                                 ("-", |a| -a),
                                                 ("sqrt", f64::sqrt),
                                                 ("abs", f64::abs),
                                                 ("sin", f64::sin),
                                                 ("arcsin", f64::asin),
                                                 ("cos", f64::cos),
                                                 ("arccos", f64::acos),
                                                 ("tg", f64::tan),
                                                 ("arctg", f64::atan),
                                                 ("ctg", |a: f64| 1.0 / a.tan()),
                                                 ("arcctg", |a: f64| FRAC_PI_2 - a.atan()),
                                                 ("e", f64::exp),
                                                 ("ln", f64::ln),
                                                 ("lg", f64::log10)];
    table.into_iter().collect()
});

static BINARY_OPERATIONS: Lazy<HashMap<&'static str, BinaryOperation>> = Lazy::new(|| {
    let table: [(&'static str, BinaryOperation); 6] =
        [("+", BinaryOperation::plain(|a, b| a + b)),
         ("-", BinaryOperation::plain(|a, b| a - b)),
         ("*", BinaryOperation::plain(|a, b| a * b)),
         ("/", BinaryOperation::guarded(|a, b| a / b, |b| b == 0.0)),
         ("^", BinaryOperation::plain(f64::powf)),
         ("mod", BinaryOperation::guarded(remainder, |b| truncate_to_i64(b) == 0))];
    table.into_iter().collect()
});

static PRECEDENCE: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([("+", 1), ("-", 1), ("*", 2), ("/", 2), ("mod", 2), ("^", 3)])
});

/// Integer remainder of the truncated operands.
///
/// A divisor that truncates to zero yields NaN; the evaluator rejects such
/// divisors before getting here.
#[allow(clippy::cast_precision_loss)]
fn remainder(a: f64, b: f64) -> f64 {
    let divisor = truncate_to_i64(b);
    if divisor == 0 {
        return f64::NAN;
    }
    truncate_to_i64(a).wrapping_rem(divisor) as f64
}

/// Looks up a unary operation by symbol.
///
/// # Example
/// ```
/// use calcline::interpreter::registry::unary_operation;
///
/// let negate = unary_operation("-").unwrap();
/// assert_eq!(negate(2.0), -2.0);
/// assert!(unary_operation("*").is_none());
/// ```
#[must_use]
pub fn unary_operation(symbol: &str) -> Option<UnaryFn> {
    UNARY_OPERATIONS.get(symbol).copied()
}

/// Looks up a binary operation by symbol.
#[must_use]
pub fn binary_operation(symbol: &str) -> Option<BinaryOperation> {
    BINARY_OPERATIONS.get(symbol).copied()
}

/// Binding priority of a binary operator; `0` for anything that is not one.
///
/// # Example
/// ```
/// use calcline::interpreter::registry::precedence;
///
/// assert_eq!(precedence("+"), 1);
/// assert_eq!(precedence("mod"), 2);
/// assert_eq!(precedence("^"), 3);
/// assert_eq!(precedence("sin"), 0);
/// ```
#[must_use]
pub fn precedence(symbol: &str) -> u8 {
    PRECEDENCE.get(symbol).copied().unwrap_or(0)
}
