use std::fmt;

/// A node of the expression tree.
///
/// The node's arity is the number of operands it holds:
/// - no operands: `symbol` is a numeric literal such as `2.5`,
/// - one operand: `symbol` names a unary operation (`-`, `sin`, ...),
/// - two operands: `symbol` names a binary operation (`+`, `mod`, ...).
///
/// The parser only builds those three shapes, but nothing stops a caller from
/// assembling others with [`Expr::new`]; the evaluator reports them as errors
/// instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// Literal text or operation name.
    pub symbol:   String,
    /// Operands, left to right.
    pub operands: Vec<Self>,
}

impl Expr {
    /// Creates a node with an arbitrary list of operands.
    pub fn new(symbol: impl Into<String>, operands: Vec<Self>) -> Self {
        Self { symbol: symbol.into(),
               operands }
    }

    /// Creates a leaf holding a numeric literal.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    /// Creates a unary application such as `sqrt 4`.
    pub fn unary(symbol: impl Into<String>, operand: Self) -> Self {
        Self::new(symbol, vec![operand])
    }

    /// Creates a binary application such as `1 + 2`.
    pub fn binary(symbol: impl Into<String>, left: Self, right: Self) -> Self {
        Self::new(symbol, vec![left, right])
    }
}

/// Renders the tree in fully parenthesized prefix form.
///
/// # Example
/// ```
/// use calcline::ast::Expr;
///
/// let expr = Expr::binary("+",
///                         Expr::literal("1"),
///                         Expr::binary("*", Expr::literal("2"), Expr::literal("3")));
///
/// assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operands.is_empty() {
            return write!(f, "{}", self.symbol);
        }

        write!(f, "({}", self.symbol)?;
        for operand in &self.operands {
            write!(f, " {operand}")?;
        }
        write!(f, ")")
    }
}
