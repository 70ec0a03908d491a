/// Binary operator parsing.
///
/// Implements precedence climbing over the binary operators of the operator
/// registry, folding operands into left-associative chains.
pub mod binary;
/// Core parsing entry points.
///
/// Defines `ParseResult` and the functions that start parsing a line or a
/// nested expression.
pub mod core;
/// Operand parsing.
///
/// Parses numbers, parenthesized groups and prefix operator applications.
pub mod unary;
