/// Core evaluation logic.
///
/// Contains the tree walk that dispatches every node by its arity, and the
/// evaluation of literal leaves.
pub mod core;

/// Unary operation evaluation.
///
/// Applies entries of the unary operation table to a single operand.
pub mod unary;

/// Binary operation evaluation.
///
/// Applies entries of the binary operation table, checking divisors first.
pub mod binary;
