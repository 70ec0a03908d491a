/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree built by the parser and dispatches every node
/// to the operator registry according to its number of operands.
///
/// # Responsibilities
/// - Parses literal leaves into `f64` values.
/// - Applies unary and binary operations from the registry.
/// - Reports unknown operations, malformed trees and division by zero.
pub mod evaluator;
/// The lexer module tokenizes an input line for the parser.
///
/// The lexer reads the raw text and produces lexemes on demand: numbers,
/// the `pi` constant, operators, function names and parentheses, plus
/// invalid lexemes carrying any text it does not recognize.
///
/// # Responsibilities
/// - Normalizes `,` to `.` in numeric literals and rejects duplicated
///   separators.
/// - Gives compound keywords (`arcsin`, `arcctg`, ...) priority over the
///   shorter ones they contain.
/// - Records the byte position of every lexeme for error reporting.
pub mod lexer;
/// The parser module builds the expression tree from lexemes.
///
/// The parser is a recursive-descent, precedence-climbing parser. It pulls
/// lexemes from the lexer with one lexeme of lookahead and never backtracks.
///
/// # Responsibilities
/// - Resolves operator priority and associativity.
/// - Tells unary from binary `+`/`-` by position.
/// - Reports invalid operands and unclosed parentheses.
pub mod parser;
/// The registry module holds the operator tables.
///
/// Unary operations, binary operations and binary priorities are immutable
/// tables built once on first use and shared by every evaluation.
pub mod registry;
