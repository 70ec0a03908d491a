/// Result formatting.
///
/// Renders computed values the way the calculator prints them: fixed
/// notation with two decimal places.
pub mod format;
/// Logging setup for the command-line binary.
///
/// Installs a `tracing` subscriber writing compact, untimed lines to
/// standard error.
pub mod logger;
/// Numeric conversion helpers.
///
/// Truncating float-to-integer conversions used by the integer operations of
/// the operator tables.
pub mod num;
